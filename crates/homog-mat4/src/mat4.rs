use std::ops::{Index, Mul};

use crate::error::Mat4Error;

/// A 4x4 matrix of double-precision values acting on homogeneous column vectors.
///
/// Storage is row-major: `m[i][j]` is the entry at row `i`, column `j`. A 3D point is embedded
/// as `[x, y, z, 1]` and a direction as `[x, y, z, 0]`.
///
/// Matrices are plain values. Every operation returns a new matrix and leaves its inputs
/// untouched.
///
/// Example:
///
/// ```
/// use homog_mat4::Mat4;
///
/// let m = Mat4::from_rows(
///     [1.0, 0.0, 0.0, 2.0],
///     [0.0, 1.0, 0.0, 3.0],
///     [0.0, 0.0, 1.0, 4.0],
///     [0.0, 0.0, 0.0, 1.0],
/// );
/// assert_eq!(m[1][3], 3.0);
/// assert_eq!(m.apply3([0.0, 0.0, 0.0]), [2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4(pub [[f64; 4]; 4]);

/// The 4x4 identity matrix.
pub const IDENTITY: Mat4 = Mat4::IDENTITY;

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Create a new matrix from its rows.
    #[inline]
    pub const fn new(data: [[f64; 4]; 4]) -> Self {
        Self(data)
    }

    /// Create a new matrix from 4 rows.
    #[inline]
    pub const fn from_rows(r0: [f64; 4], r1: [f64; 4], r2: [f64; 4], r3: [f64; 4]) -> Self {
        Self([r0, r1, r2, r3])
    }

    /// Create a new matrix from 4 columns.
    pub fn from_cols(c0: [f64; 4], c1: [f64; 4], c2: [f64; 4], c3: [f64; 4]) -> Self {
        Self(std::array::from_fn(|i| [c0[i], c1[i], c2[i], c3[i]]))
    }

    /// Get a row by index.
    #[inline]
    pub fn row(&self, idx: usize) -> [f64; 4] {
        self.0[idx]
    }

    /// Get a column by index.
    #[inline]
    pub fn col(&self, idx: usize) -> [f64; 4] {
        [self.0[0][idx], self.0[1][idx], self.0[2][idx], self.0[3][idx]]
    }

    /// Return the transpose of the matrix, `result[i][j] = self[j][i]`.
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.0[0], self.0[1], self.0[2], self.0[3])
    }

    /// Compute the determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        expand_first_row(&self.0, &self.cofactors())
    }

    /// Compute the inverse with the closed-form adjugate formula.
    ///
    /// The 16 cofactors are computed analytically and scaled by the reciprocal of the
    /// determinant. There is no pivoting and no singularity check.
    ///
    /// PRECONDITION: the matrix is invertible. A zero determinant yields `inf`/`NaN` entries;
    /// use [`Mat4::try_inverse`] when singular input is possible.
    pub fn inverse(&self) -> Self {
        let cofactors = self.cofactors();
        let det = expand_first_row(&self.0, &cofactors);
        adjugate_scaled(&cofactors, 1.0 / det)
    }

    /// Compute the inverse, rejecting matrices whose determinant is not finite or whose
    /// magnitude is not greater than `epsilon`.
    ///
    /// A non-finite determinant covers both non-finite entries and finite entries whose
    /// products overflow.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - The smallest determinant magnitude accepted as invertible.
    ///
    /// # Returns
    ///
    /// The inverse matrix, or [`Mat4Error::SingularMatrix`] carrying the determinant.
    pub fn try_inverse(&self, epsilon: f64) -> Result<Self, Mat4Error> {
        let cofactors = self.cofactors();
        let determinant = expand_first_row(&self.0, &cofactors);

        if !determinant.is_finite() || determinant.abs() <= epsilon {
            log::debug!("refusing to invert matrix with determinant {determinant}");
            return Err(Mat4Error::SingularMatrix { determinant });
        }

        Ok(adjugate_scaled(&cofactors, 1.0 / determinant))
    }

    /// Apply the matrix to a 4-component vector, `result[i] = sum_j m[i][j] * v[j]`.
    ///
    /// No homogeneous normalization is performed.
    pub fn apply4(&self, v: [f64; 4]) -> [f64; 4] {
        let mut r = [0.0; 4];
        for (ri, row) in r.iter_mut().zip(self.0.iter()) {
            for (m, x) in row.iter().zip(v.iter()) {
                *ri += m * x;
            }
        }
        r
    }

    /// Apply the matrix to a 3D point and perform the perspective divide.
    ///
    /// The point is extended with `w = 1`, transformed, and the first three components are
    /// divided by the resulting `w`.
    ///
    /// PRECONDITION: the transformed `w` is not zero. Points on the eye plane of a
    /// perspective projection produce `inf`/`NaN` coordinates.
    pub fn apply3(&self, v: [f64; 3]) -> [f64; 3] {
        let r = self.apply4([v[0], v[1], v[2], 1.0]);
        [r[0] / r[3], r[1] / r[3], r[2] / r[3]]
    }

    /// Check that every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().flatten().all(|v| v.is_finite())
    }

    /// Return the 16 entries in row-major order.
    pub fn to_rows_array(&self) -> [f64; 16] {
        std::array::from_fn(|k| self.0[k / 4][k % 4])
    }

    /// Return the 16 entries in column-major order, the layout expected by OpenGL-style
    /// uniform uploads.
    pub fn to_cols_array(&self) -> [f64; 16] {
        std::array::from_fn(|k| self.0[k % 4][k / 4])
    }

    /// Return the 16 entries in column-major order narrowed to single precision.
    pub fn to_cols_array_f32(&self) -> [f32; 16] {
        self.to_cols_array().map(|v| v as f32)
    }

    /// Signed cofactors `C[r][c] = (-1)^(r + c) * minor(r, c)`, each written out as the six
    /// triple products of its 3x3 minor.
    fn cofactors(&self) -> [[f64; 4]; 4] {
        let m = &self.0;

        let c00 = m[1][1] * m[2][2] * m[3][3]
            + m[1][2] * m[2][3] * m[3][1]
            + m[1][3] * m[2][1] * m[3][2]
            - m[1][1] * m[2][3] * m[3][2]
            - m[1][2] * m[2][1] * m[3][3]
            - m[1][3] * m[2][2] * m[3][1];
        let c01 = m[1][0] * m[2][3] * m[3][2]
            + m[1][2] * m[2][0] * m[3][3]
            + m[1][3] * m[2][2] * m[3][0]
            - m[1][0] * m[2][2] * m[3][3]
            - m[1][2] * m[2][3] * m[3][0]
            - m[1][3] * m[2][0] * m[3][2];
        let c02 = m[1][0] * m[2][1] * m[3][3]
            + m[1][1] * m[2][3] * m[3][0]
            + m[1][3] * m[2][0] * m[3][1]
            - m[1][0] * m[2][3] * m[3][1]
            - m[1][1] * m[2][0] * m[3][3]
            - m[1][3] * m[2][1] * m[3][0];
        let c03 = m[1][0] * m[2][2] * m[3][1]
            + m[1][1] * m[2][0] * m[3][2]
            + m[1][2] * m[2][1] * m[3][0]
            - m[1][0] * m[2][1] * m[3][2]
            - m[1][1] * m[2][2] * m[3][0]
            - m[1][2] * m[2][0] * m[3][1];
        let c10 = m[0][1] * m[2][3] * m[3][2]
            + m[0][2] * m[2][1] * m[3][3]
            + m[0][3] * m[2][2] * m[3][1]
            - m[0][1] * m[2][2] * m[3][3]
            - m[0][2] * m[2][3] * m[3][1]
            - m[0][3] * m[2][1] * m[3][2];
        let c11 = m[0][0] * m[2][2] * m[3][3]
            + m[0][2] * m[2][3] * m[3][0]
            + m[0][3] * m[2][0] * m[3][2]
            - m[0][0] * m[2][3] * m[3][2]
            - m[0][2] * m[2][0] * m[3][3]
            - m[0][3] * m[2][2] * m[3][0];
        let c12 = m[0][0] * m[2][3] * m[3][1]
            + m[0][1] * m[2][0] * m[3][3]
            + m[0][3] * m[2][1] * m[3][0]
            - m[0][0] * m[2][1] * m[3][3]
            - m[0][1] * m[2][3] * m[3][0]
            - m[0][3] * m[2][0] * m[3][1];
        let c13 = m[0][0] * m[2][1] * m[3][2]
            + m[0][1] * m[2][2] * m[3][0]
            + m[0][2] * m[2][0] * m[3][1]
            - m[0][0] * m[2][2] * m[3][1]
            - m[0][1] * m[2][0] * m[3][2]
            - m[0][2] * m[2][1] * m[3][0];
        let c20 = m[0][1] * m[1][2] * m[3][3]
            + m[0][2] * m[1][3] * m[3][1]
            + m[0][3] * m[1][1] * m[3][2]
            - m[0][1] * m[1][3] * m[3][2]
            - m[0][2] * m[1][1] * m[3][3]
            - m[0][3] * m[1][2] * m[3][1];
        let c21 = m[0][0] * m[1][3] * m[3][2]
            + m[0][2] * m[1][0] * m[3][3]
            + m[0][3] * m[1][2] * m[3][0]
            - m[0][0] * m[1][2] * m[3][3]
            - m[0][2] * m[1][3] * m[3][0]
            - m[0][3] * m[1][0] * m[3][2];
        let c22 = m[0][0] * m[1][1] * m[3][3]
            + m[0][1] * m[1][3] * m[3][0]
            + m[0][3] * m[1][0] * m[3][1]
            - m[0][0] * m[1][3] * m[3][1]
            - m[0][1] * m[1][0] * m[3][3]
            - m[0][3] * m[1][1] * m[3][0];
        let c23 = m[0][0] * m[1][2] * m[3][1]
            + m[0][1] * m[1][0] * m[3][2]
            + m[0][2] * m[1][1] * m[3][0]
            - m[0][0] * m[1][1] * m[3][2]
            - m[0][1] * m[1][2] * m[3][0]
            - m[0][2] * m[1][0] * m[3][1];
        let c30 = m[0][1] * m[1][3] * m[2][2]
            + m[0][2] * m[1][1] * m[2][3]
            + m[0][3] * m[1][2] * m[2][1]
            - m[0][1] * m[1][2] * m[2][3]
            - m[0][2] * m[1][3] * m[2][1]
            - m[0][3] * m[1][1] * m[2][2];
        let c31 = m[0][0] * m[1][2] * m[2][3]
            + m[0][2] * m[1][3] * m[2][0]
            + m[0][3] * m[1][0] * m[2][2]
            - m[0][0] * m[1][3] * m[2][2]
            - m[0][2] * m[1][0] * m[2][3]
            - m[0][3] * m[1][2] * m[2][0];
        let c32 = m[0][0] * m[1][3] * m[2][1]
            + m[0][1] * m[1][0] * m[2][3]
            + m[0][3] * m[1][1] * m[2][0]
            - m[0][0] * m[1][1] * m[2][3]
            - m[0][1] * m[1][3] * m[2][0]
            - m[0][3] * m[1][0] * m[2][1];
        let c33 = m[0][0] * m[1][1] * m[2][2]
            + m[0][1] * m[1][2] * m[2][0]
            + m[0][2] * m[1][0] * m[2][1]
            - m[0][0] * m[1][2] * m[2][1]
            - m[0][1] * m[1][0] * m[2][2]
            - m[0][2] * m[1][1] * m[2][0];

        [
            [c00, c01, c02, c03],
            [c10, c11, c12, c13],
            [c20, c21, c22, c23],
            [c30, c31, c32, c33],
        ]
    }
}

/// Laplace expansion of the determinant along row 0.
#[inline]
fn expand_first_row(m: &[[f64; 4]; 4], cofactors: &[[f64; 4]; 4]) -> f64 {
    m[0][0] * cofactors[0][0]
        + m[0][1] * cofactors[0][1]
        + m[0][2] * cofactors[0][2]
        + m[0][3] * cofactors[0][3]
}

/// The transposed cofactor matrix scaled by `inv_det`.
#[inline]
fn adjugate_scaled(cofactors: &[[f64; 4]; 4], inv_det: f64) -> Mat4 {
    Mat4(std::array::from_fn(|i| {
        std::array::from_fn(|j| cofactors[j][i] * inv_det)
    }))
}

/// Compose a non-empty sequence of matrices into their product `a[0] * a[1] * ... * a[n-1]`.
///
/// Applying the result to a vector applies the last matrix first: the first matrix is the
/// outermost transform. A single matrix is returned unchanged.
///
/// # Arguments
///
/// * `matrices` - The matrices to compose, outermost first.
///
/// # Returns
///
/// The product, or [`Mat4Error::EmptyComposition`] when `matrices` is empty.
///
/// Example:
///
/// ```
/// use homog_mat4::{compose, transforms::{scale, translate}};
///
/// let m = compose(&[translate(1.0, 0.0, 0.0), scale(2.0, 2.0, 2.0)]).unwrap();
/// assert_eq!(m.apply3([1.0, 1.0, 1.0]), [3.0, 2.0, 2.0]);
/// ```
pub fn compose(matrices: &[Mat4]) -> Result<Mat4, Mat4Error> {
    let (first, rest) = matrices
        .split_first()
        .ok_or(Mat4Error::EmptyComposition)?;

    log::trace!("composing {} matrices", matrices.len());

    Ok(rest.iter().fold(*first, |acc, m| acc * *m))
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for Mat4 {
    type Output = [f64; 4];

    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.0[row]
    }
}

impl From<[[f64; 4]; 4]> for Mat4 {
    #[inline]
    fn from(data: [[f64; 4]; 4]) -> Self {
        Self(data)
    }
}

impl From<Mat4> for [[f64; 4]; 4] {
    #[inline]
    fn from(m: Mat4) -> Self {
        m.0
    }
}

// Matrix-matrix multiplication.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut r = [[0.0; 4]; 4];
        for (i, row) in r.iter_mut().enumerate() {
            for j in 0..4 {
                for (k, val) in row.iter_mut().enumerate() {
                    *val += self.0[i][j] * rhs.0[j][k];
                }
            }
        }
        Mat4(r)
    }
}

// Matrix-vector multiplication.
impl Mul<[f64; 4]> for Mat4 {
    type Output = [f64; 4];

    #[inline]
    fn mul(self, rhs: [f64; 4]) -> Self::Output {
        self.apply4(rhs)
    }
}
