use crate::mat4::Mat4;

/// Rotation about the x axis.
///
/// # Arguments
///
/// * `degrees` - The rotation angle in degrees.
///
/// # Returns
///
/// A matrix with rows `[1, 0, 0, 0]`, `[0, c, s, 0]`, `[0, -s, c, 0]`, `[0, 0, 0, 1]`.
pub fn rotate_x(degrees: f64) -> Mat4 {
    let (s, c) = degrees.to_radians().sin_cos();
    Mat4::from_rows(
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, s, 0.0],
        [0.0, -s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    )
}

/// Rotation about the y axis.
///
/// # Arguments
///
/// * `degrees` - The rotation angle in degrees.
///
/// # Returns
///
/// A matrix with rows `[c, 0, s, 0]`, `[0, 1, 0, 0]`, `[-s, 0, c, 0]`, `[0, 0, 0, 1]`.
pub fn rotate_y(degrees: f64) -> Mat4 {
    let (s, c) = degrees.to_radians().sin_cos();
    Mat4::from_rows(
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    )
}

/// Rotation about the z axis.
///
/// # Arguments
///
/// * `degrees` - The rotation angle in degrees.
///
/// # Returns
///
/// A matrix with rows `[c, -s, 0, 0]`, `[s, c, 0, 0]`, `[0, 0, 1, 0]`, `[0, 0, 0, 1]`.
///
/// Example:
///
/// ```
/// use homog_mat4::transforms::rotate_z;
///
/// let p = rotate_z(90.0).apply3([1.0, 0.0, 0.0]);
/// assert!((p[1] - 1.0).abs() < 1e-12);
/// ```
pub fn rotate_z(degrees: f64) -> Mat4 {
    let (s, c) = degrees.to_radians().sin_cos();
    Mat4::from_rows(
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    )
}

/// Translation by `(x, y, z)`.
///
/// Points (`w = 1`) are moved, directions (`w = 0`) are left unchanged.
pub fn translate(x: f64, y: f64, z: f64) -> Mat4 {
    Mat4::from_rows(
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    )
}

/// Non-uniform scale, `diag(x, y, z, 1)`.
pub fn scale(x: f64, y: f64, z: f64) -> Mat4 {
    Mat4::from_rows(
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    )
}

/// Perspective projection from a vertical field of view, like `gluPerspective`.
///
/// # Arguments
///
/// * `fov` - The vertical field of view in degrees.
/// * `aspect` - The viewport aspect ratio, width over height.
/// * `near` - The distance to the near clipping plane.
/// * `far` - The distance to the far clipping plane.
///
/// # Returns
///
/// The projection matrix. The eye looks down `-z` and the near and far planes map to
/// `z = -1` and `z = 1` after the perspective divide.
///
/// PRECONDITION: `near` and `far` are distinct and non-zero, `aspect` is non-zero.
///
/// Example:
///
/// ```
/// use homog_mat4::transforms::frustum;
///
/// let proj = frustum(90.0, 1.0, 1.0, 100.0);
/// let ndc = proj.apply3([0.0, 0.0, -1.0]);
/// assert!((ndc[2] + 1.0).abs() < 1e-12);
/// ```
pub fn frustum(fov: f64, aspect: f64, near: f64, far: f64) -> Mat4 {
    let f = 1.0 / (fov.to_radians() / 2.0).tan();
    Mat4::from_rows(
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [
            0.0,
            0.0,
            (near + far) / (near - far),
            (2.0 * near * far) / (near - far),
        ],
        [0.0, 0.0, -1.0, 0.0],
    )
}
