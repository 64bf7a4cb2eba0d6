/// An error type for the matrix operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum Mat4Error {
    /// Error when a composition is requested over zero matrices.
    #[error("Cannot compose an empty sequence of matrices")]
    EmptyComposition,

    /// Error when the determinant is too close to zero to invert.
    #[error("Matrix is singular (determinant {determinant})")]
    SingularMatrix {
        /// The determinant of the rejected matrix.
        determinant: f64,
    },
}
