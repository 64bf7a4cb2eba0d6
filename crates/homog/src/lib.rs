//! Homogeneous 4x4 transform matrices for 3D rendering pipelines.
//!
//! This is the top-level crate. It re-exports the member crates of the workspace.

#[doc(inline)]
pub use homog_mat4 as mat4;

#[doc(inline)]
pub use homog_mat4::{compose, transforms, Mat4, Mat4Error, IDENTITY};
