#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `homog-mat4` builds the camera, model and projection transforms of a 3D rendering
//! pipeline. Matrices are row-major `f64` values: `m[i][j]` is row `i`, column `j`, and a
//! matrix acts on column vectors from the left.
//!
//! Transforms are built with the functions in [`transforms`], chained with [`compose`] (the
//! first matrix is the last one applied) and applied to points with [`Mat4::apply3`].
//!
//! ```rust
//! use homog_mat4::{compose, transforms};
//!
//! let mvp = compose(&[
//!     transforms::frustum(45.0, 4.0 / 3.0, 0.1, 100.0),
//!     transforms::translate(0.0, 0.0, -5.0),
//!     transforms::rotate_y(30.0),
//! ])
//! .unwrap();
//!
//! let ndc = mvp.apply3([0.0, 0.0, 0.0]);
//! assert!(ndc.iter().all(|v| v.is_finite()));
//! ```

/// Error types for the matrix operations.
pub mod error;

/// The 4x4 matrix type and its core operations.
pub mod mat4;

/// Constructors for the standard affine and projective transforms.
pub mod transforms;

#[cfg(feature = "bincode")]
mod bincode;

#[cfg(feature = "serde")]
mod serde;

pub use crate::error::Mat4Error;
pub use crate::mat4::{compose, Mat4, IDENTITY};
