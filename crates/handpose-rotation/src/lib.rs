#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Two layers are provided:
//!
//! - [`so3`]: single-rotation helpers on `glam` types (`hat`, `vee`, `exp`, `log`).
//! - [`axis_angle`]: the same conversions applied independently to every entry
//!   of a [`handpose_tensor::Tensor`] of arbitrary leading shape.

/// Batched axis-angle <-> rotation matrix conversions.
pub mod axis_angle;

/// Error types for the batched conversions.
pub mod error;

/// Single-element SO(3) helpers.
pub mod so3;

pub use axis_angle::{axis_angle_to_rotation_matrix, rotation_matrix_to_axis_angle};
pub use error::RotationError;
