#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Both losses return the unreduced, element-wise loss tensor; the caller picks
//! the reduction (e.g. [`handpose_tensor_ops::mean`]).

/// Masked L1 loss over 2.5D joint coordinates.
pub mod coord;

/// Error types for the losses.
pub mod error;

/// Masked L1 loss over joint rotations.
pub mod pose;

pub use coord::CoordLoss;
pub use error::LossError;
pub use pose::PoseLoss;
