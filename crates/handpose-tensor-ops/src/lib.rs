#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for tensor operations.
///
/// Defines [`TensorOpsError`] for handling failures during tensor computations.
pub mod error;

/// Tensor operations used by the pose and coordinate losses.
pub mod ops;

pub use error::TensorOpsError;
pub use ops::{abs_diff, mean, mul_broadcast, sum};
