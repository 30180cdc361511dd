use handpose_tensor::TensorError;
use thiserror::Error;

/// An error type for tensor operations.
#[derive(Error, Debug, PartialEq)]
pub enum TensorOpsError {
    /// Tensor error
    #[error("Error with the tensor: {0}")]
    TensorError(#[from] TensorError),

    /// Shape mismatch
    #[error("Shape mismatch: {0:?} != {1:?}")]
    ShapeMismatch(Vec<usize>, Vec<usize>),
}
