use handpose_rotation::RotationError;
use handpose_tensor::TensorError;
use handpose_tensor_ops::TensorOpsError;
use thiserror::Error;

/// An error type for the loss computations.
#[derive(Error, Debug, PartialEq)]
pub enum LossError {
    /// The operands of a loss do not have compatible shapes.
    #[error("Shape mismatch for {name}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Name of the offending operand
        name: &'static str,
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        actual: Vec<usize>,
    },

    /// The per-item pose length is not a whole number of axis-angle triplets.
    #[error("Pose dimension {0} is not a multiple of 3")]
    InvalidPoseDim(usize),

    /// Tensor error
    #[error(transparent)]
    TensorError(#[from] TensorError),

    /// Tensor operation error
    #[error(transparent)]
    TensorOpsError(#[from] TensorOpsError),

    /// Rotation conversion error
    #[error(transparent)]
    RotationError(#[from] RotationError),
}
