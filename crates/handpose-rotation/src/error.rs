use handpose_tensor::TensorError;
use thiserror::Error;

/// An error type for the batched rotation conversions.
///
/// Only shape problems are reported; non-finite values propagate into the output.
#[derive(Error, Debug, PartialEq)]
pub enum RotationError {
    /// The trailing dimensions of the input are not the expected ones.
    #[error("Invalid shape {actual:?}: trailing dimensions must be {expected:?}")]
    InvalidShape {
        /// Expected trailing dimensions
        expected: Vec<usize>,
        /// Full shape of the input
        actual: Vec<usize>,
    },

    /// The requested output rank is inconsistent with the input rank.
    #[error("Rank mismatch: input of rank {input} cannot produce an output of rank {output}")]
    RankMismatch {
        /// Rank of the input tensor
        input: usize,
        /// Rank of the requested output tensor
        output: usize,
    },

    /// Tensor error
    #[error(transparent)]
    TensorError(#[from] TensorError),
}
