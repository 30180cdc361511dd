#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `handpose-tensor` provides the batched array used by the rotation and loss crates.
//! A [`Tensor`] owns a contiguous row-major buffer together with its shape and
//! strides; its rank is a const generic so shape errors on rank are caught at
//! compile time, while size errors are reported through [`TensorError`].
//!
//! # Quick Start
//!
//! ```rust
//! use handpose_tensor::Tensor;
//!
//! // a batch of two axis-angle vectors
//! let t = Tensor::<f32, 2>::from_shape_vec([2, 3], vec![0.0, 0.0, 1.0, 0.5, 0.0, 0.0]).unwrap();
//! assert_eq!(t.get([1, 0]), Some(&0.5));
//!
//! // flatten the leading dimensions away
//! let flat = t.reshape([6]).unwrap();
//! assert_eq!(flat.shape, [6]);
//! ```

/// Tensor module containing the main tensor implementation and error types.
pub mod tensor;

pub use crate::tensor::{get_strides_from_shape, Tensor, TensorError};

/// Type alias for a 1-dimensional tensor.
pub type Tensor1<T> = Tensor<T, 1>;

/// Type alias for a 2-dimensional tensor.
pub type Tensor2<T> = Tensor<T, 2>;

/// Type alias for a 3-dimensional tensor.
pub type Tensor3<T> = Tensor<T, 3>;

/// Type alias for a 4-dimensional tensor.
pub type Tensor4<T> = Tensor<T, 4>;
