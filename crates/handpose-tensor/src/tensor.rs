use num_traits::Zero;
use thiserror::Error;

/// An error type for tensor operations.
#[derive(Error, Debug, PartialEq)]
pub enum TensorError {
    /// Tensor shape does not match the provided data.
    ///
    /// The product of the shape dimensions must equal the number of elements.
    #[error("Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data")]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },

    /// Index exceeds tensor bounds.
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index that was attempted
        index: usize,
        /// The size of the dimension being indexed
        size: usize,
    },

    /// Tensor dimensions incompatible for the requested operation.
    #[error("Dimension mismatch: {message}. Expected shape: {expected}, got: {actual}")]
    DimensionMismatch {
        /// Human-readable description of the mismatch
        message: String,
        /// Expected shape description
        expected: String,
        /// Actual shape description
        actual: String,
    },
}

impl TensorError {
    /// Creates an InvalidShape error.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }

    /// Creates an IndexOutOfBounds error.
    pub fn index_out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    /// Creates a DimensionMismatch error with formatted shapes.
    pub fn dimension_mismatch(
        message: impl Into<String>,
        expected: &[usize],
        actual: &[usize],
    ) -> Self {
        Self::DimensionMismatch {
            message: message.into(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        }
    }
}

/// Computes the strides for a row-major (C-contiguous) tensor layout.
///
/// The rightmost dimension has stride 1, and each dimension's stride is the
/// product of all dimensions to its right.
///
/// # Examples
///
/// ```rust
/// use handpose_tensor::get_strides_from_shape;
///
/// // a batch of 2 rotation matrices
/// let strides = get_strides_from_shape([2, 3, 3]);
/// assert_eq!(strides, [9, 3, 1]);
/// ```
pub fn get_strides_from_shape<const N: usize>(shape: [usize; N]) -> [usize; N] {
    let mut strides: [usize; N] = [0; N];
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = stride;
        stride *= shape[i];
    }
    strides
}

/// A multi-dimensional array with owned, contiguous data.
///
/// # Type Parameters
///
/// * `T` - The element type stored in the tensor
/// * `N` - The number of dimensions
///
/// The data is always stored in row-major order, so `strides` is fully
/// determined by `shape`. Tensors are values: every operation in this
/// workspace produces a fresh tensor and never mutates its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T, const N: usize> {
    storage: Vec<T>,
    /// The shape of the tensor.
    pub shape: [usize; N],
    /// The strides of the tensor data in memory.
    pub strides: [usize; N],
}

impl<T, const N: usize> Tensor<T, N> {
    /// Get the data of the tensor as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Get the data of the tensor as a mutable slice.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.storage
    }

    /// Returns an iterator over the elements of the tensor in row-major order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }

    /// Creates a new `Tensor` with the given shape and data.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape of the tensor, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use handpose_tensor::Tensor2;
    ///
    /// let t = Tensor2::<f32>::from_shape_vec([1, 3], vec![0.0, 0.0, 1.57]).unwrap();
    /// assert_eq!(t.shape, [1, 3]);
    /// assert_eq!(t.strides, [3, 1]);
    /// ```
    pub fn from_shape_vec(shape: [usize; N], data: Vec<T>) -> Result<Self, TensorError> {
        let numel = shape.iter().product::<usize>();
        if numel != data.len() {
            return Err(TensorError::invalid_shape(numel, data.len()));
        }
        Ok(Self {
            storage: data,
            shape,
            strides: get_strides_from_shape(shape),
        })
    }

    /// Creates a new `Tensor` with the given shape and slice of data.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape of the tensor, an error is returned.
    pub fn from_shape_slice(shape: [usize; N], data: &[T]) -> Result<Self, TensorError>
    where
        T: Clone,
    {
        Self::from_shape_vec(shape, data.to_vec())
    }

    /// Creates a new `Tensor` filled with `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use handpose_tensor::Tensor2;
    ///
    /// let mask = Tensor2::<f32>::from_shape_val([2, 21], 1.0);
    /// assert_eq!(mask.numel(), 42);
    /// ```
    pub fn from_shape_val(shape: [usize; N], value: T) -> Self
    where
        T: Clone,
    {
        let numel = shape.iter().product::<usize>();
        Self {
            storage: vec![value; numel],
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Creates a new `Tensor` of zeros.
    pub fn zeros(shape: [usize; N]) -> Self
    where
        T: Zero + Clone,
    {
        Self::from_shape_val(shape, T::zero())
    }

    /// Create a new `Tensor` with the given shape and a function to generate the data.
    ///
    /// The function `f` is called with the index of the element to generate.
    ///
    /// # Example
    ///
    /// ```
    /// use handpose_tensor::Tensor2;
    ///
    /// let eye = Tensor2::<f32>::from_shape_fn([3, 3], |[i, j]| if i == j { 1.0 } else { 0.0 });
    /// assert_eq!(eye.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    /// ```
    pub fn from_shape_fn<F>(shape: [usize; N], f: F) -> Self
    where
        F: Fn([usize; N]) -> T,
    {
        let numel = shape.iter().product::<usize>();
        let data = (0..numel)
            .map(|i| {
                let mut index = [0; N];
                let mut j = i;
                for k in (0..N).rev() {
                    index[k] = j % shape[k];
                    j /= shape[k];
                }
                f(index)
            })
            .collect();
        Self {
            storage: data,
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Returns the number of elements in the tensor.
    #[inline]
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    /// Get the offset of the element at the given index.
    ///
    /// Returns `None` if any index is out of bounds for its dimension.
    pub fn get_iter_offset(&self, index: [usize; N]) -> Option<usize> {
        let mut offset = 0;
        for ((&idx, dim_size), stride) in index.iter().zip(self.shape).zip(self.strides) {
            if idx >= dim_size {
                return None;
            }
            offset += idx * stride;
        }
        Some(offset)
    }

    /// Get the index of the element at the given offset. The reverse of `Self::get_iter_offset`.
    ///
    /// # Errors
    ///
    /// If the offset is out of bounds (>= numel), an error is returned.
    pub fn get_index(&self, offset: usize) -> Result<[usize; N], TensorError> {
        let numel = self.numel();
        if offset >= numel {
            return Err(TensorError::index_out_of_bounds(offset, numel));
        }
        let mut idx = [0; N];
        let mut rem = offset;
        for (dim_i, &s) in self.strides.iter().enumerate() {
            idx[dim_i] = rem / s;
            rem %= s;
        }
        Ok(idx)
    }

    /// Get the element at the given index without checking if the index is out of bounds.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset lies outside the storage.
    pub fn get_unchecked(&self, index: [usize; N]) -> &T {
        let offset = index
            .iter()
            .zip(self.strides)
            .fold(0, |acc, (&idx, stride)| acc + idx * stride);
        &self.storage[offset]
    }

    /// Get the element at the given index, or `None` if the index is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use handpose_tensor::Tensor3;
    ///
    /// let t = Tensor3::<u8>::from_shape_fn([1, 2, 3], |[_, j, k]| (j * 3 + k) as u8);
    /// assert_eq!(t.get([0, 1, 2]), Some(&5));
    /// assert_eq!(t.get([0, 2, 0]), None);
    /// ```
    pub fn get(&self, index: [usize; N]) -> Option<&T> {
        self.get_iter_offset(index)
            .and_then(|offset| self.storage.get(offset))
    }

    /// Reinterpret the tensor with a new shape of rank `M`.
    ///
    /// The data is moved, not copied.
    ///
    /// # Errors
    ///
    /// If the number of elements of the new shape differs from the current one, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use handpose_tensor::Tensor2;
    ///
    /// // (B, J * 3) -> (B, J, 3)
    /// let pose = Tensor2::<f32>::zeros([2, 48]);
    /// let pose = pose.reshape([2, 16, 3]).unwrap();
    /// assert_eq!(pose.strides, [48, 3, 1]);
    /// ```
    pub fn reshape<const M: usize>(self, shape: [usize; M]) -> Result<Tensor<T, M>, TensorError> {
        let numel = shape.iter().product::<usize>();
        if numel != self.numel() {
            return Err(TensorError::invalid_shape(numel, self.numel()));
        }
        Ok(Tensor {
            storage: self.storage,
            shape,
            strides: get_strides_from_shape(shape),
        })
    }

    /// Apply a function to each element of the tensor.
    ///
    /// # Example
    ///
    /// ```
    /// use handpose_tensor::Tensor1;
    ///
    /// let t = Tensor1::<f32>::from_shape_vec([3], vec![-1.0, 0.0, 2.0]).unwrap();
    /// assert_eq!(t.map(|x| x.abs()).as_slice(), &[1.0, 0.0, 2.0]);
    /// ```
    pub fn map<U, F>(&self, f: F) -> Tensor<U, N>
    where
        F: Fn(&T) -> U,
    {
        Tensor {
            storage: self.storage.iter().map(f).collect(),
            shape: self.shape,
            strides: self.strides,
        }
    }

    /// Apply a function pairwise to the elements of two tensors of identical shape.
    ///
    /// # Errors
    ///
    /// If the shapes differ, a [`TensorError::DimensionMismatch`] is returned.
    pub fn element_wise_op<U, F>(&self, other: &Tensor<T, N>, op: F) -> Result<Tensor<U, N>, TensorError>
    where
        F: Fn(&T, &T) -> U,
    {
        if self.shape != other.shape {
            return Err(TensorError::dimension_mismatch(
                "element-wise operands must share a shape",
                &self.shape,
                &other.shape,
            ));
        }
        let data = self
            .storage
            .iter()
            .zip(other.storage.iter())
            .map(|(a, b)| op(a, b))
            .collect();
        Ok(Tensor {
            storage: data,
            shape: self.shape,
            strides: self.strides,
        })
    }
}
