use handpose_tensor::Tensor;
use num_traits::{Float, Zero};

use crate::error::TensorOpsError;

/// Compute the element-wise absolute difference `|a - b|` of two tensors.
///
/// # Errors
///
/// If the shapes of the tensors don't match, an error is returned.
///
/// # Example
///
/// ```
/// use handpose_tensor::Tensor;
/// use handpose_tensor_ops::abs_diff;
///
/// let a = Tensor::<f32, 1>::from_shape_vec([3], vec![1.0, 2.0, 3.0]).unwrap();
/// let b = Tensor::<f32, 1>::from_shape_vec([3], vec![3.0, 2.0, 1.0]).unwrap();
/// assert_eq!(abs_diff(&a, &b).unwrap().as_slice(), &[2.0, 0.0, 2.0]);
/// ```
pub fn abs_diff<T, const N: usize>(
    a: &Tensor<T, N>,
    b: &Tensor<T, N>,
) -> Result<Tensor<T, N>, TensorOpsError>
where
    T: Float,
{
    if a.shape != b.shape {
        return Err(TensorOpsError::ShapeMismatch(
            a.shape.to_vec(),
            b.shape.to_vec(),
        ));
    }
    Ok(a.element_wise_op(b, |&x, &y| (x - y).abs())?)
}

/// Multiply `a` by `b`, broadcasting `b` into the shape of `a`.
///
/// Every dimension of `b` must either equal the matching dimension of `a` or be 1.
/// The result always has the shape of `a`.
///
/// # Errors
///
/// If `b` cannot be broadcast into `a`, an error is returned.
///
/// # Example
///
/// ```
/// use handpose_tensor::Tensor;
/// use handpose_tensor_ops::mul_broadcast;
///
/// let a = Tensor::<f32, 2>::from_shape_val([2, 3], 2.0);
/// let mask = Tensor::<f32, 2>::from_shape_vec([2, 1], vec![1.0, 0.0]).unwrap();
/// let out = mul_broadcast(&a, &mask).unwrap();
/// assert_eq!(out.as_slice(), &[2.0, 2.0, 2.0, 0.0, 0.0, 0.0]);
/// ```
pub fn mul_broadcast<T, const N: usize>(
    a: &Tensor<T, N>,
    b: &Tensor<T, N>,
) -> Result<Tensor<T, N>, TensorOpsError>
where
    T: Copy + std::ops::Mul<Output = T>,
{
    let broadcastable = a
        .shape
        .iter()
        .zip(b.shape.iter())
        .all(|(&da, &db)| da == db || db == 1);
    if !broadcastable {
        return Err(TensorOpsError::ShapeMismatch(
            a.shape.to_vec(),
            b.shape.to_vec(),
        ));
    }

    if a.shape == b.shape {
        return Ok(a.element_wise_op(b, |&x, &y| x * y)?);
    }

    // strides of `b` with broadcast dimensions pinned to zero
    let mut b_strides = b.strides;
    for (s, &db) in b_strides.iter_mut().zip(b.shape.iter()) {
        if db == 1 {
            *s = 0;
        }
    }

    let b_data = b.as_slice();
    let data = a
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let mut rem = i;
            let mut b_offset = 0;
            for (&sa, &sb) in a.strides.iter().zip(b_strides.iter()) {
                b_offset += (rem / sa) * sb;
                rem %= sa;
            }
            x * b_data[b_offset]
        })
        .collect();

    Ok(Tensor::from_shape_vec(a.shape, data)?)
}

/// Sum all the elements of the tensor.
///
/// # Example
///
/// ```
/// use handpose_tensor::Tensor;
/// use handpose_tensor_ops::sum;
///
/// let t = Tensor::<i32, 2>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(sum(&t), 10);
/// ```
pub fn sum<T, const N: usize>(tensor: &Tensor<T, N>) -> T
where
    T: Zero + Copy,
{
    tensor.iter().fold(T::zero(), |acc, &x| acc + x)
}

/// Compute the mean of all the elements of the tensor.
///
/// An empty tensor has a mean of zero.
pub fn mean<T, const N: usize>(tensor: &Tensor<T, N>) -> T
where
    T: Float,
{
    let numel = tensor.numel();
    if numel == 0 {
        return T::zero();
    }
    match T::from(numel) {
        Some(n) => sum(tensor) / n,
        None => T::nan(),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use handpose_tensor::{Tensor, TensorError};

    use super::*;

    #[test]
    fn test_abs_diff_shape_mismatch() -> Result<(), TensorError> {
        let a = Tensor::<f32, 1>::from_shape_vec([3], vec![1.0, 2.0, 3.0])?;
        let b = Tensor::<f32, 1>::from_shape_vec([4], vec![4.0, 5.0, 6.0, 7.0])?;
        let result = abs_diff(&a, &b);

        if let Err(TensorOpsError::ShapeMismatch(shape_a, shape_b)) = &result {
            assert_eq!(shape_a, &vec![3]);
            assert_eq!(shape_b, &vec![4]);
        } else {
            panic!("Expected ShapeMismatch error");
        }
        Ok(())
    }

    #[test]
    fn test_mul_broadcast_trailing() -> Result<(), TensorOpsError> {
        // (B, J, 3, 3) times a (B, J, 1, 1) joint mask
        let a = Tensor::<f32, 4>::from_shape_val([2, 2, 3, 3], 1.5);
        let mask = Tensor::<f32, 4>::from_shape_vec([2, 2, 1, 1], vec![1.0, 0.0, 0.0, 1.0])?;
        let out = mul_broadcast(&a, &mask)?;
        assert_eq!(out.shape, [2, 2, 3, 3]);
        for b in 0..2 {
            for j in 0..2 {
                let expected = if b == j { 1.5 } else { 0.0 };
                for r in 0..3 {
                    for c in 0..3 {
                        assert_eq!(out.get([b, j, r, c]), Some(&expected));
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_mul_broadcast_middle_dim() -> Result<(), TensorOpsError> {
        let a = Tensor::<f32, 3>::from_shape_fn([2, 3, 2], |[i, j, k]| (i * 6 + j * 2 + k) as f32);
        let b = Tensor::<f32, 3>::from_shape_vec([2, 1, 2], vec![1.0, 2.0, 3.0, 4.0])?;
        let out = mul_broadcast(&a, &b)?;
        assert_eq!(out.get([0, 2, 1]), Some(&(5.0 * 2.0)));
        assert_eq!(out.get([1, 1, 0]), Some(&(8.0 * 3.0)));
        Ok(())
    }

    #[test]
    fn test_mul_broadcast_rejects_incompatible() {
        let a = Tensor::<f32, 2>::zeros([2, 3]);
        let b = Tensor::<f32, 2>::zeros([2, 2]);
        assert_eq!(
            mul_broadcast(&a, &b),
            Err(TensorOpsError::ShapeMismatch(vec![2, 3], vec![2, 2]))
        );
    }

    #[test]
    fn test_mean() -> Result<(), TensorError> {
        let t = Tensor::<f32, 2>::from_shape_vec([2, 2], vec![1.0, 2.0, 3.0, 6.0])?;
        assert_relative_eq!(mean(&t), 3.0);
        assert_eq!(mean(&Tensor::<f32, 1>::zeros([0])), 0.0);
        Ok(())
    }
}
