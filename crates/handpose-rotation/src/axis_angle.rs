use glam::Vec3;
use handpose_tensor::Tensor;

use crate::error::RotationError;
use crate::so3;

/// Convert a batch of axis-angle vectors to rotation matrices.
///
/// The input has shape `(..., 3)`; the output has shape `(..., 3, 3)` with each
/// trailing block stored row-major. Every vector is converted independently with
/// [`so3::exp`], so entries below the small-angle threshold become the identity
/// without affecting their neighbours.
///
/// # Type Parameters
///
/// * `N` - rank of the input.
/// * `M` - rank of the output, must be `N + 1`.
///
/// # Errors
///
/// Returns [`RotationError::RankMismatch`] if `M != N + 1` and
/// [`RotationError::InvalidShape`] if the last input dimension is not 3.
///
/// # Example
///
/// ```
/// use handpose_tensor::Tensor;
/// use handpose_rotation::axis_angle_to_rotation_matrix;
///
/// let aa = Tensor::<f32, 2>::from_shape_vec([1, 3], vec![0.0, 0.0, std::f32::consts::FRAC_PI_2]).unwrap();
/// let r: Tensor<f32, 3> = axis_angle_to_rotation_matrix(&aa).unwrap();
/// assert_eq!(r.shape, [1, 3, 3]);
/// assert!((r.get([0, 0, 1]).unwrap() + 1.0).abs() < 1e-5);
/// ```
pub fn axis_angle_to_rotation_matrix<const N: usize, const M: usize>(
    axis_angle: &Tensor<f32, N>,
) -> Result<Tensor<f32, M>, RotationError> {
    if M != N + 1 {
        return Err(RotationError::RankMismatch {
            input: N,
            output: M,
        });
    }
    if N == 0 || axis_angle.shape[N - 1] != 3 {
        return Err(RotationError::InvalidShape {
            expected: vec![3],
            actual: axis_angle.shape.to_vec(),
        });
    }

    let mut shape = [0; M];
    shape[..N - 1].copy_from_slice(&axis_angle.shape[..N - 1]);
    shape[M - 2] = 3;
    shape[M - 1] = 3;

    let data = axis_angle
        .as_slice()
        .chunks_exact(3)
        .flat_map(|v| so3::mat3_to_row_major(&so3::exp(Vec3::from_slice(v))))
        .collect::<Vec<_>>();

    log::trace!(
        "converted {} axis-angle vectors to rotation matrices",
        data.len() / 9
    );

    Ok(Tensor::from_shape_vec(shape, data)?)
}

/// Convert a batch of rotation matrices to axis-angle vectors.
///
/// The input has shape `(..., 3, 3)` with row-major blocks; the output has shape
/// `(..., 3)`. Matrices are assumed to be proper rotations and are not validated.
/// Entries whose angle falls below the small-angle threshold become the zero vector.
///
/// This is the left inverse of [`axis_angle_to_rotation_matrix`] for angles in
/// `(1e-3, π)` only. See [`so3`] for the restriction at and beyond `π`.
///
/// # Type Parameters
///
/// * `N` - rank of the input.
/// * `M` - rank of the output, must be `N - 1`.
///
/// # Errors
///
/// Returns [`RotationError::RankMismatch`] if `M + 1 != N` and
/// [`RotationError::InvalidShape`] if the last two input dimensions are not `(3, 3)`.
pub fn rotation_matrix_to_axis_angle<const N: usize, const M: usize>(
    matrix: &Tensor<f32, N>,
) -> Result<Tensor<f32, M>, RotationError> {
    if M + 1 != N || N < 2 {
        return Err(RotationError::RankMismatch {
            input: N,
            output: M,
        });
    }
    if matrix.shape[N - 2] != 3 || matrix.shape[N - 1] != 3 {
        return Err(RotationError::InvalidShape {
            expected: vec![3, 3],
            actual: matrix.shape.to_vec(),
        });
    }

    let mut shape = [0; M];
    shape[..M - 1].copy_from_slice(&matrix.shape[..N - 2]);
    shape[M - 1] = 3;

    let data = matrix
        .as_slice()
        .chunks_exact(9)
        .flat_map(|m| so3::log(&so3::mat3_from_row_major(m)).to_array())
        .collect::<Vec<_>>();

    Ok(Tensor::from_shape_vec(shape, data)?)
}
