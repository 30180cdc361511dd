use handpose_rotation::{axis_angle_to_rotation_matrix, rotation_matrix_to_axis_angle};
use handpose_tensor::Tensor;
use handpose_tensor_ops::{abs_diff, mul_broadcast};

use crate::error::LossError;

/// Masked L1 loss between predicted and ground-truth joint rotations.
///
/// Poses are flattened axis-angle parameters of shape `(B, J * 3)` and the
/// validity mask has shape `(B, J)`. A joint with a zero mask contributes zero
/// loss, unless its pose is not finite: `0 * NaN` is still NaN.
#[derive(Debug, Default, Clone, Copy)]
pub struct PoseLoss;

impl PoseLoss {
    /// Create a new pose loss.
    pub fn new() -> Self {
        Self
    }

    /// Compare the poses in rotation-matrix space.
    ///
    /// Both poses are converted with [`axis_angle_to_rotation_matrix`] and the
    /// loss is `|R_out - R_gt| * valid[:, :, None, None]`, of shape `(B, J, 3, 3)`.
    ///
    /// # Errors
    ///
    /// Returns [`LossError`] if the operand shapes are inconsistent.
    ///
    /// # Example
    ///
    /// ```
    /// use handpose_loss::PoseLoss;
    /// use handpose_tensor::Tensor;
    ///
    /// let pose = Tensor::<f32, 2>::from_shape_val([2, 48], 0.3);
    /// let valid = Tensor::<f32, 2>::from_shape_val([2, 16], 1.0);
    /// let loss = PoseLoss::new().compute(&pose, &pose, &valid).unwrap();
    /// assert_eq!(loss.shape, [2, 16, 3, 3]);
    /// assert!(loss.iter().all(|&x| x == 0.0));
    /// ```
    pub fn compute(
        &self,
        pose_out: &Tensor<f32, 2>,
        pose_gt: &Tensor<f32, 2>,
        pose_valid: &Tensor<f32, 2>,
    ) -> Result<Tensor<f32, 4>, LossError> {
        let [batch_size, num_joints] = check_inputs(pose_out, pose_gt, pose_valid)?;

        let pose_out = pose_out.clone().reshape([batch_size, num_joints, 3])?;
        let pose_gt = pose_gt.clone().reshape([batch_size, num_joints, 3])?;

        let rotmat_out: Tensor<f32, 4> = axis_angle_to_rotation_matrix(&pose_out)?;
        let rotmat_gt: Tensor<f32, 4> = axis_angle_to_rotation_matrix(&pose_gt)?;

        let valid = pose_valid.clone().reshape([batch_size, num_joints, 1, 1])?;
        let loss = mul_broadcast(&abs_diff(&rotmat_out, &rotmat_gt)?, &valid)?;

        log::debug!(
            "pose loss over {} items x {} joints",
            batch_size,
            num_joints
        );

        Ok(loss)
    }

    /// Compare the poses in axis-angle space.
    ///
    /// Each pose is first canonicalised by a round trip through rotation
    /// matrices, which folds equivalent axis-angle vectors (e.g. angles beyond
    /// `π`) onto one representative. The loss is
    /// `|aa_out - aa_gt| * valid[:, :, None]`, of shape `(B, J, 3)`.
    ///
    /// # Errors
    ///
    /// Returns [`LossError`] if the operand shapes are inconsistent.
    pub fn compute_axis_angle(
        &self,
        pose_out: &Tensor<f32, 2>,
        pose_gt: &Tensor<f32, 2>,
        pose_valid: &Tensor<f32, 2>,
    ) -> Result<Tensor<f32, 3>, LossError> {
        let [batch_size, num_joints] = check_inputs(pose_out, pose_gt, pose_valid)?;

        let canonical = |pose: &Tensor<f32, 2>| -> Result<Tensor<f32, 3>, LossError> {
            let pose = pose.clone().reshape([batch_size, num_joints, 3])?;
            let rotmat: Tensor<f32, 4> = axis_angle_to_rotation_matrix(&pose)?;
            Ok(rotation_matrix_to_axis_angle(&rotmat)?)
        };

        let aa_out = canonical(pose_out)?;
        let aa_gt = canonical(pose_gt)?;

        let valid = pose_valid.clone().reshape([batch_size, num_joints, 1])?;
        Ok(mul_broadcast(&abs_diff(&aa_out, &aa_gt)?, &valid)?)
    }
}

/// Validate the operand shapes and return `[batch_size, num_joints]`.
fn check_inputs(
    pose_out: &Tensor<f32, 2>,
    pose_gt: &Tensor<f32, 2>,
    pose_valid: &Tensor<f32, 2>,
) -> Result<[usize; 2], LossError> {
    if pose_out.shape != pose_gt.shape {
        return Err(LossError::ShapeMismatch {
            name: "pose_gt",
            expected: pose_out.shape.to_vec(),
            actual: pose_gt.shape.to_vec(),
        });
    }

    let [batch_size, pose_dim] = pose_out.shape;
    if pose_dim % 3 != 0 {
        return Err(LossError::InvalidPoseDim(pose_dim));
    }

    let num_joints = pose_dim / 3;
    if pose_valid.shape != [batch_size, num_joints] {
        return Err(LossError::ShapeMismatch {
            name: "pose_valid",
            expected: vec![batch_size, num_joints],
            actual: pose_valid.shape.to_vec(),
        });
    }

    Ok([batch_size, num_joints])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_identical_poses_zero_loss() -> Result<(), LossError> {
        let pose = Tensor::<f32, 2>::from_shape_fn([3, 6], |[b, k]| 0.2 * (b + 1) as f32 - 0.1 * k as f32);
        let valid = Tensor::<f32, 2>::from_shape_vec([3, 2], vec![1.0, 0.0, 0.5, 1.0, 0.0, 0.0])?;
        let loss = PoseLoss::new().compute(&pose, &pose, &valid)?;
        assert_eq!(loss.shape, [3, 2, 3, 3]);
        assert!(loss.iter().all(|&x| x == 0.0));
        Ok(())
    }

    #[test]
    fn test_invalid_joint_masked() -> Result<(), LossError> {
        // joint 0 differs by a quarter turn about z, joint 1 is masked out
        let pose_out = Tensor::<f32, 2>::from_shape_vec([1, 6], vec![0.0, 0.0, FRAC_PI_2, 1.0, 2.0, 3.0])?;
        let pose_gt = Tensor::<f32, 2>::zeros([1, 6]);
        let valid = Tensor::<f32, 2>::from_shape_vec([1, 2], vec![1.0, 0.0])?;
        let loss = PoseLoss::new().compute(&pose_out, &pose_gt, &valid)?;

        // |Rz(90) - I| = [[1, 1, 0], [1, 1, 0], [0, 0, 0]]
        let expected = [1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0];
        for (x, y) in loss.as_slice()[..9].iter().zip(expected.iter()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-5);
        }
        assert!(loss.as_slice()[9..].iter().all(|&x| x == 0.0));
        Ok(())
    }

    #[test]
    fn test_loss_is_non_negative() -> Result<(), LossError> {
        let pose_out = Tensor::<f32, 2>::from_shape_fn([2, 9], |[b, k]| (b * 9 + k) as f32 * 0.37 - 2.0);
        let pose_gt = Tensor::<f32, 2>::from_shape_fn([2, 9], |[b, k]| (k as f32 - b as f32) * 0.21);
        let valid = Tensor::<f32, 2>::from_shape_val([2, 3], 1.0);
        let loss = PoseLoss::new().compute(&pose_out, &pose_gt, &valid)?;
        assert!(loss.iter().all(|&x| x >= 0.0));
        assert!(loss.iter().any(|&x| x > 0.0));
        Ok(())
    }

    #[test]
    fn test_nan_not_suppressed_by_mask() -> Result<(), LossError> {
        let pose_out = Tensor::<f32, 2>::from_shape_vec([1, 3], vec![f32::NAN, 0.0, 0.0])?;
        let pose_gt = Tensor::<f32, 2>::zeros([1, 3]);
        let valid = Tensor::<f32, 2>::zeros([1, 1]);
        let loss = PoseLoss::new().compute(&pose_out, &pose_gt, &valid)?;
        assert!(loss.iter().any(|x| x.is_nan()));
        Ok(())
    }

    #[test]
    fn test_axis_angle_loss_folds_full_turn() -> Result<(), LossError> {
        // 2π + 0.5 and 0.5 about x are the same rotation
        let pose_out = Tensor::<f32, 2>::from_shape_vec([1, 3], vec![2.0 * PI + 0.5, 0.0, 0.0])?;
        let pose_gt = Tensor::<f32, 2>::from_shape_vec([1, 3], vec![0.5, 0.0, 0.0])?;
        let valid = Tensor::<f32, 2>::from_shape_val([1, 1], 1.0);
        let loss = PoseLoss::new().compute_axis_angle(&pose_out, &pose_gt, &valid)?;
        assert_eq!(loss.shape, [1, 1, 3]);
        for x in loss.iter() {
            assert_relative_eq!(*x, 0.0, epsilon = 1e-4);
        }
        Ok(())
    }

    #[test]
    fn test_shape_errors() {
        let loss = PoseLoss::new();
        let a = Tensor::<f32, 2>::zeros([2, 6]);
        let b = Tensor::<f32, 2>::zeros([2, 9]);
        let valid = Tensor::<f32, 2>::zeros([2, 2]);
        assert!(matches!(
            loss.compute(&a, &b, &valid),
            Err(LossError::ShapeMismatch { name: "pose_gt", .. })
        ));

        let c = Tensor::<f32, 2>::zeros([2, 7]);
        assert_eq!(
            loss.compute(&c, &c, &valid).err(),
            Some(LossError::InvalidPoseDim(7))
        );

        let bad_valid = Tensor::<f32, 2>::zeros([2, 3]);
        assert!(matches!(
            loss.compute(&a, &a, &bad_valid),
            Err(LossError::ShapeMismatch { name: "pose_valid", .. })
        ));
    }
}
