use handpose_tensor::Tensor;
use handpose_tensor_ops::{abs_diff, mul_broadcast};

use crate::error::LossError;

/// Index of the first depth channel; channels before it are image-plane (x, y).
const DEPTH_CHANNEL: usize = 2;

/// Masked L1 loss over 2.5D joint coordinates.
///
/// The x and y channels are always supervised where `valid` is set. The depth
/// channel is additionally weighted by the per-item `is_3d` flag so that
/// samples annotated in 2D only do not penalise the predicted depth.
#[derive(Debug, Default, Clone, Copy)]
pub struct CoordLoss;

impl CoordLoss {
    /// Create a new coordinate loss.
    pub fn new() -> Self {
        Self
    }

    /// Compute `|coord_out - coord_gt| * valid`, with the depth channel further
    /// multiplied by `is_3d[b]`.
    ///
    /// # Arguments
    ///
    /// * `coord_out` - predicted coordinates, shape `(B, J, C)` with `C >= 3`.
    /// * `coord_gt` - ground-truth coordinates, same shape as `coord_out`.
    /// * `valid` - per-element weight, broadcastable into `(B, J, C)`.
    /// * `is_3d` - per-item depth supervision flag, shape `(B,)`.
    ///
    /// # Returns
    ///
    /// The loss tensor, shape `(B, J, C)`.
    ///
    /// # Errors
    ///
    /// Returns [`LossError`] if the operand shapes are inconsistent.
    ///
    /// # Example
    ///
    /// ```
    /// use handpose_loss::CoordLoss;
    /// use handpose_tensor::Tensor;
    ///
    /// let out = Tensor::<f32, 3>::from_shape_vec([1, 1, 3], vec![1.0, 2.0, 3.0]).unwrap();
    /// let gt = Tensor::<f32, 3>::zeros([1, 1, 3]);
    /// let valid = Tensor::<f32, 3>::from_shape_val([1, 1, 1], 1.0);
    /// let is_3d = Tensor::<f32, 1>::zeros([1]);
    ///
    /// let loss = CoordLoss::new().compute(&out, &gt, &valid, &is_3d).unwrap();
    /// assert_eq!(loss.as_slice(), &[1.0, 2.0, 0.0]);
    /// ```
    pub fn compute(
        &self,
        coord_out: &Tensor<f32, 3>,
        coord_gt: &Tensor<f32, 3>,
        valid: &Tensor<f32, 3>,
        is_3d: &Tensor<f32, 1>,
    ) -> Result<Tensor<f32, 3>, LossError> {
        if coord_out.shape != coord_gt.shape {
            return Err(LossError::ShapeMismatch {
                name: "coord_gt",
                expected: coord_out.shape.to_vec(),
                actual: coord_gt.shape.to_vec(),
            });
        }

        let [batch_size, num_joints, num_channels] = coord_out.shape;
        if is_3d.shape != [batch_size] {
            return Err(LossError::ShapeMismatch {
                name: "is_3d",
                expected: vec![batch_size],
                actual: is_3d.shape.to_vec(),
            });
        }

        let mut loss = mul_broadcast(&abs_diff(coord_out, coord_gt)?, valid)?;

        if num_channels > DEPTH_CHANNEL {
            let item_len = num_joints * num_channels;
            for (item, &weight) in loss
                .as_slice_mut()
                .chunks_exact_mut(item_len.max(1))
                .zip(is_3d.iter())
            {
                for joint in item.chunks_exact_mut(num_channels) {
                    joint[DEPTH_CHANNEL..].iter_mut().for_each(|z| *z *= weight);
                }
            }
        }

        log::debug!(
            "coord loss over {} items x {} joints ({} with depth)",
            batch_size,
            num_joints,
            is_3d.iter().filter(|&&w| w != 0.0).count()
        );

        Ok(loss)
    }
}
