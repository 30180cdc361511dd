use std::path::Path;

use handpose::tensor::{Tensor2, Tensor3, TensorError};
use serde::Deserialize;

/// A training batch as stored on disk.
///
/// Poses are flattened axis-angle parameters, one row per item. Joint
/// coordinates are `(B, J, 3)` 2.5D positions grouped under `joints`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Batch {
    pub pose_out: Vec<Vec<f32>>,
    pub pose_gt: Vec<Vec<f32>>,
    pub pose_valid: Vec<Vec<f32>>,
    pub joints: Option<JointBatch>,
}

/// Optional 2.5D joint supervision. Every field is required once the group is present.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JointBatch {
    pub joint_out: Vec<Vec<Vec<f32>>>,
    pub joint_gt: Vec<Vec<Vec<f32>>>,
    pub joint_valid: Vec<Vec<Vec<f32>>>,
    pub is_3d: Vec<f32>,
}

impl Batch {
    pub fn from_json_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}

/// Stack equally sized rows into a `(rows, cols)` tensor.
pub fn stack2(rows: &[Vec<f32>]) -> Result<Tensor2<f32>, TensorError> {
    let cols = rows.first().map_or(0, Vec::len);
    let data = rows.iter().flatten().copied().collect::<Vec<_>>();
    Tensor2::from_shape_vec([rows.len(), cols], data)
}

/// Stack equally sized matrices into a `(items, rows, cols)` tensor.
pub fn stack3(items: &[Vec<Vec<f32>>]) -> Result<Tensor3<f32>, TensorError> {
    let rows = items.first().map_or(0, Vec::len);
    let cols = items
        .first()
        .and_then(|item| item.first())
        .map_or(0, Vec::len);
    let data = items
        .iter()
        .flatten()
        .flatten()
        .copied()
        .collect::<Vec<_>>();
    Tensor3::from_shape_vec([items.len(), rows, cols], data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_ragged_rows() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
        assert_eq!(stack2(&rows).err(), Some(TensorError::invalid_shape(6, 5)));
    }

    #[test]
    fn test_stack3_shape() -> Result<(), TensorError> {
        let items = vec![vec![vec![1.0, 2.0, 3.0]; 4]; 2];
        let t = stack3(&items)?;
        assert_eq!(t.shape, [2, 4, 3]);
        Ok(())
    }

    #[test]
    fn test_joints_are_optional() -> Result<(), Box<dyn std::error::Error>> {
        let value = serde_json::json!({
            "pose_out": [[0.0, 0.0, 0.1]],
            "pose_gt": [[0.0, 0.0, 0.0]],
            "pose_valid": [[1.0]],
        });
        let batch: Batch = serde_json::from_value(value)?;
        assert!(batch.joints.is_none());

        let value = serde_json::json!({
            "pose_out": [[0.0, 0.0, 0.1]],
            "pose_gt": [[0.0, 0.0, 0.0]],
            "pose_valid": [[1.0]],
            "joints": {
                "joint_out": [[[1.0, 2.0, 3.0]]],
                "joint_gt": [[[1.0, 2.0, 3.0]]],
                "joint_valid": [[[1.0]]],
                "is_3d": [0.0],
            },
        });
        let batch: Batch = serde_json::from_value(value)?;
        assert_eq!(batch.joints.map(|j| j.is_3d), Some(vec![0.0]));
        Ok(())
    }

    #[test]
    fn test_incomplete_joints_rejected() {
        // a misspelled key must not silently drop the joint group
        let value = serde_json::json!({
            "pose_out": [[0.0, 0.0, 0.1]],
            "pose_gt": [[0.0, 0.0, 0.0]],
            "pose_valid": [[1.0]],
            "joints": {
                "joint_out": [[[1.0, 2.0, 3.0]]],
                "joint_gt": [[[1.0, 2.0, 3.0]]],
                "joint_valid": [[[1.0]]],
                "is3d": [0.0],
            },
        });
        assert!(serde_json::from_value::<Batch>(value).is_err());

        // joint keys at the top level are not the joint group either
        let value = serde_json::json!({
            "pose_out": [[0.0, 0.0, 0.1]],
            "pose_gt": [[0.0, 0.0, 0.0]],
            "pose_valid": [[1.0]],
            "joint_out": [[[1.0, 2.0, 3.0]]],
        });
        assert!(serde_json::from_value::<Batch>(value).is_err());
    }
}
