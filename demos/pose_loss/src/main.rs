use std::path::PathBuf;

use argh::FromArgs;

use handpose::loss::{CoordLoss, PoseLoss};
use handpose::mano::{Hand, TWO_HANDS};
use handpose::tensor::Tensor;
use handpose::tensor_ops;

mod batch;

use batch::{stack2, stack3, Batch};

#[derive(FromArgs, Debug)]
/// Evaluate the pose and coordinate losses on a batch stored as JSON.
struct Args {
    /// path to the JSON batch
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// only report the joint loss of this hand (right or left)
    #[argh(option)]
    hand: Option<Hand>,

    /// also report the loss in canonical axis-angle space
    #[argh(switch)]
    axis_angle: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let batch = Batch::from_json_file(&args.input)?;

    let pose_out = stack2(&batch.pose_out)?;
    let pose_gt = stack2(&batch.pose_gt)?;
    let pose_valid = stack2(&batch.pose_valid)?;
    log::info!(
        "loaded {} items with {} pose joints from {}",
        pose_out.shape[0],
        pose_valid.shape[1],
        args.input.display()
    );

    let pose_loss = PoseLoss::new();
    let loss = pose_loss.compute(&pose_out, &pose_gt, &pose_valid)?;
    println!("pose loss (rotation matrix): {:.6}", tensor_ops::mean(&loss));

    if args.axis_angle {
        let loss = pose_loss.compute_axis_angle(&pose_out, &pose_gt, &pose_valid)?;
        println!("pose loss (axis-angle): {:.6}", tensor_ops::mean(&loss));
    }

    let Some(joints) = batch.joints else {
        log::warn!("no joint coordinates in the batch, skipping the coordinate loss");
        return Ok(());
    };

    let joint_out = stack3(&joints.joint_out)?;
    let joint_gt = stack3(&joints.joint_gt)?;
    let joint_valid = stack3(&joints.joint_valid)?;
    let is_3d = Tensor::from_shape_slice([joints.is_3d.len()], &joints.is_3d)?;

    let loss = CoordLoss::new().compute(&joint_out, &joint_gt, &joint_valid, &is_3d)?;
    println!("joint loss: {:.6}", tensor_ops::mean(&loss));

    let [batch_size, num_joints, channels] = loss.shape;
    if num_joints != TWO_HANDS.num_joints() || channels == 0 {
        log::info!(
            "{} joints is not the two-hand layout, skipping the per-hand report",
            num_joints
        );
        return Ok(());
    }

    let hands = match args.hand {
        Some(hand) => vec![hand],
        None => Hand::ALL.to_vec(),
    };
    for hand in hands {
        let range = hand.joint_range();
        let per_hand = loss
            .as_slice()
            .chunks_exact(num_joints * channels)
            .flat_map(|item| {
                item[range.start * channels..range.end * channels]
                    .iter()
                    .copied()
            })
            .collect::<Vec<_>>();
        let per_hand = Tensor::from_shape_vec([batch_size, range.len(), channels], per_hand)?;
        println!("{} hand joint loss: {:.6}", hand, tensor_ops::mean(&per_hand));
    }

    Ok(())
}
