#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! The tables are plain `'static` data: there is nothing to initialise and they
//! can be shared freely across threads.
//!
//! ```rust
//! use handpose_mano::{Hand, TWO_HANDS};
//!
//! assert_eq!(TWO_HANDS.num_joints(), 42);
//! assert_eq!(TWO_HANDS.joint_index("L_Wrist"), Some(Hand::Left.root_joint_idx()));
//! ```

/// Left / right hand selection in the two-hand joint set.
pub mod hand;

/// Joint sets: names, skeleton and flip pairs.
pub mod joint_set;

pub use hand::Hand;
pub use joint_set::{JointSet, ORIG_JOINT_SET, SINGLE_HAND, TWO_HANDS};

/// Dimension of the MANO shape parameters.
pub const SHAPE_PARAM_DIM: usize = 10;
