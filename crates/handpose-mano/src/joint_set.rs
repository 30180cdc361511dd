/// Number of joints of one hand once fingertips are added.
pub(crate) const SINGLE_HAND_JOINT_NUM: usize = 21;

/// A named joint topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointSet {
    /// Joint names, in index order.
    pub joint_names: &'static [&'static str],
    /// Bones as `(parent, child)` joint index pairs.
    pub skeleton: &'static [(usize, usize)],
    /// Index of the root joint.
    pub root_joint_idx: usize,
    /// Pairs of joints exchanged when the data is mirrored.
    pub flip_pairs: &'static [(usize, usize)],
}

impl JointSet {
    /// Number of joints in the set.
    pub const fn num_joints(&self) -> usize {
        self.joint_names.len()
    }

    /// Index of the joint called `name`.
    pub fn joint_index(&self, name: &str) -> Option<usize> {
        self.joint_names.iter().position(|&n| n == name)
    }

    /// Reorder per-joint data for a mirrored image by swapping every flip pair.
    ///
    /// Entries beyond the joint count or outside any pair are left in place.
    ///
    /// # Example
    ///
    /// ```
    /// use handpose_mano::TWO_HANDS;
    ///
    /// let scores: Vec<usize> = (0..42).collect();
    /// let flipped = TWO_HANDS.flip(&scores);
    /// assert_eq!(flipped[0], 21);
    /// assert_eq!(flipped[21], 0);
    /// ```
    pub fn flip<T: Clone>(&self, joints: &[T]) -> Vec<T> {
        let mut out = joints.to_vec();
        for &(a, b) in self.flip_pairs {
            if a < out.len() && b < out.len() {
                out.swap(a, b);
            }
        }
        out
    }
}

/// The 16 joints of the original MANO kinematic tree.
pub const ORIG_JOINT_SET: JointSet = JointSet {
    joint_names: &[
        "Wrist", "Index_1", "Index_2", "Index_3", "Middle_1", "Middle_2", "Middle_3", "Pinky_1",
        "Pinky_2", "Pinky_3", "Ring_1", "Ring_2", "Ring_3", "Thumb_1", "Thumb_2", "Thumb_3",
    ],
    skeleton: &[],
    root_joint_idx: 0,
    flip_pairs: &[],
};

const SINGLE_HAND_SKELETON: [(usize, usize); 20] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (0, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    (0, 13),
    (13, 14),
    (14, 15),
    (15, 16),
    (0, 17),
    (17, 18),
    (18, 19),
    (19, 20),
];

/// One hand, 21 joints including the fingertips (`*_4`).
pub const SINGLE_HAND: JointSet = JointSet {
    joint_names: &[
        "Wrist", "Thumb_1", "Thumb_2", "Thumb_3", "Thumb_4", "Index_1", "Index_2", "Index_3",
        "Index_4", "Middle_1", "Middle_2", "Middle_3", "Middle_4", "Ring_1", "Ring_2", "Ring_3",
        "Ring_4", "Pinky_1", "Pinky_2", "Pinky_3", "Pinky_4",
    ],
    skeleton: &SINGLE_HAND_SKELETON,
    root_joint_idx: 0,
    flip_pairs: &[],
};

const TWO_HANDS_SKELETON: [(usize, usize); 40] = {
    let mut bones = [(0, 0); 40];
    let mut i = 0;
    while i < SINGLE_HAND_SKELETON.len() {
        let (a, b) = SINGLE_HAND_SKELETON[i];
        bones[i] = (a, b);
        bones[i + 20] = (a + SINGLE_HAND_JOINT_NUM, b + SINGLE_HAND_JOINT_NUM);
        i += 1;
    }
    bones
};

const TWO_HANDS_FLIP_PAIRS: [(usize, usize); SINGLE_HAND_JOINT_NUM] = {
    let mut pairs = [(0, 0); SINGLE_HAND_JOINT_NUM];
    let mut i = 0;
    while i < SINGLE_HAND_JOINT_NUM {
        pairs[i] = (i, i + SINGLE_HAND_JOINT_NUM);
        i += 1;
    }
    pairs
};

/// Both hands, right first: 42 joints.
pub const TWO_HANDS: JointSet = JointSet {
    joint_names: &[
        "R_Wrist", "R_Thumb_1", "R_Thumb_2", "R_Thumb_3", "R_Thumb_4", "R_Index_1", "R_Index_2",
        "R_Index_3", "R_Index_4", "R_Middle_1", "R_Middle_2", "R_Middle_3", "R_Middle_4",
        "R_Ring_1", "R_Ring_2", "R_Ring_3", "R_Ring_4", "R_Pinky_1", "R_Pinky_2", "R_Pinky_3",
        "R_Pinky_4", "L_Wrist", "L_Thumb_1", "L_Thumb_2", "L_Thumb_3", "L_Thumb_4", "L_Index_1",
        "L_Index_2", "L_Index_3", "L_Index_4", "L_Middle_1", "L_Middle_2", "L_Middle_3",
        "L_Middle_4", "L_Ring_1", "L_Ring_2", "L_Ring_3", "L_Ring_4", "L_Pinky_1", "L_Pinky_2",
        "L_Pinky_3", "L_Pinky_4",
    ],
    skeleton: &TWO_HANDS_SKELETON,
    root_joint_idx: 0,
    flip_pairs: &TWO_HANDS_FLIP_PAIRS,
};
