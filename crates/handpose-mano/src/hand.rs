use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::joint_set::SINGLE_HAND_JOINT_NUM;

/// One of the two hands.
///
/// In the two-hand joint set the right hand comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    /// Right hand, joints `0..21`.
    Right,
    /// Left hand, joints `21..42`.
    Left,
}

impl Hand {
    /// Both hands, in joint-set order.
    pub const ALL: [Hand; 2] = [Hand::Right, Hand::Left];

    /// Index of the hand's wrist in the two-hand joint set.
    pub const fn root_joint_idx(self) -> usize {
        self.joint_offset()
    }

    /// Joints of this hand in the two-hand joint set.
    pub const fn joint_range(self) -> Range<usize> {
        self.joint_offset()..self.joint_offset() + SINGLE_HAND_JOINT_NUM
    }

    /// The mirrored hand.
    pub const fn flipped(self) -> Self {
        match self {
            Hand::Right => Hand::Left,
            Hand::Left => Hand::Right,
        }
    }

    const fn joint_offset(self) -> usize {
        match self {
            Hand::Right => 0,
            Hand::Left => SINGLE_HAND_JOINT_NUM,
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hand::Right => write!(f, "right"),
            Hand::Left => write!(f, "left"),
        }
    }
}

impl std::str::FromStr for Hand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "right" => Ok(Hand::Right),
            "left" => Ok(Hand::Left),
            other => Err(format!("unknown hand '{other}', expected 'right' or 'left'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert_eq!(Hand::Right.joint_range(), 0..21);
        assert_eq!(Hand::Left.joint_range(), 21..42);
        assert_eq!(Hand::Right.root_joint_idx(), 0);
        assert_eq!(Hand::Left.root_joint_idx(), 21);
    }

    #[test]
    fn test_parse_and_display() {
        for hand in Hand::ALL {
            assert_eq!(hand.to_string().parse::<Hand>(), Ok(hand));
            assert_eq!(hand.flipped().flipped(), hand);
        }
        assert!("both".parse::<Hand>().is_err());
    }

    #[test]
    fn test_serde() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Hand::Left)?, "\"left\"");
        assert_eq!(serde_json::from_str::<Hand>("\"right\"")?, Hand::Right);
        Ok(())
    }
}
