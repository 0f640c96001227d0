use std::fmt;

use serde::{Deserialize, Serialize};

use crate::NR_PEGS;

/// Index of one of the three pegs. Peg 0 is where the tower starts, peg 2
/// is where it has to end up.
///
/// Invariant: can only represent valid peg indices
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PegIndex(u8);

impl PegIndex {
    pub const START: PegIndex = PegIndex(0);
    pub const SPARE: PegIndex = PegIndex(1);
    pub const GOAL: PegIndex = PegIndex(2);

    pub fn new(idx: u8) -> Option<Self> {
        if (idx as usize) < NR_PEGS {
            Some(PegIndex(idx))
        } else {
            None
        }
    }

    pub fn all() -> [PegIndex; NR_PEGS] {
        [Self::START, Self::SPARE, Self::GOAL]
    }

    /// The peg which is neither `self` nor `other`.
    ///
    /// Precondition: `self != other`
    pub fn third(self, other: PegIndex) -> PegIndex {
        debug_assert_ne!(self, other);
        PegIndex(3 - self.0 - other.0)
    }

    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for PegIndex {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PegIndex::new(value).ok_or_else(|| format!("peg index {value} out of range"))
    }
}

impl From<PegIndex> for u8 {
    fn from(value: PegIndex) -> Self {
        value.0
    }
}

impl fmt::Display for PegIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
