use thiserror::Error;

use crate::{
    MAX_DISKS, MAX_TIME_LIMIT, MIN_DISKS, MIN_TIME_LIMIT,
    disk::{DiskId, DiskSize},
    peg::PegIndex,
};

/// A game could not be set up with the requested parameters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "disk count {0} is outside of the supported range {min}..={max}",
        min = MIN_DISKS,
        max = MAX_DISKS
    )]
    DiskCount(usize),
    #[error(
        "time limit of {0}s is outside of the supported range {min}..={max}",
        min = MIN_TIME_LIMIT,
        max = MAX_TIME_LIMIT
    )]
    TimeLimit(u32),
}

/// Reason why the board refused to move a disk. The session swallows these,
/// from the player's point of view a refused move is just ignored.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("peg {0} has no disk to move")]
    EmptySource(PegIndex),
    #[error("source and destination are both peg {0}")]
    SamePeg(PegIndex),
    #[error("disk {disk} cannot be placed on top of the smaller disk of size {top:?} on peg {onto}")]
    Blocked {
        disk: DiskId,
        top: DiskSize,
        onto: PegIndex,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("a score needs a non-empty player name")]
    EmptyName,
    #[error("only solved story mode games can be entered on the leaderboard")]
    NotEligible,
}
