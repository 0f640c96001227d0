//! Rules engine for the Towers of Hanoi: the board, move validation, undo and
//! redo, the game clock and the leaderboard ordering. Nothing in here does
//! any I/O, the front ends drive a [GameSession] and render its
//! [SessionView](session::SessionView).

pub mod board;
pub mod clock;
pub mod config;
pub mod disk;
pub mod error;
pub mod history;
pub mod leaderboard;
pub mod peg;
pub mod session;
pub mod solver;

pub use board::Board;
pub use config::{GameConfig, GameMode};
pub use disk::{Disk, DiskId, DiskSize};
pub use error::{ConfigError, MoveRejection, ScoreError};
pub use leaderboard::{Leaderboard, ScoreRecord, ScoreStore};
pub use peg::PegIndex;
pub use session::{Action, Epoch, GameSession, MoveOutcome, Outcome, SessionView, Status};

pub const NR_PEGS: usize = 3;

pub const MIN_DISKS: usize = 3;
pub const MAX_DISKS: usize = 7;
pub const DEFAULT_DISKS: usize = 3;

/// Countdown bounds for timed games, in seconds.
pub const MIN_TIME_LIMIT: u32 = 5;
pub const MAX_TIME_LIMIT: u32 = 300;
pub const TIME_LIMIT_STEP: u32 = 5;
pub const DEFAULT_TIME_LIMIT: u32 = 60;

/// Number of entries shown on the leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;
