use serde::Serialize;

use crate::{MAX_DISKS, MAX_TIME_LIMIT, MIN_DISKS, MIN_TIME_LIMIT, error::ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameMode {
    /// Untimed play, solved games can be entered on the leaderboard.
    Story,
    /// Play against a countdown. Results are not ranked.
    Timed,
}

/// Validated parameters of a game, chosen by the player before starting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    disk_count: usize,
    time_limit: Option<u32>,
}

impl GameConfig {
    pub fn new(disk_count: usize, time_limit: Option<u32>) -> Result<Self, ConfigError> {
        if !(MIN_DISKS..=MAX_DISKS).contains(&disk_count) {
            return Err(ConfigError::DiskCount(disk_count));
        }
        if let Some(limit) = time_limit
            && !(MIN_TIME_LIMIT..=MAX_TIME_LIMIT).contains(&limit)
        {
            return Err(ConfigError::TimeLimit(limit));
        }

        Ok(Self {
            disk_count,
            time_limit,
        })
    }

    pub fn story(disk_count: usize) -> Result<Self, ConfigError> {
        Self::new(disk_count, None)
    }

    pub fn timed(disk_count: usize, time_limit: u32) -> Result<Self, ConfigError> {
        Self::new(disk_count, Some(time_limit))
    }

    pub fn disk_count(&self) -> usize {
        self.disk_count
    }

    /// Countdown length in seconds, `None` outside of timed mode.
    pub fn time_limit(&self) -> Option<u32> {
        self.time_limit
    }

    pub fn mode(&self) -> GameMode {
        match self.time_limit {
            Some(_) => GameMode::Timed,
            None => GameMode::Story,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            disk_count: crate::DEFAULT_DISKS,
            time_limit: None,
        }
    }
}
