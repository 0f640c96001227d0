use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{
    LEADERBOARD_SIZE,
    config::GameMode,
    error::ScoreError,
    session::{GameSession, Outcome, Status},
};

/// One finished game as stored by a [ScoreStore]. The field names double as
/// the persisted JSON format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub moves: u32,
    /// Seconds taken to solve.
    pub time: u32,
}

impl ScoreRecord {
    pub fn new(name: &str, moves: u32, time: u32) -> Result<Self, ScoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScoreError::EmptyName);
        }
        Ok(Self {
            name: name.to_owned(),
            moves,
            time,
        })
    }

    /// Score for a finished session. Only solved story mode games count.
    pub fn from_session(name: &str, session: &GameSession) -> Result<Self, ScoreError> {
        if session.status() != Status::Finished(Outcome::Solved)
            || session.mode() != GameMode::Story
        {
            return Err(ScoreError::NotEligible);
        }
        Self::new(name, session.move_count(), session.elapsed())
    }

    /// Fewer moves rank higher, ties are broken by the faster time.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.moves
            .cmp(&other.moves)
            .then(self.time.cmp(&other.time))
    }
}

/// Scores of the rivals every player has to beat.
fn rival_scores() -> Vec<ScoreRecord> {
    [
        ("Bruce The omnipotent", 10, 28),
        ("Ivar The bloody baron", 20, 88),
        ("Vandal The grey", 25, 90),
        ("Fergus The bold", 30, 200),
    ]
    .into_iter()
    .map(|(name, moves, time)| ScoreRecord {
        name: name.to_owned(),
        moves,
        time,
    })
    .collect()
}

/// Persistence for score records. Implementations decide where the list
/// lives; the order of the stored records carries no meaning.
pub trait ScoreStore {
    type Error;

    fn load(&self) -> Result<Vec<ScoreRecord>, Self::Error>;
    fn append(&mut self, record: ScoreRecord) -> Result<(), Self::Error>;
}

/// Store that keeps everything in memory, for tests and for sessions where
/// no storage is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<ScoreRecord>,
}

impl ScoreStore for MemoryStore {
    type Error = std::convert::Infallible;

    fn load(&self) -> Result<Vec<ScoreRecord>, Self::Error> {
        Ok(self.records.clone())
    }

    fn append(&mut self, record: ScoreRecord) -> Result<(), Self::Error> {
        self.records.push(record);
        Ok(())
    }
}

/// Decode the stored list of scores. Storage written by a broken or
/// different version of the game is treated as empty.
pub fn decode_scores(data: &str) -> Vec<ScoreRecord> {
    match serde_json::from_str(data) {
        Ok(records) => records,
        Err(err) => {
            log::warn!("Discarding unreadable score list: {err}");
            vec![]
        }
    }
}

pub fn encode_scores(records: &[ScoreRecord]) -> String {
    serde_json::to_string(records).expect("score records always serialize")
}

/// Ranked view over the saved scores and the rival scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    ranked: Vec<ScoreRecord>,
}

impl Leaderboard {
    pub fn new(saved: impl IntoIterator<Item = ScoreRecord>) -> Self {
        let mut ranked: Vec<_> = saved.into_iter().chain(rival_scores()).collect();
        // stable sort, equal scores keep the order in which they were saved
        ranked.sort_by(ScoreRecord::rank_cmp);
        Self { ranked }
    }

    pub fn load<S: ScoreStore>(store: &S) -> Result<Self, S::Error> {
        Ok(Self::new(store.load()?))
    }

    /// The best [LEADERBOARD_SIZE] entries, best first.
    pub fn top(&self) -> &[ScoreRecord] {
        self.top_n(LEADERBOARD_SIZE)
    }

    pub fn top_n(&self, n: usize) -> &[ScoreRecord] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// 1-based rank the given score would get.
    pub fn rank_of(&self, record: &ScoreRecord) -> usize {
        self.ranked
            .iter()
            .take_while(|r| r.rank_cmp(record) != Ordering::Greater)
            .count()
            + 1
    }
}
