use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context;
use common::{
    ScoreRecord, ScoreStore,
    leaderboard::{decode_scores, encode_scores},
};

/// Scores kept as a JSON list in a file, in the same format the web front end
/// uses for its storage.
#[derive(Debug, Clone)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for ScoreFile {
    type Error = anyhow::Error;

    fn load(&self) -> anyhow::Result<Vec<ScoreRecord>> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(decode_scores(&data)),
            // nothing saved yet
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(vec![]),
            Err(err) => {
                Err(err).with_context(|| format!("cannot read {}", self.path.display()))
            }
        }
    }

    fn append(&mut self, record: ScoreRecord) -> anyhow::Result<()> {
        let mut records = self.load()?;
        records.push(record);
        fs::write(&self.path, encode_scores(&records))
            .with_context(|| format!("cannot write {}", self.path.display()))
    }
}
