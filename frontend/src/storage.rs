use anyhow::{Context, anyhow};
use common::{
    Leaderboard, ScoreRecord, ScoreStore,
    leaderboard::{decode_scores, encode_scores},
};

const SCORES_KEY: &str = "hanoiScores";

/// Scores kept in the browser's `localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> anyhow::Result<Self> {
        let window = web_sys::window().context("no window available")?;
        let storage = window
            .local_storage()
            .map_err(|err| anyhow!("{err:?}"))
            .context("cannot access localStorage")?
            .context("localStorage is disabled")?;
        Ok(Self { storage })
    }
}

impl ScoreStore for LocalStorage {
    type Error = anyhow::Error;

    fn load(&self) -> anyhow::Result<Vec<ScoreRecord>> {
        let data = self
            .storage
            .get_item(SCORES_KEY)
            .map_err(|err| anyhow!("{err:?}"))
            .context("cannot read scores")?;
        Ok(data.map(|data| decode_scores(&data)).unwrap_or_default())
    }

    fn append(&mut self, record: ScoreRecord) -> anyhow::Result<()> {
        let mut records = self.load()?;
        records.push(record);
        self.storage
            .set_item(SCORES_KEY, &encode_scores(&records))
            .map_err(|err| anyhow!("{err:?}"))
            .context("cannot write scores")
    }
}

pub fn save_score(record: ScoreRecord) -> anyhow::Result<()> {
    log::info!("Saving score {record:?}");
    LocalStorage::open()?.append(record)
}

/// Leaderboard from the stored scores. If the storage is unavailable only the
/// rival scores are shown.
pub fn load_leaderboard() -> Leaderboard {
    match LocalStorage::open().and_then(|store| Leaderboard::load(&store)) {
        Ok(leaderboard) => leaderboard,
        Err(err) => {
            log::error!("Cannot load scores: {err:#}");
            Leaderboard::new(Vec::new())
        }
    }
}
