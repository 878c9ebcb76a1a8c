//! JSON file-backed result store
//!
//! Wraps [`MemoryStore`] with a JSON snapshot on disk: load on open, save
//! after every write. Playing is unaffected by a failed save - callers
//! surface it as a warning and keep the in-memory result.

use super::memory::StoreState;
use super::{
    DailyStats, GameRecord, LeaderboardEntry, MemoryStore, ResultStore, StoreError, SubmitOutcome,
};
use crate::game::Streak;
use std::fs;
use std::path::{Path, PathBuf};

/// [`ResultStore`] persisted to a JSON file
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonStore {
    /// Open a store at `path`, loading existing state if the file exists
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the file exists but cannot be read, or
    /// `StoreError::Corrupt` if its contents fail to parse.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let inner = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let state: StoreState = serde_json::from_str(&content)
                .map_err(|e| StoreError::Corrupt(e.to_string()))?;
            MemoryStore::from_state(state)
        } else {
            MemoryStore::new()
        };

        Ok(Self { path, inner })
    }

    /// Where the snapshot lives
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self.inner.state())
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ResultStore for JsonStore {
    fn ensure_daily(
        &mut self,
        date: &str,
        theme: &str,
        target: &str,
    ) -> Result<String, StoreError> {
        let recorded = self.inner.ensure_daily(date, theme, target)?;
        self.save()?;
        Ok(recorded)
    }

    fn daily_target(&self, date: &str, theme: &str) -> Result<Option<String>, StoreError> {
        self.inner.daily_target(date, theme)
    }

    fn submit_result(&mut self, record: GameRecord) -> Result<SubmitOutcome, StoreError> {
        let outcome = self.inner.submit_result(record)?;
        if outcome == SubmitOutcome::Recorded {
            self.save()?;
        }
        Ok(outcome)
    }

    fn prior_result(
        &self,
        date: &str,
        theme: &str,
        user_id: &str,
    ) -> Result<Option<GameRecord>, StoreError> {
        self.inner.prior_result(date, theme, user_id)
    }

    fn stats(&self, date: &str, theme: &str) -> Result<DailyStats, StoreError> {
        self.inner.stats(date, theme)
    }

    fn leaderboard(
        &self,
        date: &str,
        theme: &str,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, StoreError> {
        self.inner.leaderboard(date, theme, limit)
    }

    fn streak(&self, user_id: &str) -> Result<Streak, StoreError> {
        self.inner.streak(user_id)
    }
}
