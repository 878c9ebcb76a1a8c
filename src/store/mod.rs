//! Result persistence
//!
//! The game engine runs entirely in memory and hands finished results to a
//! [`ResultStore`] afterwards. Stores keep one result per
//! (date, theme, user) - a second submission for the same key is reported
//! as already played and changes nothing - plus daily aggregates, a ranked
//! winner list, and per-user win streaks.
//!
//! A store failure is never a game-logic error: the local outcome is
//! authoritative and callers surface write failures as soft warnings.

mod json;
mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

use crate::core::MAX_GUESSES;
use crate::game::Streak;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One finished game, as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub date: String,
    pub theme: String,
    pub user_id: String,
    pub username: String,
    pub guesses: Vec<String>,
    pub won: bool,
    /// Completion timestamp in epoch milliseconds; tie-break for ranking
    pub completed_at: u64,
}

impl GameRecord {
    /// Number of guesses the game took
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}

/// Whether a submission was recorded or deduplicated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Recorded,
    AlreadyPlayed,
}

/// Aggregate results for one (date, theme)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyStats {
    pub total_games: u32,
    pub total_wins: u32,
    /// Wins by guess count: index 0 holds one-guess wins
    pub distribution: [u32; MAX_GUESSES],
}

impl DailyStats {
    /// Win rate as a rounded percentage
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        if self.total_games == 0 {
            0
        } else {
            (f64::from(self.total_wins) * 100.0 / f64::from(self.total_games)).round() as u32
        }
    }
}

/// One row of the daily winner ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    pub guesses: u32,
}

/// Error type for store operations
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Corrupt(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Store I/O error: {err}"),
            Self::Corrupt(detail) => write!(f, "Store data is corrupt: {detail}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Corrupt(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Persistence operations the game consumes
///
/// Implementations are free to be in-memory, file-backed, or remote; the
/// engine only sees this interface.
pub trait ResultStore {
    /// Record the daily target for (date, theme) once; later calls return
    /// the already-recorded word
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage fails.
    fn ensure_daily(
        &mut self,
        date: &str,
        theme: &str,
        target: &str,
    ) -> Result<String, StoreError>;

    /// Recorded daily target, if any
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage fails.
    fn daily_target(&self, date: &str, theme: &str) -> Result<Option<String>, StoreError>;

    /// Record a finished game; idempotent per (date, theme, `user_id`)
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage fails.
    fn submit_result(&mut self, record: GameRecord) -> Result<SubmitOutcome, StoreError>;

    /// A user's previously recorded game for (date, theme), if any
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage fails.
    fn prior_result(
        &self,
        date: &str,
        theme: &str,
        user_id: &str,
    ) -> Result<Option<GameRecord>, StoreError>;

    /// Aggregate stats for (date, theme)
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage fails.
    fn stats(&self, date: &str, theme: &str) -> Result<DailyStats, StoreError>;

    /// Winners for (date, theme) ranked by guess count, then completion time
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage fails.
    fn leaderboard(
        &self,
        date: &str,
        theme: &str,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, StoreError>;

    /// A user's win streak across all days
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage fails.
    fn streak(&self, user_id: &str) -> Result<Streak, StoreError>;
}
