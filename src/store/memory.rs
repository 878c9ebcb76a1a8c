//! In-memory result store
//!
//! Reference implementation of [`ResultStore`]. State is a handful of flat
//! lists scanned linearly - a day's worth of games is small, and the same
//! shape serializes cleanly for the file-backed store.

use super::{DailyStats, GameRecord, LeaderboardEntry, ResultStore, StoreError, SubmitOutcome};
use crate::game::Streak;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct DailyTarget {
    date: String,
    theme: String,
    target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StreakRow {
    user_id: String,
    current: u32,
    best: u32,
    last_win: Option<String>,
}

/// Serializable store contents, shared with [`super::JsonStore`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct StoreState {
    dailies: Vec<DailyTarget>,
    games: Vec<GameRecord>,
    streaks: Vec<StreakRow>,
}

/// In-process [`ResultStore`]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: StoreState,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_state(state: StoreState) -> Self {
        Self { state }
    }

    pub(crate) fn state(&self) -> &StoreState {
        &self.state
    }

    fn update_streak(&mut self, record: &GameRecord) {
        let Ok(date) = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d") else {
            return;
        };

        let pos = match self
            .state
            .streaks
            .iter()
            .position(|r| r.user_id == record.user_id)
        {
            Some(pos) => pos,
            None => {
                self.state.streaks.push(StreakRow {
                    user_id: record.user_id.clone(),
                    current: 0,
                    best: 0,
                    last_win: None,
                });
                self.state.streaks.len() - 1
            }
        };
        let row = &mut self.state.streaks[pos];

        let last_win = row
            .last_win
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());

        let mut streak = Streak::from_parts(row.current, row.best, last_win);
        streak.record_win(date);

        row.current = streak.current();
        row.best = streak.best();
        row.last_win = streak.last_win().map(|d| d.format("%Y-%m-%d").to_string());
    }
}

impl ResultStore for MemoryStore {
    fn ensure_daily(
        &mut self,
        date: &str,
        theme: &str,
        target: &str,
    ) -> Result<String, StoreError> {
        if let Some(existing) = self
            .state
            .dailies
            .iter()
            .find(|d| d.date == date && d.theme == theme)
        {
            return Ok(existing.target.clone());
        }

        self.state.dailies.push(DailyTarget {
            date: date.to_string(),
            theme: theme.to_string(),
            target: target.to_string(),
        });
        Ok(target.to_string())
    }

    fn daily_target(&self, date: &str, theme: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .state
            .dailies
            .iter()
            .find(|d| d.date == date && d.theme == theme)
            .map(|d| d.target.clone()))
    }

    fn submit_result(&mut self, record: GameRecord) -> Result<SubmitOutcome, StoreError> {
        let played = self.state.games.iter().any(|g| {
            g.date == record.date && g.theme == record.theme && g.user_id == record.user_id
        });
        if played {
            return Ok(SubmitOutcome::AlreadyPlayed);
        }

        if record.won {
            self.update_streak(&record);
        }
        self.state.games.push(record);
        Ok(SubmitOutcome::Recorded)
    }

    fn prior_result(
        &self,
        date: &str,
        theme: &str,
        user_id: &str,
    ) -> Result<Option<GameRecord>, StoreError> {
        Ok(self
            .state
            .games
            .iter()
            .find(|g| g.date == date && g.theme == theme && g.user_id == user_id)
            .cloned())
    }

    fn stats(&self, date: &str, theme: &str) -> Result<DailyStats, StoreError> {
        let mut stats = DailyStats::default();

        for game in self
            .state
            .games
            .iter()
            .filter(|g| g.date == date && g.theme == theme)
        {
            stats.total_games += 1;
            if game.won {
                stats.total_wins += 1;
                let count = game.guess_count();
                if (1..=stats.distribution.len()).contains(&count) {
                    stats.distribution[count - 1] += 1;
                }
            }
        }

        Ok(stats)
    }

    fn leaderboard(
        &self,
        date: &str,
        theme: &str,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let mut winners: Vec<&GameRecord> = self
            .state
            .games
            .iter()
            .filter(|g| g.date == date && g.theme == theme && g.won)
            .collect();

        winners.sort_by_key(|g| (g.guess_count(), g.completed_at));

        Ok(winners
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, g)| LeaderboardEntry {
                rank: i as u32 + 1,
                username: g.username.clone(),
                guesses: g.guess_count() as u32,
            })
            .collect())
    }

    fn streak(&self, user_id: &str) -> Result<Streak, StoreError> {
        Ok(self
            .state
            .streaks
            .iter()
            .find(|r| r.user_id == user_id)
            .map_or_else(Streak::new, |row| {
                let last_win = row
                    .last_win
                    .as_deref()
                    .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
                Streak::from_parts(row.current, row.best, last_win)
            }))
    }
}
