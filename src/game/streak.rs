//! Win streak tracking
//!
//! A streak counts consecutive calendar days with a win. Winning today after
//! a win yesterday extends it; a second win recorded for the same day does
//! not double-count; any gap starts a new streak at 1. Losses don't reset
//! stored data - a streak only reads as broken once the last win is more
//! than a day old.

use chrono::NaiveDate;

/// Per-user win streak state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Streak {
    current: u32,
    best: u32,
    last_win: Option<NaiveDate>,
}

impl Streak {
    /// Fresh streak with no wins recorded
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from stored fields
    #[must_use]
    pub const fn from_parts(current: u32, best: u32, last_win: Option<NaiveDate>) -> Self {
        Self {
            current,
            best,
            last_win,
        }
    }

    /// Record a win on `date`
    ///
    /// Consecutive with the previous win extends the streak; the same day
    /// twice is a no-op; anything else restarts at 1.
    pub fn record_win(&mut self, date: NaiveDate) {
        match self.last_win {
            Some(last) if last == date => return,
            Some(last) if last.succ_opt() == Some(date) => self.current += 1,
            _ => self.current = 1,
        }

        self.last_win = Some(date);
        self.best = self.best.max(self.current);
    }

    /// Streak as of `today`, without mutating stored state
    ///
    /// Returns (current, best); current reads as 0 once the last win is more
    /// than one day old.
    #[must_use]
    pub fn effective(&self, today: NaiveDate) -> (u32, u32) {
        match self.last_win {
            Some(last) if (today - last).num_days() > 1 => (0, self.best),
            _ => (self.current, self.best),
        }
    }

    /// Raw current streak as last recorded
    #[inline]
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Best streak ever recorded
    #[inline]
    #[must_use]
    pub const fn best(&self) -> u32 {
        self.best
    }

    /// Date of the most recent recorded win
    #[inline]
    #[must_use]
    pub const fn last_win(&self) -> Option<NaiveDate> {
        self.last_win
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn first_win_starts_streak_at_one() {
        let mut streak = Streak::new();
        streak.record_win(day("2026-08-06"));

        assert_eq!(streak.current(), 1);
        assert_eq!(streak.best(), 1);
    }

    #[test]
    fn consecutive_days_extend_streak() {
        let mut streak = Streak::new();
        streak.record_win(day("2026-08-04"));
        streak.record_win(day("2026-08-05"));
        streak.record_win(day("2026-08-06"));

        assert_eq!(streak.current(), 3);
        assert_eq!(streak.best(), 3);
    }

    #[test]
    fn same_day_win_does_not_double_count() {
        let mut streak = Streak::new();
        streak.record_win(day("2026-08-06"));
        streak.record_win(day("2026-08-06"));

        assert_eq!(streak.current(), 1);
    }

    #[test]
    fn gap_restarts_streak_but_keeps_best() {
        let mut streak = Streak::new();
        streak.record_win(day("2026-08-01"));
        streak.record_win(day("2026-08-02"));
        streak.record_win(day("2026-08-03"));
        streak.record_win(day("2026-08-06"));

        assert_eq!(streak.current(), 1);
        assert_eq!(streak.best(), 3);
    }

    #[test]
    fn effective_hides_stale_streak() {
        let mut streak = Streak::new();
        streak.record_win(day("2026-08-01"));
        streak.record_win(day("2026-08-02"));

        // Yesterday's win still counts today
        assert_eq!(streak.effective(day("2026-08-03")), (2, 2));
        // Two days later the run is over, best remains
        assert_eq!(streak.effective(day("2026-08-04")), (0, 2));
        // Stored state was not mutated by the read
        assert_eq!(streak.current(), 2);
    }

    #[test]
    fn month_boundary_counts_as_consecutive() {
        let mut streak = Streak::new();
        streak.record_win(day("2026-07-31"));
        streak.record_win(day("2026-08-01"));

        assert_eq!(streak.current(), 2);
    }
}
