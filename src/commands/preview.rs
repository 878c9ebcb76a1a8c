//! Daily selection preview
//!
//! Computes which word each upcoming date maps to for a theme. Pure
//! function of the date range; useful for sanity-checking a list edit
//! before it goes live.

use crate::select::select_daily;
use crate::themes::Theme;
use chrono::{Days, NaiveDate};

/// One (date, word) row of the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPreview {
    pub date: String,
    pub word: String,
}

/// Compute the daily selections for `days` dates starting at `start`
#[must_use]
pub fn preview_daily(theme: &Theme, start: NaiveDate, days: u32) -> Vec<DailyPreview> {
    (0..days)
        .filter_map(|offset| {
            let date = start.checked_add_days(Days::new(u64::from(offset)))?;
            let key = date.format("%Y-%m-%d").to_string();
            let word = select_daily(&key, theme.words())?;
            Some(DailyPreview {
                date: key,
                word: word.text().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::new("test", "Test", &["JUDGE", "TROUT", "BETTS", "MARTE", "HAYES"]).unwrap()
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn preview_has_one_row_per_day() {
        let rows = preview_daily(&theme(), day("2026-08-06"), 7);

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].date, "2026-08-06");
        assert_eq!(rows[6].date, "2026-08-12");
    }

    #[test]
    fn preview_is_deterministic() {
        let a = preview_daily(&theme(), day("2026-08-06"), 14);
        let b = preview_daily(&theme(), day("2026-08-06"), 14);
        assert_eq!(a, b);
    }

    #[test]
    fn preview_words_come_from_the_theme() {
        let theme = theme();
        let rows = preview_daily(&theme, day("2026-08-06"), 30);

        for row in rows {
            assert!(
                theme.words().iter().any(|w| w.text() == row.word),
                "{} not in theme list",
                row.word
            );
        }
    }

    #[test]
    fn preview_zero_days_is_empty() {
        assert!(preview_daily(&theme(), day("2026-08-06"), 0).is_empty());
    }
}
