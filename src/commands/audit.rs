//! Selection-fairness audit
//!
//! Sweeps a range of dates through the daily hash and counts how often each
//! word of a theme gets picked. The hash is not uniform over short ranges;
//! this makes the skew visible before a list ships.

use crate::select::daily_index;
use crate::themes::Theme;
use chrono::{Days, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Result of auditing one theme over a date range
#[derive(Debug, Clone)]
pub struct AuditReport {
    pub theme_name: String,
    pub days: u32,
    /// (word, times picked), in list order
    pub counts: Vec<(String, u32)>,
    /// Words picked at least once
    pub covered: usize,
    pub min_count: u32,
    pub max_count: u32,
}

/// Count daily selections for `days` dates starting at `start`
///
/// The sweep is embarrassingly parallel; each date hashes independently.
#[must_use]
pub fn run_audit(theme: &Theme, start: NaiveDate, days: u32) -> AuditReport {
    let word_count = theme.words().len();

    let pb = ProgressBar::new(u64::from(days));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let indices: Vec<usize> = (0..days)
        .into_par_iter()
        .filter_map(|offset| {
            let date = start.checked_add_days(Days::new(u64::from(offset)))?;
            let key = date.format("%Y-%m-%d").to_string();
            let index = daily_index(&key, word_count);
            pb.inc(1);
            index
        })
        .collect();
    pb.finish_and_clear();

    let mut picks = vec![0u32; word_count];
    for index in indices {
        picks[index] += 1;
    }

    let counts: Vec<(String, u32)> = theme
        .words()
        .iter()
        .zip(&picks)
        .map(|(word, &count)| (word.text().to_string(), count))
        .collect();

    let covered = picks.iter().filter(|&&c| c > 0).count();
    let min_count = picks.iter().copied().min().unwrap_or(0);
    let max_count = picks.iter().copied().max().unwrap_or(0);

    AuditReport {
        theme_name: theme.name().to_string(),
        days,
        counts,
        covered,
        min_count,
        max_count,
    }
}
