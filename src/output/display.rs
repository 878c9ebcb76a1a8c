//! Display functions for game and command results

use super::formatters::create_progress_bar;
use crate::commands::{AuditReport, DailyPreview};
use crate::core::{GuessResult, KeyboardHints, LetterOutcome, MAX_GUESSES};
use crate::store::{DailyStats, LeaderboardEntry};
use colored::Colorize;

/// Print one evaluated guess as a row of colored tiles
pub fn print_result_row(result: &GuessResult) {
    let row: String = result
        .iter()
        .map(|(letter, outcome)| {
            let tile = format!(" {} ", letter as char);
            match outcome {
                LetterOutcome::Correct => tile.black().on_green().bold().to_string(),
                LetterOutcome::Present => tile.black().on_yellow().bold().to_string(),
                LetterOutcome::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ");

    println!("  {row}");
}

/// Print the keyboard with per-letter hints, QWERTY layout
pub fn print_keyboard(hints: &KeyboardHints) {
    for (indent, row) in [(0, "QWERTYUIOP"), (1, "ASDFGHJKL"), (3, "ZXCVBNM")] {
        let keys: String = row
            .bytes()
            .map(|letter| {
                let key = format!("{} ", letter as char);
                match hints.hint(letter) {
                    Some(LetterOutcome::Correct) => key.black().on_green().to_string(),
                    Some(LetterOutcome::Present) => key.black().on_yellow().to_string(),
                    Some(LetterOutcome::Absent) => key.bright_black().to_string(),
                    None => key.white().to_string(),
                }
            })
            .collect();
        println!("  {}{keys}", " ".repeat(indent));
    }
}

/// Print daily aggregate stats with a guess distribution chart
pub fn print_stats(date: &str, theme_name: &str, stats: &DailyStats) {
    println!("\n{}", "═".repeat(44).cyan());
    println!(
        " {} {} · {} ",
        "DAILY STATS:".bright_cyan().bold(),
        theme_name.bright_yellow().bold(),
        date
    );
    println!("{}", "═".repeat(44).cyan());

    println!("\n   Games played:  {}", stats.total_games);
    println!("   Games won:     {}", stats.total_wins);
    println!(
        "   Win rate:      {}",
        format!("{}%", stats.win_rate()).bright_yellow()
    );

    println!("\n   Guess distribution:");
    let max = stats.distribution.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 20);
        println!("   {} [{}] {}", i + 1, bar.green(), count);
    }
}

/// Print the daily winner ranking
pub fn print_leaderboard(entries: &[LeaderboardEntry], current_username: &str) {
    if entries.is_empty() {
        println!("\n{}", "No winners recorded yet today.".bright_black());
        return;
    }

    println!("\n{}", "─".repeat(44).cyan());
    println!(" {} ", "LEADERBOARD".bright_cyan().bold());
    println!("{}", "─".repeat(44).cyan());

    for entry in entries {
        let marker = if entry.username == current_username {
            "◄ you".bright_yellow().to_string()
        } else {
            String::new()
        };
        let line = format!(
            "  #{:<3} {:<20} {}/{} {marker}",
            entry.rank, entry.username, entry.guesses, MAX_GUESSES
        );
        match entry.rank {
            1 => println!("{}", line.bright_green().bold()),
            2 | 3 => println!("{}", line.bright_yellow()),
            _ => println!("{line}"),
        }
    }
}

/// Print a win streak line
pub fn print_streak(current: u32, best: u32) {
    println!(
        "\n   Streak: {} current · {} best",
        current.to_string().bright_green().bold(),
        best.to_string().bright_yellow()
    );
}

/// Print upcoming daily selections
pub fn print_preview(theme_name: &str, rows: &[DailyPreview]) {
    println!("\n{}", "─".repeat(44).cyan());
    println!(
        " {} {} ",
        "UPCOMING WORDS:".bright_cyan().bold(),
        theme_name.bright_yellow().bold()
    );
    println!("{}", "─".repeat(44).cyan());

    for row in rows {
        println!("  {}  {}", row.date, row.word.bright_white().bold());
    }
}

/// Print a selection-fairness audit
pub fn print_audit(report: &AuditReport) {
    println!("\n{}", "═".repeat(52).cyan());
    println!(
        " {} {} · {} days ",
        "SELECTION AUDIT:".bright_cyan().bold(),
        report.theme_name.bright_yellow().bold(),
        report.days
    );
    println!("{}", "═".repeat(52).cyan());

    println!(
        "\n   Words picked at least once: {}/{}",
        report.covered,
        report.counts.len()
    );
    println!("   Most picked:   {} times", report.max_count);
    println!("   Least picked:  {} times", report.min_count);

    println!("\n   Picks per word:");
    let max = report.max_count.max(1);
    for (word, count) in &report.counts {
        let bar = create_progress_bar(f64::from(*count), f64::from(max), 24);
        println!("   {:<6} [{}] {}", word, bar.green(), count);
    }
}
