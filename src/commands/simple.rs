//! Simple interactive CLI mode
//!
//! Line-based daily game without the TUI: read guesses from stdin, print
//! colored feedback rows and keyboard hints, then record the finished game
//! and show the day's stats and leaderboard.

use crate::core::{MAX_GUESSES, WordError};
use crate::game::{GameSession, GameStatus, Identity, Submission, share_text};
use crate::output::display::{
    print_keyboard, print_leaderboard, print_result_row, print_stats, print_streak,
};
use crate::select::select_daily;
use crate::store::{GameRecord, ResultStore, StoreError};
use crate::themes::Theme;
use chrono::NaiveDate;
use colored::Colorize;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

/// Run the simple interactive daily game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the theme
/// word list is empty. Store failures are surfaced as warnings, never as
/// errors: the local game outcome stands on its own.
pub fn run_simple(
    store: &mut dyn ResultStore,
    theme: &Theme,
    date: NaiveDate,
    identity: &Identity,
) -> Result<(), String> {
    let date_key = date.format("%Y-%m-%d").to_string();
    let target = select_daily(&date_key, theme.words())
        .ok_or_else(|| format!("Theme '{}' has no words", theme.id()))?
        .clone();

    if let Err(e) = store.ensure_daily(&date_key, theme.id(), target.text()) {
        warn_store(&e);
    }

    println!("\n╔══════════════════════════════════════════════╗");
    println!("║            Daily Wordle - {:<8}           ║", theme.name());
    println!("╚══════════════════════════════════════════════╝\n");
    println!(
        "{} · playing as {}",
        date_key,
        identity.username().bright_yellow()
    );

    // A finished day replays as it ended instead of starting over
    let prior = match store.prior_result(&date_key, theme.id(), identity.user_id()) {
        Ok(prior) => prior,
        Err(e) => {
            warn_store(&e);
            None
        }
    };
    if let Some(record) = prior {
        println!("\n{}", "You already played today. Your game:".bright_cyan());
        let session = GameSession::restore(target, &record.guesses)
            .map_err(|e| format!("Stored game is invalid: {e}"))?;
        replay(&session);
        show_day(store, theme, &date_key, identity);
        return Ok(());
    }

    let mut session = GameSession::new(target);

    while session.status() == GameStatus::InProgress {
        let remaining = MAX_GUESSES - session.guess_count();
        let prompt = format!("Guess ({remaining} left, 'quit' to exit)");
        let input = get_user_input(&prompt)?;

        if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
            println!("\n👋 Come back tomorrow!\n");
            return Ok(());
        }

        match session.submit(&input) {
            Ok(Submission::Accepted(result)) => {
                println!();
                print_result_row(&result);
                println!();
                print_keyboard(session.keyboard());
            }
            Ok(Submission::Ignored) => {}
            Err(e) => {
                println!("{}", validation_message(&e).bright_red());
            }
        }
    }

    match session.status() {
        GameStatus::Won => {
            let count = session.guess_count();
            println!(
                "\n{}",
                format!("🎉 Got it in {count}/{MAX_GUESSES}!").bright_green().bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "\n{}",
                format!("😞 Out of guesses. The word was {}.", session.target())
                    .bright_red()
                    .bold()
            );
        }
        GameStatus::InProgress => unreachable!("loop exits only on terminal state"),
    }

    println!("\n{}\n", share_text(&session, theme.name(), &date_key));

    let record = build_record(&session, &date_key, theme.id(), identity, now_millis());
    if let Err(e) = store.submit_result(record) {
        warn_store(&e);
    }

    show_day(store, theme, &date_key, identity);
    Ok(())
}

/// Print a restored session's rows and final state
fn replay(session: &GameSession) {
    println!();
    for result in session.results() {
        print_result_row(result);
    }
    match session.status() {
        GameStatus::Won => println!(
            "\n{}",
            format!("Won in {}/{MAX_GUESSES}.", session.guess_count()).bright_green()
        ),
        GameStatus::Lost => println!(
            "\n{}",
            format!("Lost. The word was {}.", session.target()).bright_red()
        ),
        GameStatus::InProgress => println!("\nGame still open."),
    }
}

/// Print stats, leaderboard and streak for the day, tolerating store errors
fn show_day(store: &mut dyn ResultStore, theme: &Theme, date_key: &str, identity: &Identity) {
    match store.stats(date_key, theme.id()) {
        Ok(stats) => print_stats(date_key, theme.name(), &stats),
        Err(e) => warn_store(&e),
    }
    match store.leaderboard(date_key, theme.id(), 10) {
        Ok(board) => print_leaderboard(&board, identity.username()),
        Err(e) => warn_store(&e),
    }
    if let Ok(streak) = store.streak(identity.user_id())
        && let Ok(today) = NaiveDate::parse_from_str(date_key, "%Y-%m-%d")
    {
        let (current, best) = streak.effective(today);
        print_streak(current, best);
    }
    println!();
}

/// Build the persistence record for a finished session
fn build_record(
    session: &GameSession,
    date_key: &str,
    theme_id: &str,
    identity: &Identity,
    completed_at: u64,
) -> GameRecord {
    GameRecord {
        date: date_key.to_string(),
        theme: theme_id.to_string(),
        user_id: identity.user_id().to_string(),
        username: identity.username().to_string(),
        guesses: session.guess_texts(),
        won: session.won(),
        completed_at,
    }
}

fn validation_message(error: &WordError) -> String {
    match error {
        WordError::InvalidLength(_) => "Not enough letters (need exactly 5)".to_string(),
        WordError::NonAscii | WordError::InvalidCharacters => {
            "Letters only, please".to_string()
        }
    }
}

fn warn_store(error: &StoreError) {
    eprintln!(
        "{}",
        format!("⚠ Could not reach the result store: {error}").yellow()
    );
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn build_record_captures_session_outcome() {
        let mut session = GameSession::new(Word::new("judge").unwrap());
        session.submit("trout").unwrap();
        session.submit("judge").unwrap();

        let identity = Identity::from_username("Ana");
        let record = build_record(&session, "2026-08-06", "mlb", &identity, 42);

        assert_eq!(record.date, "2026-08-06");
        assert_eq!(record.theme, "mlb");
        assert_eq!(record.user_id, "ana");
        assert_eq!(record.guesses, vec!["TROUT", "JUDGE"]);
        assert!(record.won);
        assert_eq!(record.completed_at, 42);
    }

    #[test]
    fn validation_messages_are_user_facing() {
        assert!(validation_message(&WordError::InvalidLength(3)).contains("5"));
        assert!(validation_message(&WordError::InvalidCharacters).contains("Letters"));
    }
}
