//! Shareable result text
//!
//! Renders a finished session as the familiar emoji grid plus a result line,
//! recomputed from the recorded guesses with the same evaluator the game
//! used.

use super::{GameSession, GameStatus};
use crate::core::MAX_GUESSES;
use crate::output::formatters::result_to_emoji;

/// Build share text for a finished session
///
/// `title` is the theme display name, `date` the ISO day being played.
/// An in-progress session renders its rows so far with a neutral result
/// line; callers normally share only after the game has ended.
#[must_use]
pub fn share_text(session: &GameSession, title: &str, date: &str) -> String {
    let guess_count = session.guess_count();

    let result_line = match session.status() {
        GameStatus::Won => {
            let tries = if guess_count == 1 { "try" } else { "tries" };
            format!("I got it in {guess_count}/{MAX_GUESSES} {tries}!")
        }
        GameStatus::Lost => "I didn't get it today".to_string(),
        GameStatus::InProgress => format!("{guess_count}/{MAX_GUESSES} so far"),
    };

    let grid: Vec<String> = session.results().iter().map(result_to_emoji).collect();

    format!("{title} Wordle {date}\n\n{result_line}\n\n{}", grid.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn finished(target: &str, guesses: &[&str]) -> GameSession {
        GameSession::restore(Word::new(target).unwrap(), guesses).unwrap()
    }

    #[test]
    fn share_text_for_win_counts_tries() {
        let session = finished("judge", &["trout", "judge"]);
        let text = share_text(&session, "MLB", "2026-08-06");

        assert!(text.starts_with("MLB Wordle 2026-08-06"));
        assert!(text.contains("I got it in 2/6 tries!"));
        assert!(text.contains("🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn share_text_singular_on_first_try() {
        let session = finished("judge", &["judge"]);
        let text = share_text(&session, "MLB", "2026-08-06");

        assert!(text.contains("1/6 try!"));
    }

    #[test]
    fn share_text_for_loss() {
        let session = finished(
            "judge",
            &["trout", "marte", "hayes", "lindo", "betts", "nolan"],
        );
        let text = share_text(&session, "Foods", "2026-08-06");

        assert!(text.contains("I didn't get it today"));
        // Six rows, one per guess
        assert_eq!(text.lines().filter(|l| l.contains('\u{2b1c}') || l.contains('\u{1f7e9}') || l.contains('\u{1f7e8}')).count(), 6);
    }

    #[test]
    fn share_grid_matches_results() {
        let session = finished("trout", &["sport", "trout"]);
        let text = share_text(&session, "MLB", "2026-08-06");

        // SPORT vs TROUT: absent absent correct present correct
        assert!(text.contains("⬜⬜🟩🟨🟩"));
    }
}
