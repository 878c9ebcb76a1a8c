//! Game session state machine
//!
//! A session moves from `InProgress` to `Won` or `Lost` and accepts no
//! further guesses once terminal. Validation failures (wrong length,
//! non-alphabetic input) are rejected before evaluation and cause no state
//! transition.

use crate::core::{GuessResult, KeyboardHints, MAX_GUESSES, Word, WordError};

/// Lifecycle state of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// True once the game has ended
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of a submit call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The guess was evaluated and recorded
    Accepted(GuessResult),
    /// The session was already terminal; nothing changed
    Ignored,
}

/// One in-memory game against a fixed target
///
/// The session owns all per-game state: submitted guesses, their results,
/// and aggregate keyboard hints. It never touches persistence; finished
/// sessions are handed to a store by the caller.
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    guesses: Vec<Word>,
    results: Vec<GuessResult>,
    keyboard: KeyboardHints,
    status: GameStatus,
}

impl GameSession {
    /// Start a fresh session against `target`
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            guesses: Vec::with_capacity(MAX_GUESSES),
            results: Vec::with_capacity(MAX_GUESSES),
            keyboard: KeyboardHints::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Rebuild a finished (or partial) session from previously recorded
    /// guesses, replaying each against the target
    ///
    /// Used to render an already-played day exactly as it ended.
    ///
    /// # Errors
    /// Returns `WordError` if any recorded guess fails validation.
    pub fn restore<S: AsRef<str>>(target: Word, prior_guesses: &[S]) -> Result<Self, WordError> {
        let mut session = Self::new(target);
        for raw in prior_guesses {
            match session.submit(raw.as_ref())? {
                Submission::Accepted(_) | Submission::Ignored => {}
            }
        }
        Ok(session)
    }

    /// Submit a guess
    ///
    /// Terminal sessions ignore submissions. A winning guess ends the game
    /// immediately; the sixth non-matching guess ends it as a loss.
    ///
    /// # Errors
    /// Returns `WordError` for invalid input (wrong length, non-alphabetic);
    /// the session state is unchanged in that case.
    pub fn submit(&mut self, raw: &str) -> Result<Submission, WordError> {
        if self.status.is_terminal() {
            return Ok(Submission::Ignored);
        }

        let guess = Word::new(raw)?;
        let result = GuessResult::evaluate(&guess, &self.target);

        self.keyboard.absorb(&result);
        self.guesses.push(guess);
        self.results.push(result.clone());

        if result.is_win() {
            self.status = GameStatus::Won;
        } else if self.guesses.len() >= MAX_GUESSES {
            self.status = GameStatus::Lost;
        }

        Ok(Submission::Accepted(result))
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Number of guesses submitted so far
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    /// Submitted guesses in order
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Per-guess evaluation results in order
    #[must_use]
    pub fn results(&self) -> &[GuessResult] {
        &self.results
    }

    /// Aggregate keyboard hints for the session
    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardHints {
        &self.keyboard
    }

    /// Guesses as plain strings, for persistence
    #[must_use]
    pub fn guess_texts(&self) -> Vec<String> {
        self.guesses.iter().map(|w| w.text().to_string()).collect()
    }

    /// True if the session ended in a win
    #[must_use]
    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterOutcome;

    fn session(target: &str) -> GameSession {
        GameSession::new(Word::new(target).unwrap())
    }

    #[test]
    fn new_session_is_in_progress() {
        let session = session("judge");
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.guess_count(), 0);
        assert!(session.keyboard().is_empty());
    }

    #[test]
    fn winning_guess_ends_game_immediately() {
        let mut session = session("judge");
        let outcome = session.submit("judge").unwrap();

        match outcome {
            Submission::Accepted(result) => assert!(result.is_win()),
            Submission::Ignored => panic!("first guess must be accepted"),
        }
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.guess_count(), 1);
    }

    #[test]
    fn win_on_last_guess_is_still_a_win() {
        let mut session = session("judge");
        for guess in ["trout", "marte", "hayes", "lindo", "betts"] {
            session.submit(guess).unwrap();
        }
        assert_eq!(session.status(), GameStatus::InProgress);

        session.submit("judge").unwrap();
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.guess_count(), 6);
    }

    #[test]
    fn six_misses_lose_the_game() {
        let mut session = session("judge");
        for guess in ["trout", "marte", "hayes", "lindo", "betts", "nolan"] {
            session.submit(guess).unwrap();
        }

        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.guess_count(), 6);
    }

    #[test]
    fn invalid_guess_is_rejected_without_transition() {
        let mut session = session("judge");

        assert!(session.submit("shrt").is_err());
        assert!(session.submit("toolong").is_err());
        assert!(session.submit("gu3ss").is_err());

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.guess_count(), 0);
    }

    #[test]
    fn terminal_session_ignores_submissions() {
        let mut session = session("judge");
        session.submit("judge").unwrap();
        assert_eq!(session.status(), GameStatus::Won);

        let outcome = session.submit("trout").unwrap();
        assert_eq!(outcome, Submission::Ignored);
        assert_eq!(session.guess_count(), 1);
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn keyboard_hints_accumulate_across_guesses() {
        let mut session = session("trout");
        session.submit("sport").unwrap();
        session.submit("after").unwrap();

        assert_eq!(session.keyboard().hint(b'O'), Some(LetterOutcome::Correct));
        assert_eq!(session.keyboard().hint(b'S'), Some(LetterOutcome::Absent));
        // T was Correct in the first guess; the later Present must not win
        assert_eq!(session.keyboard().hint(b'T'), Some(LetterOutcome::Correct));
    }

    #[test]
    fn restore_replays_a_finished_game() {
        let target = Word::new("judge").unwrap();
        let restored = GameSession::restore(target, &["trout", "judge"]).unwrap();

        assert_eq!(restored.status(), GameStatus::Won);
        assert_eq!(restored.guess_count(), 2);
        assert_eq!(restored.results().len(), 2);
        assert!(restored.results()[1].is_win());
    }

    #[test]
    fn restore_rejects_invalid_recorded_guess() {
        let target = Word::new("judge").unwrap();
        assert!(GameSession::restore(target, &["trout", "bad"]).is_err());
    }

    #[test]
    fn guess_texts_round_trip_uppercase() {
        let mut session = session("judge");
        session.submit("trout").unwrap();
        session.submit("marte").unwrap();

        assert_eq!(session.guess_texts(), vec!["TROUT", "MARTE"]);
    }
}
