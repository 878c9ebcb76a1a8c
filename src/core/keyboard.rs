//! Aggregate keyboard feedback
//!
//! Tracks the best outcome ever observed for each letter across a session so
//! the keyboard can be colored. A letter already marked Correct is never
//! downgraded by a later guess.

use super::{GuessResult, LetterOutcome};
use rustc_hash::FxHashMap;

/// Letter -> best observed outcome across all guesses in one session
#[derive(Debug, Clone, Default)]
pub struct KeyboardHints {
    states: FxHashMap<u8, LetterOutcome>,
}

impl KeyboardHints {
    /// Empty hints for a new session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess result into the hints
    ///
    /// A stored outcome is replaced only by a strictly better one:
    /// Correct > Present > Absent.
    pub fn absorb(&mut self, result: &GuessResult) {
        for (letter, outcome) in result.iter() {
            match self.states.get(&letter) {
                Some(existing) if existing.rank() >= outcome.rank() => {}
                _ => {
                    self.states.insert(letter, outcome);
                }
            }
        }
    }

    /// Best outcome observed for a letter, if any guess used it
    #[inline]
    #[must_use]
    pub fn hint(&self, letter: u8) -> Option<LetterOutcome> {
        self.states.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Number of letters with any recorded hint
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True if no guess has been absorbed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use LetterOutcome::{Absent, Correct, Present};

    fn eval(guess: &str, target: &str) -> GuessResult {
        GuessResult::evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn hints_start_empty() {
        let hints = KeyboardHints::new();
        assert!(hints.is_empty());
        assert_eq!(hints.hint(b'A'), None);
    }

    #[test]
    fn absorb_records_first_outcomes() {
        let mut hints = KeyboardHints::new();
        hints.absorb(&eval("sport", "trout"));

        assert_eq!(hints.hint(b'S'), Some(Absent));
        assert_eq!(hints.hint(b'O'), Some(Correct));
        assert_eq!(hints.hint(b'R'), Some(Present));
        assert_eq!(hints.hint(b'T'), Some(Correct));
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut hints = KeyboardHints::new();

        // T is correct at position 4 of TROUT
        hints.absorb(&eval("sport", "trout"));
        assert_eq!(hints.hint(b'T'), Some(Correct));

        // Later guess where T is merely present must not downgrade it
        hints.absorb(&eval("tails", "trout"));
        assert_eq!(hints.hint(b'T'), Some(Correct));
    }

    #[test]
    fn present_upgrades_to_correct() {
        let mut hints = KeyboardHints::new();

        hints.absorb(&eval("ratio", "trout"));
        assert_eq!(hints.hint(b'R'), Some(Present));

        hints.absorb(&eval("trout", "trout"));
        assert_eq!(hints.hint(b'R'), Some(Correct));
    }

    #[test]
    fn absent_does_not_overwrite_present() {
        let mut hints = KeyboardHints::new();

        // First guess: U present (wrong position)
        hints.absorb(&eval("until", "trout"));
        assert_eq!(hints.hint(b'U'), Some(Present));

        // SUUUU-style duplicate: extra U's come back absent but the hint
        // must keep the better outcome
        hints.absorb(&eval("usury", "trout"));
        assert_eq!(hints.hint(b'U'), Some(Present));
    }

    #[test]
    fn hint_lookup_is_case_insensitive() {
        let mut hints = KeyboardHints::new();
        hints.absorb(&eval("trout", "trout"));

        assert_eq!(hints.hint(b't'), Some(Correct));
        assert_eq!(hints.hint(b'T'), Some(Correct));
    }

    #[test]
    fn monotonic_over_any_sequence() {
        let mut hints = KeyboardHints::new();
        let guesses = ["sport", "trout", "tails", "until", "usury"];

        let mut best_t = 0;
        for guess in guesses {
            hints.absorb(&eval(guess, "trout"));
            if let Some(outcome) = hints.hint(b'T') {
                assert!(outcome.rank() >= best_t, "hint for T regressed");
                best_t = outcome.rank();
            }
        }
    }
}
