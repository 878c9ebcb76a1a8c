//! Guess evaluation
//!
//! Evaluating a guess against the target produces one [`LetterOutcome`] per
//! position. Duplicate letters follow the standard Wordle accounting: exact
//! matches consume a letter's budget first, then remaining occurrences are
//! consumed left to right, so a letter is never credited more times than it
//! appears in the target.

use super::{WORD_LENGTH, Word};

/// Per-position classification of a guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterOutcome {
    /// Letter matches the target at this position
    Correct,
    /// Letter exists in the target at a different position
    Present,
    /// Letter does not appear in the target (or its occurrences are spent)
    Absent,
}

impl LetterOutcome {
    /// Priority for keyboard-hint aggregation: Correct > Present > Absent
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Correct => 2,
            Self::Present => 1,
            Self::Absent => 0,
        }
    }
}

/// Evaluation of one guess: the guessed letters with their outcomes, in
/// position order
///
/// Produced once per submitted guess and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    letters: [u8; WORD_LENGTH],
    outcomes: [LetterOutcome; WORD_LENGTH],
}

impl GuessResult {
    /// Evaluate `guess` against `target`
    ///
    /// # Algorithm
    /// 1. Build a remaining-available count of each target letter.
    /// 2. First pass: mark exact positional matches Correct, consuming from
    ///    the counts. The pass completes before any Present is assigned.
    /// 3. Second pass, left to right: a non-Correct position is Present while
    ///    its letter still has remaining count, otherwise Absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{GuessResult, LetterOutcome, Word};
    ///
    /// let target = Word::new("sadly").unwrap();
    /// let guess = Word::new("sassy").unwrap();
    /// let result = GuessResult::evaluate(&guess, &target);
    ///
    /// // Only the first S is credited; the target has a single S
    /// assert_eq!(result.outcome_at(0), LetterOutcome::Correct);
    /// assert_eq!(result.outcome_at(2), LetterOutcome::Absent);
    /// assert_eq!(result.outcome_at(3), LetterOutcome::Absent);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut outcomes = [LetterOutcome::Absent; WORD_LENGTH];
        let mut available = target.letter_counts();

        // First pass: exact matches consume the letter budget
        // Allow: index needed to compare guess[i] with target[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.letter_at(i) == target.letter_at(i) {
                outcomes[i] = LetterOutcome::Correct;

                if let Some(count) = available.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong-position matches, left to right
        // Allow: index needed to check and set outcomes[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if outcomes[i] != LetterOutcome::Correct {
                let letter = guess.letter_at(i);
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    outcomes[i] = LetterOutcome::Present;
                    *count -= 1;
                }
            }
        }

        Self {
            letters: *guess.letters(),
            outcomes,
        }
    }

    /// The guessed letters, in position order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// The per-position outcomes, aligned with [`Self::letters`]
    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[LetterOutcome; WORD_LENGTH] {
        &self.outcomes
    }

    /// Outcome at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn outcome_at(&self, position: usize) -> LetterOutcome {
        self.outcomes[position]
    }

    /// Iterate over (letter, outcome) pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterOutcome)> + '_ {
        self.letters.iter().copied().zip(self.outcomes.iter().copied())
    }

    /// True if every position is Correct (winning guess)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.outcomes.iter().all(|&o| o == LetterOutcome::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterOutcome::{Absent, Correct, Present};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn evaluate_word_against_itself_all_correct() {
        for s in ["judge", "trout", "sassy", "aaaaa", "marte"] {
            let w = word(s);
            let result = GuessResult::evaluate(&w, &w);
            assert!(result.is_win(), "{s} vs itself should win");
            assert_eq!(result.outcomes(), &[Correct; 5]);
        }
    }

    #[test]
    fn evaluate_disjoint_letters_all_absent() {
        let target = word("trout");
        let guess = word("clime");
        let result = GuessResult::evaluate(&guess, &target);

        assert_eq!(result.outcomes(), &[Absent; 5]);
        assert!(!result.is_win());
    }

    #[test]
    fn evaluate_sport_against_trout() {
        // TROUT: position 2 (O) and position 4 (T) match exactly; R is
        // present elsewhere; the target's second T is consumed by the
        // exact match, leaving S and P absent.
        let target = word("trout");
        let guess = word("sport");
        let result = GuessResult::evaluate(&guess, &target);

        assert_eq!(result.outcomes(), &[Absent, Absent, Correct, Present, Correct]);
    }

    #[test]
    fn evaluate_duplicate_letters_bounded_by_target_count() {
        // SADLY has one S; SASSY guesses three. Only the exact match at
        // position 0 may be credited.
        let target = word("sadly");
        let guess = word("sassy");
        let result = GuessResult::evaluate(&guess, &target);

        assert_eq!(result.outcomes(), &[Correct, Correct, Absent, Absent, Correct]);

        let s_credits = result
            .iter()
            .filter(|&(letter, outcome)| letter == b'S' && outcome != Absent)
            .count();
        assert_eq!(s_credits, 1);
    }

    #[test]
    fn evaluate_exact_match_consumes_before_present() {
        // ROBOT vs FLOOR: the first O is present, the second O green.
        let target = word("floor");
        let guess = word("robot");
        let result = GuessResult::evaluate(&guess, &target);

        assert_eq!(result.outcomes(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn evaluate_pass_two_is_left_to_right() {
        // ERASE has two E's, none in guess positions. SPEED's first two E's
        // (positions 2 and 3) take them; D stays absent.
        let target = word("erase");
        let guess = word("speed");
        let result = GuessResult::evaluate(&guess, &target);

        assert_eq!(result.outcomes(), &[Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn evaluate_is_idempotent() {
        let target = word("belli");
        let guess = word("lindo");

        let first = GuessResult::evaluate(&guess, &target);
        let second = GuessResult::evaluate(&guess, &target);
        assert_eq!(first, second);
    }

    #[test]
    fn evaluate_judge_against_judge_wins() {
        let target = word("judge");
        let result = GuessResult::evaluate(&target.clone(), &target);

        assert!(result.is_win());
        assert_eq!(result.letters(), b"JUDGE");
    }

    #[test]
    fn result_iter_aligns_letters_and_outcomes() {
        let target = word("trout");
        let guess = word("sport");
        let result = GuessResult::evaluate(&guess, &target);

        let pairs: Vec<(u8, LetterOutcome)> = result.iter().collect();
        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[0], (b'S', Absent));
        assert_eq!(pairs[2], (b'O', Correct));
        assert_eq!(pairs[4], (b'T', Correct));
    }
}
