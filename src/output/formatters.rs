//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterOutcome};

/// Format a guess result as an emoji row
#[must_use]
pub fn result_to_emoji(result: &GuessResult) -> String {
    result
        .outcomes()
        .iter()
        .map(|outcome| match outcome {
            LetterOutcome::Correct => '🟩',
            LetterOutcome::Present => '🟨',
            LetterOutcome::Absent => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn eval(guess: &str, target: &str) -> GuessResult {
        GuessResult::evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn emoji_all_green_on_win() {
        let result = eval("judge", "judge");
        assert_eq!(result_to_emoji(&result), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_all_gray_on_miss() {
        let result = eval("clime", "trout");
        assert_eq!(result_to_emoji(&result), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_mixed_row() {
        // SPORT vs TROUT: absent absent correct present correct
        let result = eval("sport", "trout");
        assert_eq!(result_to_emoji(&result), "⬜⬜🟩🟨🟩");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(3.0, 0.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }
}
