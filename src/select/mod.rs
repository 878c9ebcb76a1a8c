//! Deterministic daily word selection
//!
//! Every player on the same calendar day and theme must get the same target
//! word with no server coordination, so selection is a pure function of the
//! date string. The mixing function is the JavaScript classic
//! `hash = ((hash << 5) - hash) + char_code` kept bit-exact in 32-bit
//! wrapping arithmetic, so historical daily words reproduce.

use crate::core::Word;

/// 32-bit string hash used to pick the daily word
///
/// Bit-for-bit equivalent to the original `((hash << 5) - hash) + c`
/// loop on 32-bit signed integers.
#[must_use]
pub fn date_hash(input: &str) -> i32 {
    let mut hash: i32 = 0;
    for b in input.bytes() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(b));
    }
    hash
}

/// Index into a list of `len` words for `date`
///
/// Returns `None` only for `len == 0`.
#[must_use]
pub fn daily_index(date: &str, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(date_hash(date).unsigned_abs() as usize % len)
}

/// Pick the daily word for `date` from an ordered list
///
/// Returns `None` only for an empty list; theme catalogs validate
/// non-emptiness at startup so callers normally never see it.
#[must_use]
pub fn select_daily<'a>(date: &str, words: &'a [Word]) -> Option<&'a Word> {
    daily_index(date, words.len()).map(|index| &words[index])
}
