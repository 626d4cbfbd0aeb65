//! Live formatting of `MM-DD-YY` date fields.
//!
//! Each digit typed into a date field rebuilds the whole field from its
//! digits, grouped 2/2/2 with hyphens, so the user only ever types digits.

use crate::domain::entities::{FormatterState, KeyAction, Keystroke};

/// Digits in a complete `MMDDYY` entry.
pub const MAX_DIGITS: usize = 6;

/// Groups up to six digits as `MM-DD-YY`, omitting groups not yet reached.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(group_digits("01"), "01");
/// assert_eq!(group_digits("010"), "01-0");
/// assert_eq!(group_digits("01012"), "01-01-2");
/// ```
pub fn group_digits(digits: &str) -> String {
    match digits.len() {
        0..=2 => digits.to_string(),
        3..=4 => format!("{}-{}", &digits[..2], &digits[2..]),
        _ => format!("{}-{}-{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/// Applies one keystroke to a date field and returns the new field state.
///
/// # Rules
///
/// 1. Navigation keys and a typed `-` pass through unchanged; the caller
///    performs the native edit itself
/// 2. Other non-digit characters are ignored
/// 3. A digit is rejected once the field already holds six digits
/// 4. Otherwise the digit is inserted at the cursor and the field is rebuilt
///    with [`group_digits`]
/// 5. The cursor moves past the new digit and past any hyphen the rebuild
///    added: `cursor + 1 + (new_hyphens - old_hyphens)`
///
/// # Examples
///
/// ```ignore
/// let state = FormatterState::at_end("01");
/// let next = apply_keystroke(&state, Keystroke::Char('0'));
/// assert_eq!(next, FormatterState::new("01-0", 4));
/// ```
pub fn apply_keystroke(state: &FormatterState, keystroke: Keystroke) -> FormatterState {
    let digit = match (keystroke.action(), keystroke) {
        (KeyAction::Digit, Keystroke::Char(c)) => c,
        _ => return state.clone(),
    };

    if state.digit_count() >= MAX_DIGITS {
        return state.clone();
    }

    let cursor = state.cursor.min(state.text.len());
    let insert_at = state
        .text
        .get(..cursor)
        .unwrap_or(state.text.as_str())
        .chars()
        .filter(char::is_ascii_digit)
        .count();

    let mut digits: String = state.text.chars().filter(char::is_ascii_digit).collect();
    digits.insert(insert_at, digit);

    let text = group_digits(&digits);
    if text == state.text {
        return state.clone();
    }

    let old_hyphens = state.hyphen_count();
    let new_hyphens = text.chars().filter(|&c| c == '-').count();
    let cursor = (cursor + 1 + new_hyphens)
        .saturating_sub(old_hyphens)
        .min(text.len());

    FormatterState { text, cursor }
}
