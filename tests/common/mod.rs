#![allow(dead_code)]

use warrant_calculator::domain::entities::{FormatterState, Keystroke};
use warrant_calculator::presentation::WarrantForm;
use warrant_calculator::presentation::date_field;
use warrant_calculator::utils::date_formatter::apply_keystroke;

/// Relative tolerance for comparing computed amounts.
pub const TOLERANCE: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= TOLERANCE * scale,
        "expected {expected}, got {actual}"
    );
}

/// Feeds each character through the formatter, collecting every state.
pub fn type_digits(start: FormatterState, input: &str) -> Vec<FormatterState> {
    let mut state = start;
    input
        .chars()
        .map(|c| {
            state = apply_keystroke(&state, Keystroke::Char(c));
            state.clone()
        })
        .collect()
}

/// Types a whole string into an empty date field the way the form does.
pub fn typed_field(input: &str) -> FormatterState {
    input
        .chars()
        .fold(FormatterState::default(), |s, c| {
            date_field::edit(&s, Keystroke::Char(c))
        })
}

pub fn create_test_form(amount: &str, rate: &str, start: &str, end: &str) -> WarrantForm {
    WarrantForm {
        amount: amount.to_string(),
        rate: rate.to_string(),
        start_date: typed_field(start),
        end_date: typed_field(end),
    }
}
