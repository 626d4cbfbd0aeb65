//! Editing of a date field: native edits plus live formatting.
//!
//! [`apply_keystroke`] passes navigation keys and hyphens through untouched;
//! this module performs those edits the way a text box would.

use crate::domain::entities::{FormatterState, Keystroke, NavigationKey};
use crate::utils::date_formatter::apply_keystroke;

/// Applies a key to a date field the way the calculator form does.
///
/// Digits go through [`apply_keystroke`]. Backspace and delete remove one
/// character, arrows move the cursor and tab leaves the field as is. A typed
/// `-` steps over a hyphen already under the cursor and is dropped otherwise,
/// so the field never holds more than the two grouping hyphens.
pub fn edit(state: &FormatterState, keystroke: Keystroke) -> FormatterState {
    let formatted = apply_keystroke(state, keystroke);
    if formatted != *state {
        return formatted;
    }

    let cursor = state.cursor.min(state.text.len());
    match keystroke {
        Keystroke::Navigation(NavigationKey::Left) => {
            FormatterState::new(state.text.clone(), cursor.saturating_sub(1))
        }
        Keystroke::Navigation(NavigationKey::Right) => {
            FormatterState::new(state.text.clone(), cursor + 1)
        }
        Keystroke::Navigation(NavigationKey::Backspace) if cursor > 0 => {
            let mut text = state.text.clone();
            text.remove(cursor - 1);
            FormatterState::new(text, cursor - 1)
        }
        Keystroke::Navigation(NavigationKey::Delete) if cursor < state.text.len() => {
            let mut text = state.text.clone();
            text.remove(cursor);
            FormatterState::new(text, cursor)
        }
        Keystroke::Char('-') if state.text.get(cursor..).is_some_and(|r| r.starts_with('-')) => {
            FormatterState::new(state.text.clone(), cursor + 1)
        }
        _ => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(key: NavigationKey) -> Keystroke {
        Keystroke::Navigation(key)
    }

    #[test]
    fn test_digit_is_formatted() {
        let next = edit(&FormatterState::at_end("01"), Keystroke::Char('3'));
        assert_eq!(next, FormatterState::new("01-3", 4));
    }

    #[test]
    fn test_backspace_removes_previous_char() {
        let next = edit(&FormatterState::at_end("01-01-2"), nav(NavigationKey::Backspace));
        assert_eq!(next, FormatterState::new("01-01-", 6));
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let state = FormatterState::new("01", 0);
        assert_eq!(edit(&state, nav(NavigationKey::Backspace)), state);
    }

    #[test]
    fn test_delete_removes_char_under_cursor() {
        let next = edit(&FormatterState::new("01-01", 0), nav(NavigationKey::Delete));
        assert_eq!(next, FormatterState::new("1-01", 0));
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let state = FormatterState::at_end("01-01");
        assert_eq!(edit(&state, nav(NavigationKey::Delete)), state);
    }

    #[test]
    fn test_arrows_move_within_bounds() {
        let state = FormatterState::new("01", 1);
        assert_eq!(edit(&state, nav(NavigationKey::Left)).cursor, 0);
        assert_eq!(edit(&state, nav(NavigationKey::Right)).cursor, 2);

        let start = FormatterState::new("01", 0);
        assert_eq!(edit(&start, nav(NavigationKey::Left)).cursor, 0);

        let end = FormatterState::at_end("01");
        assert_eq!(edit(&end, nav(NavigationKey::Right)).cursor, 2);
    }

    #[test]
    fn test_tab_leaves_field_unchanged() {
        let state = FormatterState::at_end("01-0");
        assert_eq!(edit(&state, nav(NavigationKey::Tab)), state);
    }

    #[test]
    fn test_hyphen_steps_over_existing_hyphen() {
        let next = edit(&FormatterState::new("01-0", 2), Keystroke::Char('-'));
        assert_eq!(next, FormatterState::new("01-0", 3));
    }

    #[test]
    fn test_hyphen_dropped_elsewhere() {
        let state = FormatterState::at_end("01");
        assert_eq!(edit(&state, Keystroke::Char('-')), state);
    }

    #[test]
    fn test_retyping_after_backspace() {
        let mut state = FormatterState::at_end("01-01-20");
        state = edit(&state, nav(NavigationKey::Backspace));
        state = edit(&state, nav(NavigationKey::Backspace));
        assert_eq!(state, FormatterState::new("01-01-", 6));

        state = edit(&state, Keystroke::Char('2'));
        state = edit(&state, Keystroke::Char('1'));
        assert_eq!(state, FormatterState::new("01-01-21", 8));
    }
}
