//! Date field state and key events.

/// Keys that move the cursor or edit text natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    Left,
    Right,
    Tab,
    Backspace,
    Delete,
}

/// How the date formatter treats a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Navigation,
    Digit,
    Other,
}

/// A single key event delivered to a date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Navigation(NavigationKey),
    Char(char),
}

impl Keystroke {
    pub fn action(&self) -> KeyAction {
        match self {
            Keystroke::Navigation(_) => KeyAction::Navigation,
            Keystroke::Char(c) if c.is_ascii_digit() => KeyAction::Digit,
            Keystroke::Char(_) => KeyAction::Other,
        }
    }
}

/// Content of a date field and the cursor position inside it.
///
/// The cursor is a character offset in `0..=text.len()`. Date fields only
/// ever hold ASCII digits and hyphens, so byte and character offsets agree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatterState {
    pub text: String,
    pub cursor: usize,
}

impl FormatterState {
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        let text = text.into();
        let cursor = cursor.min(text.len());
        Self { text, cursor }
    }

    /// State with the cursor placed after the last character.
    pub fn at_end(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn digit_count(&self) -> usize {
        self.text.chars().filter(char::is_ascii_digit).count()
    }

    pub fn hyphen_count(&self) -> usize {
        self.text.chars().filter(|&c| c == '-').count()
    }
}
