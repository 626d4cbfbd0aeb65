//! Pure helpers for dates, date entry and currency display.
//!
//! - [`date_range`] - `MM-DD-YY` parsing and calendar-day differences
//! - [`date_formatter`] - Live formatting of date fields as digits are typed
//! - [`currency`] - Cents rounding and thousands separators for display

pub mod currency;
pub mod date_formatter;
pub mod date_range;

pub use currency::format_currency;
pub use date_formatter::apply_keystroke;
pub use date_range::{CalendarDayCounter, elapsed_days, parse_date};
