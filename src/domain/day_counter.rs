//! Day-count trait used by the interest service.

use crate::error::DateParseError;

/// Counts calendar days between two `MM-DD-YY` date strings.
///
/// # Implementations
///
/// - [`crate::utils::date_range::CalendarDayCounter`] - calendar subtraction via `chrono`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait DayCounter: Send + Sync {
    /// Returns `end - start` in calendar days.
    ///
    /// The result is signed; rejecting an inverted range is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`DateParseError`] for the first string that is malformed or
    /// names an impossible date, checking `start` before `end`.
    fn elapsed_days(&self, start: &str, end: &str) -> Result<i64, DateParseError>;
}
