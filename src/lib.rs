//! # Warrant Calculator
//!
//! Simple-interest calculator for drainage district warrants, with a
//! terminal form that formats `MM-DD-YY` dates as they are typed.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Calculation entities and the day-count trait
//! - **Application Layer** ([`application`]) - Validation and interest calculation
//! - **Utilities** ([`utils`]) - Date parsing, live date formatting, currency display
//! - **Presentation Layer** ([`presentation`]) - Screens, form handling and terminal UI
//!
//! ## Core Operations
//!
//! - [`utils::date_range::elapsed_days`] - Calendar days between two `MM-DD-YY` dates
//! - [`utils::date_formatter::apply_keystroke`] - Reformat a date field after a keystroke
//! - [`application::services::InterestService::compute`] - Validate and compute interest
//!
//! All three are pure: no I/O, no shared state, no logging.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive calculator
//! cargo run
//!
//! # One-off calculation
//! cargo run -- calc --amount 1000 --rate 6 --start 01-01-20 --end 07-01-20
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;
pub mod utils;

pub use error::{AppError, DateParseError, InputError, InputErrorKind};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{InterestService, compute};
    pub use crate::domain::DayCounter;
    pub use crate::domain::entities::{
        CalculationRequest, CalculationResult, FormatterState, KeyAction, Keystroke,
        NavigationKey,
    };
    pub use crate::error::{AppError, DateParseError, InputError, InputErrorKind};
    pub use crate::presentation::WarrantForm;
    pub use crate::utils::date_formatter::apply_keystroke;
    pub use crate::utils::date_range::{CalendarDayCounter, elapsed_days, parse_date};
}
