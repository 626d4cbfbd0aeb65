//! Core domain entities for a warrant calculation.
//!
//! All entities are transient values: a calculation is a single stateless
//! request/response and nothing is stored between requests.
//!
//! # Entity Types
//!
//! - [`CalculationRequest`] - principal, rate and the two date strings
//! - [`CalculationResult`] - elapsed days, interest and total payback
//! - [`FormatterState`] - text and cursor of a date field being typed into
//! - [`Keystroke`] - a single key event delivered to a date field

pub mod calculation;
pub mod date_entry;

pub use calculation::{CalculationRequest, CalculationResult};
pub use date_entry::{FormatterState, KeyAction, Keystroke, NavigationKey};
