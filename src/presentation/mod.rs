//! Presentation layer: screens, the calculation form and the terminal UI.
//!
//! - [`screen`] - Main menu / calculator form state machine
//! - [`form`] - Raw field text, number conversion and submission
//! - [`date_field`] - Native edits around the live date formatter
//! - [`report`] - Result lines and the JSON report
//! - [`terminal`] - Interactive front end built on `dialoguer` and `console`

pub mod date_field;
pub mod form;
pub mod report;
pub mod screen;
pub mod terminal;

pub use form::WarrantForm;
pub use report::Report;
pub use screen::{Screen, ScreenEvent};
