//! Application layer services implementing the calculation rules.
//!
//! Services consume the domain's [`crate::domain::DayCounter`] trait and
//! provide a validated, tagged-result API for the presentation layer.
//!
//! # Available Services
//!
//! - [`services::interest_service::InterestService`] - Simple-interest calculation

pub mod services;
