//! Business logic services for the application layer.

pub mod interest_service;

pub use interest_service::{InterestService, compute};
