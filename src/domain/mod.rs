//! Domain layer containing calculation entities and the day-count contract.
//!
//! # Architecture
//!
//! - [`entities`] - Request, result and date-field value types
//! - [`day_counter`] - Trait for counting days between two date strings
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on the presentation layer
//! - The day-count trait is implemented in [`crate::utils::date_range`]
//! - Business rules live in [`crate::application::services`]

pub mod day_counter;
pub mod entities;

pub use day_counter::DayCounter;

#[cfg(test)]
pub use day_counter::MockDayCounter;
