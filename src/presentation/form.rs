//! The warrant calculation form.
//!
//! Holds the raw field contents exactly as typed, converts them to a
//! [`CalculationRequest`] and submits it to the [`InterestService`].

use crate::application::services::InterestService;
use crate::domain::DayCounter;
use crate::domain::entities::{CalculationRequest, CalculationResult, FormatterState};
use crate::error::AppError;

pub const AMOUNT_LABEL: &str = "Warrant Amount ($)";
pub const RATE_LABEL: &str = "Interest Rate (%)";
pub const START_DATE_LABEL: &str = "Start Date (MM-DD-YY)";
pub const END_DATE_LABEL: &str = "End Date (MM-DD-YY)";

/// Rate text prefilled when the form opens.
pub const DEFAULT_RATE_TEXT: &str = "6.00";

/// Field contents of the calculator form.
///
/// A failed submission leaves every field as it was so the user can correct it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarrantForm {
    pub amount: String,
    pub rate: String,
    pub start_date: FormatterState,
    pub end_date: FormatterState,
}

impl Default for WarrantForm {
    fn default() -> Self {
        Self::new(DEFAULT_RATE_TEXT)
    }
}

impl WarrantForm {
    /// Creates an empty form with `default_rate` prefilled.
    pub fn new(default_rate: impl Into<String>) -> Self {
        Self {
            amount: String::new(),
            rate: default_rate.into(),
            start_date: FormatterState::default(),
            end_date: FormatterState::default(),
        }
    }

    /// Converts the field text into a request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conversion`] if the amount or rate is not a finite
    /// number. Date text is passed through untouched and checked by the
    /// service.
    pub fn to_request(&self) -> Result<CalculationRequest, AppError> {
        let principal = parse_number("Warrant amount", &self.amount)?;
        let rate_percent = parse_number("Interest rate", &self.rate)?;

        Ok(CalculationRequest::new(
            principal,
            rate_percent,
            self.start_date.text.clone(),
            self.end_date.text.clone(),
        ))
    }

    /// Converts the form and runs the calculation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conversion`] for unreadable numbers and
    /// [`AppError::Input`] when a calculation rule rejects the request.
    pub fn submit<C: DayCounter>(
        &self,
        service: &InterestService<C>,
    ) -> Result<CalculationResult, AppError> {
        let request = self.to_request()?;
        Ok(service.compute(&request)?)
    }
}

/// Parses free-form decimal text such as `" 1500.25 "` or `"6"`.
pub fn parse_number(field: &'static str, text: &str) -> Result<f64, AppError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::conversion(field, text))
}
