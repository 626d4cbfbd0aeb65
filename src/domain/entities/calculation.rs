//! Calculation request and result entities.

use serde::Serialize;

/// Input to a single warrant calculation.
///
/// Amounts are already numeric; converting free text is the caller's job
/// (see [`crate::presentation::form::WarrantForm`]).
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub principal: f64,
    pub rate_percent: f64,
    pub start_date: String,
    pub end_date: String,
}

impl CalculationRequest {
    pub fn new(
        principal: f64,
        rate_percent: f64,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            principal,
            rate_percent,
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}

/// Outcome of a successful calculation.
///
/// Values are unrounded; rounding to cents happens only when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    pub days: u32,
    pub interest: f64,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_new() {
        let request = CalculationRequest::new(1000.0, 6.0, "01-01-20", "07-01-20");
        assert_eq!(request.principal, 1000.0);
        assert_eq!(request.rate_percent, 6.0);
        assert_eq!(request.start_date, "01-01-20");
        assert_eq!(request.end_date, "07-01-20");
    }
}
