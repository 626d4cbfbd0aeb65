//! Display and JSON rendering of calculation results.
//!
//! Amounts are rounded to cents here and nowhere else.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{CalculationRequest, CalculationResult};
use crate::utils::currency::{format_currency, format_plain};
use crate::utils::date_range::parse_date;

/// Result lines as shown under the form.
///
/// ```text
/// Days: 182
/// Interest: $29.92
/// Total Payback Amount: $1,029.92
/// ```
pub fn result_lines(result: &CalculationResult) -> [String; 3] {
    [
        format!("Days: {}", result.days),
        format!("Interest: {}", format_currency(result.interest)),
        format!("Total Payback Amount: {}", format_currency(result.total)),
    ]
}

/// Machine-readable calculation report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub days: u32,
    pub interest: String,
    pub total: String,
    /// Resolved start date, showing how the two-digit year was read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Report {
    pub fn new(request: &CalculationRequest, result: &CalculationResult) -> Self {
        Self {
            days: result.days,
            interest: format_plain(result.interest),
            total: format_plain(result.total),
            start_date: parse_date(&request.start_date).ok(),
            end_date: parse_date(&request.end_date).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> (CalculationRequest, CalculationResult) {
        (
            CalculationRequest::new(1000.0, 6.0, "01-01-20", "07-01-20"),
            CalculationResult {
                days: 182,
                interest: 29.917_808_219_178_08,
                total: 1029.917_808_219_178,
            },
        )
    }

    #[test]
    fn test_result_lines() {
        let (_, result) = reference();
        assert_eq!(
            result_lines(&result),
            [
                "Days: 182".to_string(),
                "Interest: $29.92".to_string(),
                "Total Payback Amount: $1,029.92".to_string(),
            ]
        );
    }

    #[test]
    fn test_report_json() {
        let (request, result) = reference();
        let json = serde_json::to_value(Report::new(&request, &result)).unwrap();

        assert_eq!(json["days"], 182);
        assert_eq!(json["interest"], "29.92");
        assert_eq!(json["total"], "1029.92");
        assert_eq!(json["start_date"], "2020-01-01");
        assert_eq!(json["end_date"], "2020-07-01");
    }
}
