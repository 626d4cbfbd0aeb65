//! Error types for date parsing, input validation and form conversion.
//!
//! - [`DateParseError`] - a date string is not `MM-DD-YY` or names an impossible date
//! - [`InputError`] - a calculation rule was violated, tagged with [`InputErrorKind`]
//! - [`AppError`] - everything the presentation layer can show to the user

use serde::Serialize;
use serde_json::{Value, json};

/// Message shown when amount or rate text cannot be converted to a number.
pub const CONVERSION_MESSAGE: &str =
    "Please ensure all values are valid and dates are in MM-DD-YY format.";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Failure to parse a `MM-DD-YY` date string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    #[error("'{input}' does not match the MM-DD-YY format")]
    Format { input: String },

    #[error("'{input}' is not a valid calendar date")]
    InvalidDate { input: String },
}

impl DateParseError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            DateParseError::Format { input } | DateParseError::InvalidDate { input } => input,
        }
    }
}

/// Which validation rule rejected a calculation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputErrorKind {
    NonPositiveAmount,
    RateOutOfRange,
    MalformedDate,
    EndBeforeStart,
}

impl InputErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            InputErrorKind::NonPositiveAmount => "non_positive_amount",
            InputErrorKind::RateOutOfRange => "rate_out_of_range",
            InputErrorKind::MalformedDate => "malformed_date",
            InputErrorKind::EndBeforeStart => "end_before_start",
        }
    }
}

/// A rejected calculation request.
///
/// The message names the field the user has to fix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct InputError {
    pub kind: InputErrorKind,
    pub message: String,
}

impl InputError {
    pub fn new(kind: InputErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn non_positive_amount() -> Self {
        Self::new(
            InputErrorKind::NonPositiveAmount,
            "Warrant amount must be greater than zero.",
        )
    }

    pub fn rate_out_of_range() -> Self {
        Self::new(
            InputErrorKind::RateOutOfRange,
            "Interest rate must be between 0 and 20 percent.",
        )
    }

    pub fn malformed_date(field: &str, source: &DateParseError) -> Self {
        Self::new(
            InputErrorKind::MalformedDate,
            format!("{field} must be a valid date in MM-DD-YY format ({source})."),
        )
    }

    pub fn end_before_start() -> Self {
        Self::new(
            InputErrorKind::EndBeforeStart,
            "End date must be after start date.",
        )
    }
}

/// Errors surfaced to the user by the form and the CLI.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),

    /// Free-text amount or rate could not be converted to a number.
    #[error("{}", CONVERSION_MESSAGE)]
    Conversion { field: &'static str, value: String },
}

impl AppError {
    pub fn conversion(field: &'static str, value: impl Into<String>) -> Self {
        Self::Conversion {
            field,
            value: value.into(),
        }
    }

    /// Title for the error dialog.
    pub fn title(&self) -> &'static str {
        "Input Error"
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Input(e) => e.kind.code(),
            AppError::Conversion { .. } => "conversion_error",
        }
    }

    /// Renders the error as `{"error": {"code", "message", "details"}}`.
    pub fn to_json(&self) -> Value {
        let details = match self {
            AppError::Input(e) => json!({ "kind": e.kind }),
            AppError::Conversion { field, value } => json!({ "field": field, "value": value }),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code: self.code(),
                message: self.to_string(),
                details,
            },
        };

        serde_json::to_value(body).unwrap_or_else(|_| json!({}))
    }
}
