//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any screen
//! is shown. A `.env` file in the working directory is honoured.
//!
//! ## Optional Variables
//!
//! - `WARRANT_ISSUER` - Heading on the main menu (default: `Libby Drainage District`)
//! - `DEFAULT_RATE` - Interest rate prefilled on the form (default: `6.00`)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! Logs are written to stderr so they never mix with the interactive screen.

use anyhow::Result;
use std::env;

use crate::application::services::interest_service::MAX_RATE_PERCENT;
use crate::presentation::form::{DEFAULT_RATE_TEXT, parse_number};

/// Issuer shown above the calculator title.
pub const DEFAULT_ISSUER: &str = "Libby Drainage District";

/// Calculator configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub issuer: String,
    /// Rate text prefilled on a new form. Kept as typed so `6.00` stays `6.00`.
    pub default_rate: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            issuer: DEFAULT_ISSUER.to_string(),
            default_rate: DEFAULT_RATE_TEXT.to_string(),
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let issuer = env::var("WARRANT_ISSUER").unwrap_or(defaults.issuer);
        let default_rate = env::var("DEFAULT_RATE").unwrap_or(defaults.default_rate);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Self {
            issuer,
            default_rate,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `issuer` is blank
    /// - `default_rate` is not a number in `(0, 20]`
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.issuer.trim().is_empty() {
            anyhow::bail!("WARRANT_ISSUER must not be empty");
        }

        let rate = parse_number("DEFAULT_RATE", &self.default_rate).map_err(|_| {
            anyhow::anyhow!(
                "DEFAULT_RATE must be a number, got '{}'",
                self.default_rate
            )
        })?;

        if rate <= 0.0 || rate > MAX_RATE_PERCENT {
            anyhow::bail!(
                "DEFAULT_RATE must be greater than 0 and at most {}, got {}",
                MAX_RATE_PERCENT,
                rate
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Issuer: {}", self.issuer);
        tracing::info!("  Default rate: {}%", self.default_rate);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
