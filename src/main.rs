//! Command-line entry point for the warrant calculator.
//!
//! # Usage
//!
//! ```bash
//! # Interactive calculator (default)
//! warrant-calculator
//!
//! # Single calculation
//! warrant-calculator calc --amount 1000 --rate 6.00 --start 01-01-20 --end 07-01-20
//!
//! # Same, as JSON
//! warrant-calculator calc --amount 1000 --start 01-01-20 --end 07-01-20 --json
//!
//! # Days between two dates
//! warrant-calculator days --start 01-01-20 --end 07-01-20
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use warrant_calculator::application::services::InterestService;
use warrant_calculator::config::{self, Config};
use warrant_calculator::domain::entities::FormatterState;
use warrant_calculator::presentation::report::{Report, result_lines};
use warrant_calculator::presentation::{WarrantForm, terminal};
use warrant_calculator::utils::date_range::elapsed_days;

/// Simple-interest calculator for drainage district warrants.
#[derive(Parser)]
#[command(name = "warrant-calculator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive calculator (default)
    Interactive,

    /// Compute interest for one warrant
    Calc {
        /// Warrant amount in dollars
        #[arg(short, long)]
        amount: String,

        /// Annual interest rate in percent (defaults to DEFAULT_RATE)
        #[arg(short, long)]
        rate: Option<String>,

        /// Start date, MM-DD-YY
        #[arg(short, long)]
        start: String,

        /// End date, MM-DD-YY
        #[arg(short, long)]
        end: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count calendar days between two dates
    Days {
        /// Start date, MM-DD-YY
        #[arg(short, long)]
        start: String,

        /// End date, MM-DD-YY
        #[arg(short, long)]
        end: String,
    },
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            terminal::run(config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Calc {
            amount,
            rate,
            start,
            end,
            json,
        } => Ok(calc(&config, amount, rate, start, end, json)),
        Commands::Days { start, end } => Ok(days(&start, &end)),
    }
}

/// Initializes the global subscriber, writing to stderr.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Runs one calculation from command-line arguments.
fn calc(
    config: &Config,
    amount: String,
    rate: Option<String>,
    start: String,
    end: String,
    json: bool,
) -> ExitCode {
    let form = WarrantForm {
        amount,
        rate: rate.unwrap_or_else(|| config.default_rate.clone()),
        start_date: FormatterState::at_end(start),
        end_date: FormatterState::at_end(end),
    };

    let service = InterestService::calendar();
    let outcome = form.to_request().and_then(|request| {
        let result = service.compute(&request)?;
        Ok((result, request))
    });

    match outcome {
        Ok((result, request)) => {
            tracing::info!(days = result.days, "warrant calculated");
            if json {
                let report = Report::new(&request, &result);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).unwrap_or_default()
                );
            } else {
                for line in result_lines(&result) {
                    println!("{}", line.green().bold());
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::warn!(code = e.code(), "calculation rejected: {}", e);
            if json {
                println!("{}", e.to_json());
            } else {
                eprintln!("{} {}", format!("{}:", e.title()).red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}

/// Prints the signed day count between two dates.
fn days(start: &str, end: &str) -> ExitCode {
    match elapsed_days(start, end) {
        Ok(days) => {
            println!("{}", days.to_string().bright_white().bold());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "Input Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
