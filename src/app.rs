//! Top-level application orchestration
//!
//! `src/main.rs` is intentionally tiny; this module parses CLI arguments and
//! dispatches either into the interactive TUI (the default) or a one-shot
//! calculation printed to stdout.

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::bmi::{self, MeasurementError};
use crate::models::{MeasurementInput, UnitSystem};

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid unit system '{0}' (expected metric or imperial)")]
    InvalidUnitSystem(String),

    #[error("cannot compute BMI: {0}")]
    Measurement(#[from] MeasurementError),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Parser)]
#[command(name = "healthfit", version, about = "Calculate your BMI and get personalized health recommendations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Launch the interactive calculator (default)
    Tui,
    /// One-shot calculation printed to stdout
    Calc(CalcArgs),
}

#[derive(Debug, Args)]
struct CalcArgs {
    /// Unit system: metric or imperial
    #[arg(long, default_value = "metric")]
    units: String,

    /// Weight in kg (metric) or lbs (imperial)
    #[arg(long)]
    weight: String,

    /// Height in cm (metric only)
    #[arg(long)]
    height: Option<String>,

    /// Height feet component (imperial only)
    #[arg(long)]
    feet: Option<String>,

    /// Height inches component (imperial only)
    #[arg(long)]
    inches: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Entry point for the `healthfit` binary
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Command::Tui) => crate::tui::run(),
        Some(Command::Calc(args)) => handle_calc(args),
    }
}

fn handle_calc(args: CalcArgs) -> Result<(), AppError> {
    let unit_system = UnitSystem::from_str(&args.units)
        .ok_or_else(|| AppError::InvalidUnitSystem(args.units.clone()))?;

    let input = MeasurementInput {
        unit_system,
        weight: args.weight,
        height: args.height.unwrap_or_default(),
        feet: args.feet.unwrap_or_default(),
        inches: args.inches.unwrap_or_default(),
    };

    // Unlike the form, a one-shot invocation has no prior result to fall
    // back on, so invalid input surfaces as an error here.
    let result = bmi::calculate(&input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("BMI Score: {}", result.format_score());
        println!("Category:  {}", result.category.display_name());
        println!("Recommendation: {}", result.recommendation);
    }

    Ok(())
}
