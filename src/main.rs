//! Health Fit Tracker
//!
//! A BMI calculator for the terminal, with metric and imperial units.

use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so output never interferes with the TUI or stdout results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("healthfit=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    healthfit::app::run()?;

    Ok(())
}
