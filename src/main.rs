use std::path::PathBuf;

use airmood::{DashboardReport, EngineConfig, LocationSnapshot, logging};
use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render an air quality dashboard report from a location snapshot",
    long_about = None
)]
struct Cli {
    /// Location snapshot JSON file
    #[arg(value_hint = ValueHint::FilePath)]
    snapshot: PathBuf,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = EngineConfig::load_from_path(cli.config)?;
    logging::init(&config.logging)?;

    let body = std::fs::read_to_string(&cli.snapshot)
        .with_context(|| format!("Failed to read snapshot {}", cli.snapshot.display()))?;
    let snapshot: LocationSnapshot = serde_json::from_str(&body)
        .with_context(|| format!("Failed to parse snapshot {}", cli.snapshot.display()))?;

    let report = match DashboardReport::build(&snapshot, &config) {
        Ok(report) => report,
        Err(e) => {
            error!("Cannot build report: {}", e.user_message());
            return Err(e.into());
        }
    };
    match &report.current {
        Some(current) => info!("Report ready: AQI {}", current.aqi),
        None => info!("Report ready without current conditions"),
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
