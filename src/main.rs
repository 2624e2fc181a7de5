use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use stormdist::{StormConfig, StormTracker, logging};

#[derive(Parser, Debug)]
#[command(name = "stormdist", version)]
#[command(about = "Distance from a point to the storm in the current NHC hurricane advisory", long_about = None)]
struct Cli {
    /// Latitude of the point of interest, decimal degrees
    #[arg(long, allow_hyphen_values = true, required_unless_present = "summary")]
    lat: Option<f64>,

    /// Longitude of the point of interest, decimal degrees (negative for west)
    #[arg(long, allow_hyphen_values = true, required_unless_present = "summary")]
    lon: Option<f64>,

    /// Advisory URL, overriding the configured one
    #[arg(long)]
    url: Option<String>,

    /// Print the advisory summary instead of a distance
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = StormConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    if let Some(url) = cli.url {
        config.advisory.url = url;
        config.validate().context("Invalid --url")?;
    }

    logging::init(&config.logging, cli.verbose);

    let tracker = StormTracker::from_config(&config.advisory)
        .context("Failed to create advisory client")?;

    if cli.summary {
        let summary = tracker
            .summary()
            .with_context(|| format!("Failed to read advisory from {}", tracker.origin()))?;
        println!("{summary}");
        return Ok(());
    }

    let (Some(lat), Some(lon)) = (cli.lat, cli.lon) else {
        anyhow::bail!("--lat and --lon are required");
    };

    let report = tracker
        .report(lat, lon)
        .with_context(|| format!("Failed to locate storm from {}", tracker.origin()))?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        println!("Storm location: {}", report.storm);
        println!("Distance: {:.0} miles", report.distance_miles);
    }

    Ok(())
}
