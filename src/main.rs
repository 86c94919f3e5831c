use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use ems_stats::{LayoutMode, MonthlyReport, StatsConfig, load_interventions};
use log::info;

/// Monthly quality statistics for ambulance dispatch exports
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Semicolon-delimited monthly export
    input: PathBuf,

    /// JSON file overriding category sets and thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read columns at the fixed positions of the January 2026 export
    #[arg(long)]
    positional: bool,

    /// Write the full report as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Minimum records per responder for per-responder ratios
    #[arg(long)]
    min_sample: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => StatsConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => StatsConfig::default(),
    };
    if cli.positional {
        config.layout_mode = LayoutMode::Positional;
    }
    if let Some(min_sample) = cli.min_sample {
        config.min_sample = min_sample;
    }
    config.validate()?;

    let records = load_interventions(&cli.input, config.layout_mode)
        .with_context(|| format!("Failed to load export {}", cli.input.display()))?;
    info!("Loaded {} interventions", records.len());

    let report = MonthlyReport::build(&records, &config);
    println!("{}", report.render_summary());

    if let Some(path) = &cli.json {
        report.write_json(path)?;
    }

    Ok(())
}
