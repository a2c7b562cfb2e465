#![deny(unsafe_code)]

//! taskest CLI — task decomposition and effort estimation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use taskest_config::{AppConfig, OUTPUT_FORMATS};
use taskest_core::{Profile, estimate, render_markdown};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// taskest — split a work description into tasks and estimate the effort.
#[derive(Parser)]
#[command(name = "taskest", version, about, long_about = None)]
struct Cli {
    /// Work description to estimate (quote it).
    text: String,

    /// Output format.
    #[arg(long, value_parser = OUTPUT_FORMATS)]
    format: Option<String>,

    /// Estimation profile.
    #[arg(long, value_parser = Profile::NAMES)]
    profile: Option<String>,

    /// Detect QA activities and report case counts, artifacts, and QA hours.
    #[arg(long)]
    qa: bool,

    /// Add QA hours to the grand total.
    #[arg(long)]
    qa_include: bool,

    /// Safety factor for core work (e.g. 1.2 = +20%).
    #[arg(long, value_parser = parse_buffer)]
    buffer: Option<f64>,

    /// Safety factor for QA work. Defaults to --buffer.
    #[arg(long, value_parser = parse_buffer)]
    qa_buffer: Option<f64>,

    /// Apply the buffer to each task row too (default: totals only).
    #[arg(long)]
    buffer_per_task: bool,

    /// Path to a TOML file with default settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Overlay command-line flags onto the loaded configuration.
    ///
    /// Flags given on the command line win; boolean toggles only turn
    /// features on.
    fn apply_to(&self, config: &mut AppConfig) {
        let estimate = &mut config.estimate;
        if let Some(profile) = &self.profile {
            estimate.profile = profile.clone();
        }
        estimate.with_qa |= self.qa;
        estimate.qa_include |= self.qa_include;
        if let Some(buffer) = self.buffer {
            estimate.buffer = buffer;
        }
        if let Some(qa_buffer) = self.qa_buffer {
            estimate.qa_buffer = Some(qa_buffer);
        }
        estimate.buffer_per_task |= self.buffer_per_task;

        if let Some(format) = &self.format {
            config.output.format = format.clone();
        }
    }
}

fn parse_buffer(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("invalid number {s:?}: {e}"))?;
    taskest_config::validate_buffer("buffer", value).map_err(|e| e.to_string())?;
    Ok(value)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).await?;
    cli.apply_to(&mut config);

    // Logs go to stderr so stdout carries only the report
    let filter = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = config.estimate_options();
    debug!(?options, format = %config.output.format, "Resolved options");

    let result = estimate(&cli.text, &options);
    info!(
        tasks = result.items.len(),
        grand_total_hours = result.totals.grand_total_hours,
        "Estimated"
    );

    match config.output.format.as_str() {
        "json" => println!("{}", result.to_json().context("failed to serialize result")?),
        _ => println!("{}", render_markdown(&result)),
    }

    Ok(())
}

async fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path)
            .await
            .with_context(|| format!("failed to load config from '{}'", path.display())),
        None => Ok(AppConfig::default()),
    }
}
