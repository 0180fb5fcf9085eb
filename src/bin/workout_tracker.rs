// ABOUTME: Workout tracker CLI - prints a summary line for each sensor package
// ABOUTME: Reads packages from a JSON file or falls back to the built-in samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Summarize the built-in sample packages
//! workout-tracker
//!
//! # Summarize packages from a file, as JSON
//! workout-tracker --input packages.json --format json
//!
//! # Russian labels with debug logging on stderr
//! workout-tracker --language ru -v
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{error, info};

use workout_tracker::config::{LogLevel, TrackerConfig};
use workout_tracker::formatters::{format_summary, MessageLanguage, OutputFormat};
use workout_tracker::logging::LoggingConfig;
use workout_tracker::packages::{
    load_packages, process_package, rejection_context, sample_packages,
};

#[derive(Parser)]
#[command(
    name = "workout-tracker",
    version,
    about = "Workout statistics from fitness sensor packages",
    long_about = "Computes distance, mean speed, and calories burned for swimming (SWM), \
                  running (RUN), and sports walking (WLK) sensor packages."
)]
struct Cli {
    /// JSON file with sensor packages (defaults to the built-in samples)
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Output format: text or json (overrides `WORKOUT_OUTPUT_FORMAT`)
    #[arg(long, short = 'f')]
    format: Option<String>,

    /// Message language: en or ru (overrides `WORKOUT_LANGUAGE`)
    #[arg(long, short = 'l')]
    language: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TrackerConfig::from_env();
    if let Some(format) = cli.format.as_deref() {
        config.output_format = OutputFormat::from_str_param(format);
    }
    if let Some(language) = cli.language.as_deref() {
        config.language = MessageLanguage::from_str_param(language);
    }

    let logging = LoggingConfig::from_tracker_config(&config);
    let logging = if cli.verbose {
        logging.with_level(LogLevel::Debug)
    } else {
        logging
    };
    logging.init()?;

    let packages = match &cli.input {
        Some(path) => load_packages(path)
            .with_context(|| format!("Failed to load packages from {}", path.display()))?,
        None => sample_packages(),
    };
    info!(count = packages.len(), format = %config.output_format, "Processing sensor packages");

    let mut stdout = io::stdout().lock();
    for (index, package) in packages.iter().enumerate() {
        let summary = process_package(package).map_err(|e| {
            error!(package = index, error.code = %e.code(), "Sensor package rejected");
            let context = rejection_context(index, package, &e);
            anyhow::Error::new(e).context(context)
        })?;
        let line = format_summary(&summary, config.output_format, config.language)?;
        writeln!(stdout, "{line}")?;
    }

    Ok(())
}
