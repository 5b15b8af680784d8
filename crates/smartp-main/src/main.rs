// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of SmartP.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! SmartP - writes the EPİAŞ intraday trade history report for one date range

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use smartp_core::{HeaderLabels, ReportConfig, generate_report};
use smartp_types::DateRange;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "smartp")]
#[command(about = "Download intraday trade history and write the per-contract xlsx report", long_about = None)]
struct Cli {
    /// Optional TOML config file; command line options override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start date for trade history (format: YYYY-MM-DD)
    #[arg(short, long)]
    start_date: Option<NaiveDate>,

    /// End date for trade history (format: YYYY-MM-DD)
    #[arg(short, long)]
    end_date: Option<NaiveDate>,

    /// Output workbook path (an existing file is replaced)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base URL of the transparency service
    #[arg(long)]
    api_base_url: Option<String>,

    /// Label the two total columns after the data they hold
    #[arg(long)]
    matched_headers: bool,
}

impl Cli {
    fn into_config(self) -> Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => ReportConfig::default(),
        };

        match (self.start_date, self.end_date) {
            (None, None) => {}
            // Without a config file a lone date selects that single day
            (Some(day), None) | (None, Some(day)) if self.config.is_none() => {
                config.date_range = DateRange::single_day(day);
            }
            (start, end) => {
                config.date_range = DateRange::new(
                    start.unwrap_or(config.date_range.start),
                    end.unwrap_or(config.date_range.end),
                )
                .context("Invalid date range")?;
            }
        }

        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(url) = self.api_base_url {
            config.api_base_url = url;
        }
        if self.matched_headers {
            config.header_labels = HeaderLabels::Matched;
        }

        Ok(config)
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    info!(
        "Generating intraday trade report for {} into {}",
        config.date_range,
        config.output_path.display()
    );

    let summary = generate_report(&config).context("Failed to generate trade report")?;

    info!(
        "Report written to {}: {} rows, {} contracts",
        config.output_path.display(),
        summary.rows,
        summary.contracts
    );
    if summary.skipped_averages > 0 {
        info!(
            "{} rows have no weighted average (zero traded amount)",
            summary.skipped_averages
        );
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("smartp=info,smartp_core=info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{e:?}");
        std::process::exit(1);
    }
}
