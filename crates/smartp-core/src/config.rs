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

//! Configuration for a single report run

use crate::error::{ReportError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smartp_types::DateRange;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "https://seffaflik.epias.com.tr/transparency/service";

/// Settings for one report run, loaded from TOML and overridden by the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Base URL of the transparency service, without the trailing endpoint path
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Trading days to request
    #[serde(default = "default_date_range")]
    pub date_range: DateRange,

    /// Where the workbook is written; an existing file is replaced
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Labels written above the two total columns
    #[serde(default)]
    pub header_labels: HeaderLabels,
}

/// Labelling of the two total columns
///
/// Column 5 always holds the amount total and column 6 the value total.
/// `Legacy` keeps the historical labels, which name them the other way round.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLabels {
    #[default]
    Legacy,
    Matched,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_owned()
}

fn default_date_range() -> DateRange {
    // 2024-07-13 is always a valid calendar date
    let day = NaiveDate::from_ymd_opt(2024, 7, 13).unwrap_or_default();
    DateRange::single_day(day)
}

fn default_output_path() -> PathBuf {
    PathBuf::from("data.xlsx")
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            date_range: default_date_range(),
            output_path: default_output_path(),
            header_labels: HeaderLabels::default(),
        }
    }
}

impl ReportConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ReportError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ReportError::Config(format!("Failed to parse config TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(ReportError::Config("api_base_url must be set".to_owned()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ReportError::Config("output_path must be set".to_owned()));
        }
        self.date_range.validate()?;
        Ok(())
    }
}
