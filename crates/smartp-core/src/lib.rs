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

//! SmartP - intraday trade history report for the EPİAŞ transparency platform
//!
//! One run downloads the trade history for a date range, totals it per
//! delivery contract and writes a single-sheet xlsx report.

pub mod aggregator;
pub mod config;
pub mod epias;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod report;

pub use aggregator::TradeAggregation;
pub use config::{HeaderLabels, ReportConfig};
pub use epias::EpiasClient;
pub use error::{ReportError, Result};
pub use pipeline::generate_report;
pub use report::{ReportSummary, SHEET_NAME};
