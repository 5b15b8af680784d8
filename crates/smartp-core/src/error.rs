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

//! Error types for the report pipeline

use smartp_types::DateRangeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transparency API returned error status {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("invalid trade history response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("report I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    DateRange(#[from] DateRangeError),
}

pub type Result<T> = std::result::Result<T, ReportError>;
