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

use crate::error::{ReportError, Result};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use smartp_types::DateRange;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("smartp/", env!("CARGO_PKG_VERSION"));
const TRADE_HISTORY_PATH: &str = "/market/intra-day-trade-history";

/// Blocking client for the EPİAŞ transparency service
#[derive(Debug)]
pub struct EpiasClient {
    client: Client,
    /// Service root without the endpoint path
    base_url: String,
}

impl EpiasClient {
    /// Build a client for `base_url`; a trailing slash is dropped
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// URL pattern: {base}/market/intra-day-trade-history?endDate={end}&startDate={start}
    pub fn trade_history_url(&self, range: &DateRange) -> String {
        format!(
            "{}{TRADE_HISTORY_PATH}?endDate={}&startDate={}",
            self.base_url,
            range.end.format("%Y-%m-%d"),
            range.start.format("%Y-%m-%d"),
        )
    }

    /// Download the raw intraday trade history body for a date range
    pub fn fetch_trade_history(&self, range: &DateRange) -> Result<String> {
        let url = self.trade_history_url(range);
        info!("Downloading intraday trade history from: {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Failed to read error body".to_owned());
            return Err(ReportError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text()?;
        debug!("Received {} bytes of trade history", body.len());
        Ok(body)
    }
}
