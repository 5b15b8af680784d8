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

use crate::aggregator::TradeAggregation;
use crate::config::ReportConfig;
use crate::epias::EpiasClient;
use crate::error::Result;
use crate::parser::parse_trade_history;
use crate::report::{ReportSummary, write_report};
use tracing::info;

/// Fetch, parse, aggregate and write one report
///
/// Nothing is written unless every earlier stage succeeded.
pub fn generate_report(config: &ReportConfig) -> Result<ReportSummary> {
    config.validate()?;

    let client = EpiasClient::new(&config.api_base_url)?;
    let body = client.fetch_trade_history(&config.date_range)?;

    let trades = parse_trade_history(&body)?;
    info!(
        "Fetched {} trade records for {}",
        trades.len(),
        config.date_range
    );

    let aggregation = TradeAggregation::from_trades(trades);
    info!(
        "{} unique trades across {} contracts",
        aggregation.unique_trades().len(),
        aggregation.aggregates().len()
    );

    write_report(&aggregation, config.header_labels, &config.output_path)
}
