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

//! Decoding of the trade history response

use crate::error::Result;
use serde::Deserialize;
use smartp_types::Trade;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct TradeHistoryResponse {
    body: TradeHistoryBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TradeHistoryBody {
    intra_day_trade_history_list: Vec<TradeRecord>,
}

#[derive(Debug, Deserialize)]
struct TradeRecord {
    id: i64,
    date: String,
    // The API misspells this key
    #[serde(rename = "conract")]
    contract: String,
    price: f64,
    quantity: i64,
}

impl From<TradeRecord> for Trade {
    fn from(record: TradeRecord) -> Self {
        Self {
            id: record.id,
            date: record.date,
            contract: record.contract,
            price: record.price,
            quantity: record.quantity,
        }
    }
}

/// Parse the body at `body.intraDayTradeHistoryList` into trades, in source order
pub fn parse_trade_history(json: &str) -> Result<Vec<Trade>> {
    let response: TradeHistoryResponse = serde_json::from_str(json)?;
    let trades: Vec<Trade> = response
        .body
        .intra_day_trade_history_list
        .into_iter()
        .map(Trade::from)
        .collect();

    debug!("Parsed {} trade records", trades.len());
    Ok(trades)
}
