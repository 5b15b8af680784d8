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

//! Per-contract totals and trade deduplication

use smartp_types::{ContractAggregate, Trade, TradeKey};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Result of a single pass over the raw trade stream
///
/// `aggregates` covers every input trade, duplicates included. `unique_trades`
/// holds one trade per `(contract, price, quantity)`; the first one seen wins.
#[derive(Debug, Default)]
pub struct TradeAggregation {
    aggregates: HashMap<String, ContractAggregate>,
    unique_trades: Vec<Trade>,
    seen: HashSet<TradeKey>,
    raw_count: usize,
}

impl TradeAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_trades(trades: impl IntoIterator<Item = Trade>) -> Self {
        let mut aggregation = Self::new();
        let mut duplicates = 0_usize;
        for trade in trades {
            if !aggregation.push(trade) {
                duplicates += 1;
            }
        }
        debug!(
            "Aggregated {} trades ({} duplicates) into {} unique rows across {} contracts",
            aggregation.raw_count,
            duplicates,
            aggregation.unique_trades.len(),
            aggregation.aggregates.len()
        );
        aggregation
    }

    /// Returns false when the trade duplicates one already kept
    pub fn push(&mut self, trade: Trade) -> bool {
        self.raw_count += 1;
        self.aggregates
            .entry(trade.contract.clone())
            .or_default()
            .add(&trade);

        if !self.seen.insert(trade.key()) {
            return false;
        }
        self.unique_trades.push(trade);
        true
    }

    pub fn unique_trades(&self) -> &[Trade] {
        &self.unique_trades
    }

    pub fn aggregate(&self, contract: &str) -> Option<&ContractAggregate> {
        self.aggregates.get(contract)
    }

    pub fn aggregates(&self) -> &HashMap<String, ContractAggregate> {
        &self.aggregates
    }

    /// Number of trades pushed, duplicates included
    pub fn raw_count(&self) -> usize {
        self.raw_count
    }
}
