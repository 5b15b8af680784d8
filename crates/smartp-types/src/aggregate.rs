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

use crate::{QUANTITY_SCALE, Trade};

/// Running totals for one delivery contract
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContractAggregate {
    /// Sum of raw quantities over every trade of the contract
    pub total_quantity: i64,

    /// Sum of `quantity / 10` over every trade of the contract
    pub total_scaled_amount: f64,

    /// Sum of `(price * quantity) / 10` over every trade of the contract
    pub total_scaled_value: f64,
}

impl ContractAggregate {
    pub fn add(&mut self, trade: &Trade) {
        self.total_quantity = self.total_quantity.saturating_add(trade.quantity);
        // Derived from the integer sum so offsetting quantities land on exactly zero
        self.total_scaled_amount = self.total_quantity as f64 / QUANTITY_SCALE;
        self.total_scaled_value += trade.scaled_value();
    }

    /// Volume-weighted average price, `None` when the contract traded zero volume
    pub fn weighted_average_price(&self) -> Option<f64> {
        if self.total_quantity == 0 {
            None
        } else {
            Some(self.total_scaled_value / self.total_scaled_amount)
        }
    }
}
