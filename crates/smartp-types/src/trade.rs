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

/// A single intraday trade as published by the transparency API
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    /// Opaque identifier from the source
    pub id: i64,

    /// Trade timestamp, kept exactly as the API sent it
    pub date: String,

    /// Delivery contract identifier (e.g. "PH24071312" for an hourly slot)
    pub contract: String,

    /// Unit price
    pub price: f64,

    /// Raw traded quantity, before scaling
    pub quantity: i64,
}

impl Trade {
    /// Identity used for deduplication. `id` and `date` do not take part.
    pub fn key(&self) -> TradeKey {
        TradeKey {
            contract: self.contract.clone(),
            price_bits: self.price.to_bits(),
            quantity: self.quantity,
        }
    }

    /// `(price * quantity) / 10`
    pub fn scaled_value(&self) -> f64 {
        (self.price * self.quantity as f64) / crate::QUANTITY_SCALE
    }
}

/// Composite key over `(contract, price, quantity)`
///
/// The price is compared by bit pattern so the key can implement `Eq` and
/// `Hash`. `0.0` and `-0.0` are therefore distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TradeKey {
    pub contract: String,
    /// `f64::to_bits` of the price
    pub price_bits: u64,
    pub quantity: i64,
}
