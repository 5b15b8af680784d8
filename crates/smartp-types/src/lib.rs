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

pub mod aggregate;
pub mod date_range;
pub mod trade;

// Re-export common types for convenience
pub use aggregate::ContractAggregate;
pub use date_range::{DateRange, DateRangeError};
pub use trade::{Trade, TradeKey};

/// Divisor applied to raw quantities by the transparency API's unit convention
pub const QUANTITY_SCALE: f64 = 10.0;
