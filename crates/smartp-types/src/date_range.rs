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

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Inclusive range of calendar days requested from the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("end date {end} is before start date {start}")]
pub struct DateRangeError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if end < start {
            return Err(DateRangeError { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn validate(&self) -> Result<(), DateRangeError> {
        Self::new(self.start, self.end).map(|_| ())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reversed_range_rejected() {
        let err = DateRange::new(day(2024, 7, 14), day(2024, 7, 13)).unwrap_err();
        assert_eq!(err.start, day(2024, 7, 14));
        assert!(err.to_string().contains("before start date"));
    }

    #[test]
    fn test_single_day_is_valid() {
        let range = DateRange::single_day(day(2024, 7, 13));
        assert!(range.validate().is_ok());
        assert_eq!(range.to_string(), "2024-07-13..2024-07-13");
    }
}
