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

//! Spreadsheet report output

use crate::aggregator::TradeAggregation;
use crate::config::HeaderLabels;
use crate::error::Result;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const SHEET_NAME: &str = "Trade Data";

// Column 5 holds the amount total and column 6 the value total,
// while the legacy labels name them the other way round.
const LEGACY_HEADERS: [&str; 8] = [
    "ID",
    "Date",
    "Contract",
    "Price",
    "Quantity",
    "Total Traded Value",
    "Total Traded Amount",
    "Weighted Average Price",
];

const MATCHED_HEADERS: [&str; 8] = [
    "ID",
    "Date",
    "Contract",
    "Price",
    "Quantity",
    "Total Traded Amount",
    "Total Traded Value",
    "Weighted Average Price",
];

const COL_ID: u16 = 0;
const COL_DATE: u16 = 1;
const COL_CONTRACT: u16 = 2;
const COL_PRICE: u16 = 3;
const COL_QUANTITY: u16 = 4;
const COL_TOTAL_AMOUNT: u16 = 5;
const COL_TOTAL_VALUE: u16 = 6;
const COL_WEIGHTED_AVERAGE: u16 = 7;

/// Counts reported after a workbook is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Data rows written, header excluded
    pub rows: usize,
    /// Distinct contracts seen in the raw trade stream
    pub contracts: usize,
    /// Rows whose weighted average cell was left blank because the contract had zero volume
    pub skipped_averages: usize,
}

pub fn header_row(labels: HeaderLabels) -> [&'static str; 8] {
    match labels {
        HeaderLabels::Legacy => LEGACY_HEADERS,
        HeaderLabels::Matched => MATCHED_HEADERS,
    }
}

/// Serialize the report workbook to an in-memory xlsx file
pub fn render_report(
    aggregation: &TradeAggregation,
    labels: HeaderLabels,
) -> Result<(Vec<u8>, ReportSummary)> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, label) in (0_u16..).zip(header_row(labels)) {
        worksheet.write_string_with_format(0, col, label, &header_format)?;
    }

    let mut summary = ReportSummary {
        contracts: aggregation.aggregates().len(),
        ..ReportSummary::default()
    };

    for (idx, trade) in aggregation.unique_trades().iter().enumerate() {
        let row = u32::try_from(idx + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        let totals = aggregation
            .aggregate(&trade.contract)
            .copied()
            .unwrap_or_default();

        worksheet.write_number(row, COL_ID, trade.id as f64)?;
        worksheet.write_string(row, COL_DATE, &trade.date)?;
        worksheet.write_string(row, COL_CONTRACT, &trade.contract)?;
        worksheet.write_number(row, COL_PRICE, trade.price)?;
        worksheet.write_number(row, COL_QUANTITY, trade.quantity as f64)?;
        worksheet.write_number(row, COL_TOTAL_AMOUNT, totals.total_scaled_amount)?;
        worksheet.write_number(row, COL_TOTAL_VALUE, totals.total_scaled_value)?;

        if let Some(average) = totals.weighted_average_price() {
            worksheet.write_number(row, COL_WEIGHTED_AVERAGE, average)?;
        } else {
            warn!(
                "Contract {} has zero traded amount, leaving weighted average blank for trade {}",
                trade.contract, trade.id
            );
            summary.skipped_averages += 1;
        }
        summary.rows += 1;
    }

    worksheet.autofit();

    let bytes = workbook.save_to_buffer()?;
    debug!("Rendered report: {} rows, {} bytes", summary.rows, bytes.len());
    Ok((bytes, summary))
}

/// Write the report to `path`, replacing any existing file
///
/// The workbook is fully rendered before the file system is touched and lands
/// through a temp file rename, so a failed run leaves no partial report.
pub fn write_report(
    aggregation: &TradeAggregation,
    labels: HeaderLabels,
    path: &Path,
) -> Result<ReportSummary> {
    let (bytes, summary) = render_report(aggregation, labels)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = temp_path_for(path);
    let written =
        std::fs::write(&temp_path, &bytes).and_then(|()| std::fs::rename(&temp_path, path));
    if let Err(e) = written {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e.into());
    }

    Ok(summary)
}

/// `data.xlsx` is staged as `data.xlsx.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use calamine::{Data, Reader, Xlsx};
    use smartp_types::Trade;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn trade(id: i64, contract: &str, price: f64, quantity: i64) -> Trade {
        Trade {
            id,
            date: "2024-07-13T10:00:00+03:00".to_owned(),
            contract: contract.to_owned(),
            price,
            quantity,
        }
    }

    fn read_sheet(bytes: Vec<u8>) -> calamine::Range<Data> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        assert_eq!(workbook.sheet_names(), vec![SHEET_NAME.to_owned()]);
        workbook.worksheet_range(SHEET_NAME).unwrap()
    }

    fn float_at(range: &calamine::Range<Data>, row: u32, col: u32) -> f64 {
        match range.get_value((row, col)) {
            Some(Data::Float(f)) => *f,
            Some(Data::Int(i)) => *i as f64,
            other => panic!("expected number at ({row}, {col}), got {other:?}"),
        }
    }

    #[test]
    fn test_header_and_rows() {
        let aggregation = TradeAggregation::from_trades(vec![
            trade(1, "PH24071312", 100.0, 20),
            trade(2, "PH24071312", 200.0, 20),
            trade(3, "PH24071312", 200.0, 20),
        ]);

        let (bytes, summary) = render_report(&aggregation, HeaderLabels::Legacy).unwrap();
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.contracts, 1);
        assert_eq!(summary.skipped_averages, 0);

        let range = read_sheet(bytes);
        assert_eq!(range.height(), 3);

        let header: Vec<String> = (0..8)
            .map(|col| range.get_value((0, col)).unwrap().to_string())
            .collect();
        assert_eq!(header, LEGACY_HEADERS);

        assert_eq!(float_at(&range, 1, 0), 1.0);
        assert_eq!(
            range.get_value((1, 2)),
            Some(&Data::String("PH24071312".to_owned()))
        );
        // Totals include the duplicate third trade
        assert!((float_at(&range, 1, 5) - 6.0).abs() < 1e-9);
        assert!((float_at(&range, 1, 6) - 1000.0).abs() < 1e-9);
        assert!((float_at(&range, 1, 7) - 1000.0 / 6.0).abs() < 1e-9);
        assert_eq!(float_at(&range, 2, 0), 2.0);
    }

    #[test]
    fn test_matched_labels_keep_column_contents() {
        let aggregation = TradeAggregation::from_trades(vec![trade(1, "PH", 100.0, 20)]);

        let (bytes, _) = render_report(&aggregation, HeaderLabels::Matched).unwrap();
        let range = read_sheet(bytes);

        assert_eq!(
            range.get_value((0, 5)),
            Some(&Data::String("Total Traded Amount".to_owned()))
        );
        assert!((float_at(&range, 1, 5) - 2.0).abs() < 1e-9);
        assert!((float_at(&range, 1, 6) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_volume_leaves_average_blank() {
        let aggregation = TradeAggregation::from_trades(vec![
            trade(1, "PH24071301", 2500.0, 0),
            trade(2, "PH24071302", 2500.0, 10),
        ]);

        let (bytes, summary) = render_report(&aggregation, HeaderLabels::Legacy).unwrap();
        assert_eq!(summary.skipped_averages, 1);

        let range = read_sheet(bytes);
        assert!(matches!(range.get_value((1, 7)), None | Some(Data::Empty)));
        assert!((float_at(&range, 2, 7) - 2500.0).abs() < 1e-9);
    }

    #[test]
    fn test_offsetting_quantities_leave_average_blank() {
        let aggregation = TradeAggregation::from_trades(vec![
            trade(1, "PH24071305", 100.0, 3),
            trade(2, "PH24071305", 100.0, -1),
            trade(3, "PH24071305", 101.0, -2),
        ]);

        let (bytes, summary) = render_report(&aggregation, HeaderLabels::Legacy).unwrap();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.skipped_averages, 3);

        let range = read_sheet(bytes);
        for row in 1..4 {
            assert_eq!(float_at(&range, row, 5), 0.0);
            assert!(matches!(range.get_value((row, 7)), None | Some(Data::Empty)));
        }
    }

    #[test]
    fn test_empty_report_has_only_header() {
        let aggregation = TradeAggregation::new();
        let (bytes, summary) = render_report(&aggregation, HeaderLabels::Legacy).unwrap();
        assert_eq!(summary, ReportSummary::default());

        let range = read_sheet(bytes);
        assert_eq!(range.height(), 1);
    }

    #[test]
    fn test_write_report_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data.xlsx");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"stale").unwrap();

        let aggregation = TradeAggregation::from_trades(vec![trade(1, "PH", 10.0, 10)]);
        let summary = write_report(&aggregation, HeaderLabels::Legacy, &path).unwrap();
        assert_eq!(summary.rows, 1);

        let bytes = std::fs::read(&path).unwrap();
        let range = read_sheet(bytes);
        assert_eq!(range.height(), 2);
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_write_report_leaves_sibling_tmp_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.xlsx");
        let sibling = dir.path().join("data.tmp");
        std::fs::write(&sibling, b"user notes").unwrap();

        write_report(&TradeAggregation::new(), HeaderLabels::Legacy, &path).unwrap();

        assert_eq!(temp_path_for(&path), dir.path().join("data.xlsx.tmp"));
        assert_eq!(std::fs::read(&sibling).unwrap(), b"user notes");
        assert!(path.exists());
    }

    #[test]
    fn test_failed_write_keeps_existing_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.xlsx");
        std::fs::write(&path, b"previous run").unwrap();
        // A directory in the staging slot makes the temp write fail
        std::fs::create_dir(temp_path_for(&path)).unwrap();

        let result = write_report(&TradeAggregation::new(), HeaderLabels::Legacy, &path);

        assert!(matches!(result, Err(ReportError::Io(_))));
        assert_eq!(std::fs::read(&path).unwrap(), b"previous run");
    }

    #[test]
    fn test_write_report_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports").join("2024").join("july.xlsx");

        write_report(&TradeAggregation::new(), HeaderLabels::Legacy, &path).unwrap();
        assert!(path.exists());
    }
}
