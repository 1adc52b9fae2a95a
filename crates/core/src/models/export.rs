use serde::{Deserialize, Serialize};

use super::analytics::SectorAggregate;

/// One holdings row for the spreadsheet target: raw numbers, no
/// formatting. The spreadsheet writer decides cell presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingRow {
    pub stock: String,
    pub sector: String,
    pub qty: f64,
    pub avg_cost: f64,
    pub cost: f64,
    pub mkt_price: f64,
    pub current: f64,
    pub pl: f64,
}

/// One top-movers row: a stock and its signed P/L.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoverRow {
    pub stock: String,
    pub pl: f64,
}

/// Export bundle for the spreadsheet target. All numeric cells are raw
/// `f64`s; the writer applies its own number formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadsheetExport {
    /// Suggested output file name (source stem + `_export.xlsx`)
    pub file_name: String,

    /// One row per holding in the current view, in view order
    pub holdings: Vec<HoldingRow>,

    /// Sector rollups, sorted by sector label
    pub sectors: Vec<SectorAggregate>,

    /// Top movers by |pl|, truncated to the requested bound
    pub movers: Vec<MoverRow>,
}

/// Export bundle for the document target. Everything is pre-formatted
/// text: currency symbol, two decimals, grouped digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentExport {
    /// Suggested output file name (source stem + `_export.pdf`)
    pub file_name: String,

    /// Summary text block (total cost / valuation / P&L lines)
    pub summary_lines: Vec<String>,

    /// Holdings table cells, one Vec<String> per view row
    pub holdings: Vec<Vec<String>>,

    /// Sector table cells
    pub sectors: Vec<Vec<String>>,

    /// Top-movers table cells
    pub movers: Vec<Vec<String>>,
}

/// Column headers shared by both holdings tables.
pub const HOLDINGS_HEADER: [&str; 8] = [
    "Stock",
    "Sector",
    "Qty",
    "Avg Cost",
    "Cost Value",
    "Market Price",
    "Current Value",
    "Unrealized P/L",
];

/// Column headers for the sector summary tables.
pub const SECTORS_HEADER: [&str; 5] = [
    "Sector",
    "Cost Value",
    "Current Value",
    "P/L",
    "% of Portfolio",
];

/// Column headers for the top-movers tables.
pub const MOVERS_HEADER: [&str; 2] = ["Stock", "Unrealized P/L"];
