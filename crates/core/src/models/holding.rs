use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One raw row from an import source: column name → cell text.
///
/// Cells are whatever the source hands over — often blank strings or
/// noisy number formats. The normalizer is the single typed boundary;
/// nothing past it ever sees a `RawRow`.
pub type RawRow = HashMap<String, String>;

/// Sector label used when a row has no sector cell.
pub const UNKNOWN_SECTOR: &str = "—";

/// Names the five semantic columns the normalizer needs to find in a
/// raw row. Callers supply this because every broker export labels its
/// columns differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    /// Column holding the stock's display name
    pub stock: String,

    /// Column holding the sector label
    pub sector: String,

    /// Column holding the quantity held
    pub qty: String,

    /// Column holding the total amount invested (not per-unit)
    pub cost: String,

    /// Column holding the total current market valuation (not per-unit)
    pub current: String,
}

impl Default for ColumnMap {
    /// Column headers as they appear in the broker statement this tool
    /// was originally built around.
    fn default() -> Self {
        Self {
            stock: "Stock Name".to_string(),
            sector: "Sector Name".to_string(),
            qty: "Quantity".to_string(),
            cost: "Value At Cost".to_string(),
            current: "Valuation at Current Market Price".to_string(),
        }
    }
}

/// One normalized portfolio line item.
///
/// Raw fields come straight from the import row; derived fields are
/// computed once during normalization and are guaranteed finite —
/// zero denominators (qty, cost, portfolio total) yield 0.0, never
/// NaN or infinity. Holdings are immutable after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Display name, trimmed, never empty
    pub stock: String,

    /// Sector label, or [`UNKNOWN_SECTOR`] when the cell was blank
    pub sector: String,

    /// Units held; may be zero
    pub qty: f64,

    /// Total amount invested at acquisition
    pub cost: f64,

    /// Total current market valuation
    pub current: f64,

    /// cost / qty (0 when qty is 0)
    pub avg_cost: f64,

    /// current / qty (0 when qty is 0)
    pub mkt_price: f64,

    /// Unrealized profit/loss: current - cost
    pub pl: f64,

    /// pl / cost × 100 (0 when cost is 0)
    pub pl_pct: f64,

    /// Share of total portfolio current value, in percent
    /// (0 when the portfolio total is 0)
    pub weight: f64,
}
