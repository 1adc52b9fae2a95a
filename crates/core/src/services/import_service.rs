use tracing::debug;

use crate::errors::CoreError;
use crate::models::holding::{ColumnMap, Holding, RawRow, UNKNOWN_SECTOR};
use crate::models::portfolio::Portfolio;
use crate::services::safe_ratio;

/// Normalizes raw import rows into the canonical portfolio.
///
/// Pure business logic — no I/O. This is the single typed boundary:
/// everything upstream is string cells, everything downstream is a
/// fixed `Holding` shape with finite derived fields.
pub struct ImportService;

impl ImportService {
    pub fn new() -> Self {
        Self
    }

    /// Normalize raw rows into a new portfolio.
    ///
    /// - Rows with a blank stock name, or a stock name containing the
    ///   case-insensitive substring "total" (spreadsheet footer rows),
    ///   are dropped here, not later.
    /// - Numeric cells parse leniently; blank or unparseable cells
    ///   become 0.0. One bad cell never fails the import.
    /// - Derived fields are computed in two passes: raw fields and the
    ///   portfolio total first, then per-holding weight against that
    ///   total.
    ///
    /// An import where every row gets filtered out yields an empty
    /// portfolio, which is a valid result. The only error here is a
    /// column map that matches nothing: non-empty input where no row
    /// has the stock-name column at all.
    pub fn normalize(&self, rows: &[RawRow], columns: &ColumnMap) -> Result<Portfolio, CoreError> {
        if !rows.is_empty() && !rows.iter().any(|r| r.contains_key(&columns.stock)) {
            return Err(CoreError::ColumnMapping(format!(
                "no row contains the '{}' column — check the column map against the source headers",
                columns.stock
            )));
        }

        // Pass 1: raw fields + per-holding derivations
        let mut holdings: Vec<Holding> = rows
            .iter()
            .filter_map(|row| self.normalize_row(row, columns))
            .collect();

        // Pass 2: weight needs the total over the already-cleaned rows
        let total_current: f64 = holdings.iter().map(|h| h.current).sum();
        for holding in &mut holdings {
            holding.weight = safe_ratio(holding.current, total_current) * 100.0;
        }

        debug!(
            raw_rows = rows.len(),
            holdings = holdings.len(),
            "normalized import"
        );

        Ok(Portfolio { holdings })
    }

    /// Normalize one row, or `None` if it fails the footer/blank test.
    fn normalize_row(&self, row: &RawRow, columns: &ColumnMap) -> Option<Holding> {
        let stock = row.get(&columns.stock).map(|s| s.trim()).unwrap_or("");
        if stock.is_empty() || stock.to_lowercase().contains("total") {
            return None;
        }

        let sector = row
            .get(&columns.sector)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_SECTOR);

        let qty = Self::parse_cell(row.get(&columns.qty));
        let cost = Self::parse_cell(row.get(&columns.cost));
        let current = Self::parse_cell(row.get(&columns.current));
        let pl = current - cost;

        Some(Holding {
            stock: stock.to_string(),
            sector: sector.to_string(),
            qty,
            cost,
            current,
            avg_cost: safe_ratio(cost, qty),
            mkt_price: safe_ratio(current, qty),
            pl,
            pl_pct: safe_ratio(pl, cost) * 100.0,
            weight: 0.0, // filled in pass 2
        })
    }

    /// Lenient numeric coercion: trim, parse, retry without thousands
    /// separators, fall back to 0.0. Spreadsheet data is noisy by
    /// nature, so a bad cell is zeroed rather than surfaced.
    fn parse_cell(cell: Option<&String>) -> f64 {
        let text = match cell {
            Some(t) => t.trim(),
            None => return 0.0,
        };
        if text.is_empty() {
            return 0.0;
        }
        if let Ok(value) = text.parse::<f64>() {
            return value;
        }
        text.replace(',', "").parse::<f64>().unwrap_or(0.0)
    }
}

impl Default for ImportService {
    fn default() -> Self {
        Self::new()
    }
}
