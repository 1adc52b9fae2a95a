use serde::{Deserialize, Serialize};

/// Whole-view totals, recomputed on every criteria change.
///
/// Always derived from the *current view*, not the full portfolio, so
/// the summary cards track whatever filter is active.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Sum of cost across the view
    pub total_cost: f64,

    /// Sum of current valuation across the view
    pub total_current: f64,

    /// total_current - total_cost
    pub total_pl: f64,

    /// (total_pl / total_cost) × 100, or 0 when total_cost is 0
    pub return_pct: f64,

    /// Number of holdings in the view
    pub holding_count: usize,

    /// Number of distinct sectors in the view
    pub sector_count: usize,
}

/// Per-sector rollup over the current view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorAggregate {
    /// Sector label (exact string grouping key)
    pub sector: String,

    /// Sum of cost across the sector's holdings
    pub total_cost: f64,

    /// Sum of current valuation across the sector's holdings
    pub total_current: f64,

    /// total_current - total_cost
    pub total_pl: f64,

    /// This sector's share of the view's total current value, in
    /// percent (0 when the view total is 0)
    pub pct_of_view_total: f64,
}
