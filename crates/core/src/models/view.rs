use serde::{Deserialize, Serialize};

use super::analytics::{PortfolioSummary, SectorAggregate};
use super::chart::ChartSlice;
use super::criteria::ViewCriteria;
use super::holding::Holding;

/// One consistent snapshot of everything the UI shows.
///
/// Every import, criteria change, sort click, or reset produces exactly
/// one of these — table, summary, sector table, and both charts are
/// always derived from the same `(Portfolio, ViewCriteria)` pair, never
/// a mix of old and new state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    /// The current view: filtered, sorted holdings
    pub holdings: Vec<Holding>,

    /// Whole-view totals
    pub summary: PortfolioSummary,

    /// Per-sector rollups over the view, sorted by sector label
    pub sector_aggregates: Vec<SectorAggregate>,

    /// Allocation chart dataset: sector → current value over the view
    pub allocation_chart: Vec<ChartSlice>,

    /// Movers chart dataset: stock → signed P/L, largest |pl| first,
    /// truncated to the top-N setting
    pub movers_chart: Vec<ChartSlice>,

    /// Distinct sector labels of the *full* portfolio (first-seen
    /// order) — feeds the sector filter dropdown, so it must not
    /// shrink when a filter is active
    pub sectors: Vec<String>,

    /// The criteria this snapshot was derived from
    pub criteria: ViewCriteria,
}
