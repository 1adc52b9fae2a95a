use std::collections::{BTreeMap, HashSet};

use crate::models::analytics::{PortfolioSummary, SectorAggregate};
use crate::models::holding::Holding;
use crate::services::safe_ratio;

/// Computes whole-view totals and per-sector rollups.
///
/// Both functions take the *current view* (post filter+sort) and never
/// mutate or reorder it — aggregation doesn't care about row order.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Whole-view summary: totals, return %, holding and sector counts.
    pub fn summarize(&self, view: &[&Holding]) -> PortfolioSummary {
        let total_cost: f64 = view.iter().map(|h| h.cost).sum();
        let total_current: f64 = view.iter().map(|h| h.current).sum();
        let total_pl = total_current - total_cost;

        let sectors: HashSet<&str> = view.iter().map(|h| h.sector.as_str()).collect();

        PortfolioSummary {
            total_cost,
            total_current,
            total_pl,
            return_pct: safe_ratio(total_pl, total_cost) * 100.0,
            holding_count: view.len(),
            sector_count: sectors.len(),
        }
    }

    /// Group the view by exact sector label and roll up cost, current
    /// value, P/L, and share of the view total. Output is sorted by
    /// sector label ascending — deterministic for display and export.
    pub fn aggregate_sectors(&self, view: &[&Holding]) -> Vec<SectorAggregate> {
        // BTreeMap gives the ascending label order for free
        let mut groups: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
        for holding in view {
            let entry = groups.entry(holding.sector.as_str()).or_insert((0.0, 0.0));
            entry.0 += holding.cost;
            entry.1 += holding.current;
        }

        let view_total: f64 = groups.values().map(|(_, current)| current).sum();

        groups
            .into_iter()
            .map(|(sector, (total_cost, total_current))| SectorAggregate {
                sector: sector.to_string(),
                total_cost,
                total_current,
                total_pl: total_current - total_cost,
                pct_of_view_total: safe_ratio(total_current, view_total) * 100.0,
            })
            .collect()
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
