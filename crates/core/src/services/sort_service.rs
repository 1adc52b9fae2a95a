use std::cmp::Ordering;

use crate::models::criteria::{SortDir, SortKey};
use crate::models::holding::Holding;

/// Orders the filtered view by the active sort column.
///
/// The sort is stable: rows with equal keys keep their relative order,
/// so repeated clicks on a tied column never reshuffle the table.
/// Which column is active and in which direction is the controller's
/// business — this service just orders what it's given.
pub struct SortService;

impl SortService {
    pub fn new() -> Self {
        Self
    }

    /// Sort `view` in place by `key`/`dir`. With no key the view keeps
    /// its filtered (import) order untouched.
    pub fn apply(&self, view: &mut [&Holding], key: Option<SortKey>, dir: SortDir) {
        let Some(key) = key else {
            return;
        };

        view.sort_by(|a, b| {
            let ord = Self::compare(a, b, key);
            match dir {
                SortDir::Asc => ord,
                SortDir::Desc => ord.reverse(),
            }
        });
    }

    /// Type-aware comparison: text columns compare case-insensitively,
    /// numeric columns by value. Derived fields are always finite, so
    /// the `partial_cmp` fallback is never hit in practice.
    fn compare(a: &Holding, b: &Holding, key: SortKey) -> Ordering {
        match key {
            SortKey::Stock => a.stock.to_lowercase().cmp(&b.stock.to_lowercase()),
            SortKey::Sector => a.sector.to_lowercase().cmp(&b.sector.to_lowercase()),
            SortKey::Qty => Self::compare_f64(a.qty, b.qty),
            SortKey::AvgCost => Self::compare_f64(a.avg_cost, b.avg_cost),
            SortKey::Cost => Self::compare_f64(a.cost, b.cost),
            SortKey::MktPrice => Self::compare_f64(a.mkt_price, b.mkt_price),
            SortKey::Current => Self::compare_f64(a.current, b.current),
            SortKey::Pl => Self::compare_f64(a.pl, b.pl),
            SortKey::PlPct => Self::compare_f64(a.pl_pct, b.pl_pct),
            SortKey::Weight => Self::compare_f64(a.weight, b.weight),
        }
    }

    fn compare_f64(a: f64, b: f64) -> Ordering {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}

impl Default for SortService {
    fn default() -> Self {
        Self::new()
    }
}
