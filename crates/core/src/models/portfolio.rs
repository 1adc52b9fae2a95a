use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// The canonical portfolio: an ordered sequence of normalized holdings.
///
/// Created atomically on each successful import and replaced wholesale —
/// never merged or edited in place. Import order is preserved; the
/// filter/sort pipeline works on borrowed slices of this sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    /// All holdings, in import order
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    /// Total current market value across all holdings.
    #[must_use]
    pub fn total_current(&self) -> f64 {
        self.holdings.iter().map(|h| h.current).sum()
    }

    /// Distinct sector labels in first-seen order.
    ///
    /// Drives the sector filter dropdown, so the order matches the
    /// statement rather than being alphabetized.
    #[must_use]
    pub fn sectors(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.holdings
            .iter()
            .filter(|h| seen.insert(h.sector.clone()))
            .map(|h| h.sector.clone())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
