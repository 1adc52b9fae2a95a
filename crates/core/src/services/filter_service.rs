use crate::models::criteria::{PlFilter, ViewCriteria};
use crate::models::holding::Holding;
use crate::models::portfolio::Portfolio;

/// Applies the view criteria's predicates to the canonical portfolio.
///
/// Pure — the portfolio is never mutated; the output borrows into it
/// and preserves import order. Predicates run in a fixed order: search
/// text, then sector, then P/L mode.
pub struct FilterService;

impl FilterService {
    pub fn new() -> Self {
        Self
    }

    /// Filter the portfolio down to the holdings matching `criteria`.
    pub fn apply<'a>(&self, portfolio: &'a Portfolio, criteria: &ViewCriteria) -> Vec<&'a Holding> {
        let needle = criteria.search.to_lowercase();

        portfolio
            .holdings
            .iter()
            .filter(|h| needle.is_empty() || Self::matches_search(h, &needle))
            .filter(|h| match &criteria.sector {
                Some(sector) => &h.sector == sector,
                None => true,
            })
            .filter(|h| match criteria.pl_filter {
                PlFilter::All => true,
                // pl == 0 is neither a gainer nor a loser
                PlFilter::Gainers => h.pl > 0.0,
                PlFilter::Losers => h.pl < 0.0,
            })
            .collect()
    }

    /// Case-insensitive substring match against stock OR sector.
    fn matches_search(holding: &Holding, needle: &str) -> bool {
        holding.stock.to_lowercase().contains(needle)
            || holding.sector.to_lowercase().contains(needle)
    }
}

impl Default for FilterService {
    fn default() -> Self {
        Self::new()
    }
}
