use crate::models::chart::ChartSlice;
use crate::models::holding::Holding;

/// Fewest top-movers rows an export/chart may request.
pub const TOP_MOVERS_MIN: usize = 3;
/// Most top-movers rows an export/chart may request.
pub const TOP_MOVERS_MAX: usize = 20;
/// Default top-movers bound when the caller doesn't care.
pub const TOP_MOVERS_DEFAULT: usize = 5;

/// Clamp a requested top-movers bound into the allowed range.
#[must_use]
pub fn clamp_top_movers(requested: usize) -> usize {
    requested.clamp(TOP_MOVERS_MIN, TOP_MOVERS_MAX)
}

/// Shapes chart-ready datasets from the current view.
///
/// The core computes all the numbers — the frontend only renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Allocation dataset: sector → summed current value over the view,
    /// sectors in first-seen view order (matches the table the user is
    /// looking at, not an alphabetized list).
    pub fn allocation(&self, view: &[&Holding]) -> Vec<ChartSlice> {
        let mut slices: Vec<ChartSlice> = Vec::new();
        for holding in view {
            match slices.iter_mut().find(|s| s.label == holding.sector) {
                Some(slice) => slice.value += holding.current,
                None => slices.push(ChartSlice::new(holding.sector.clone(), holding.current)),
            }
        }
        slices
    }

    /// Movers dataset: stock → signed P/L, ordered by descending |pl|
    /// and truncated to the clamped `top_n` bound. The ordering sort is
    /// stable, so ties keep view order.
    pub fn movers(&self, view: &[&Holding], top_n: usize) -> Vec<ChartSlice> {
        let mut slices: Vec<ChartSlice> = view
            .iter()
            .map(|h| ChartSlice::new(h.stock.clone(), h.pl))
            .collect();
        slices.sort_by(|a, b| {
            b.value
                .abs()
                .partial_cmp(&a.value.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        slices.truncate(clamp_top_movers(top_n));
        slices
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
