pub mod analytics_service;
pub mod chart_service;
pub mod export_service;
pub mod filter_service;
pub mod import_service;
pub mod sort_service;

/// Divide-with-guard: `numerator / denominator`, or 0.0 when the
/// denominator is zero or the result is not finite.
///
/// Every derived ratio in the pipeline (avg cost, market price, P/L %,
/// weight, sector %) goes through here, so NaN/infinity can never leak
/// into a snapshot.
#[must_use]
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let ratio = numerator / denominator;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}
