use serde::{Deserialize, Serialize};

/// One label/value pair of a chart dataset.
///
/// The core computes the numbers — the frontend just renders. Each
/// recompute replaces the previous dataset wholesale; consumers should
/// treat every snapshot as authoritative and disposable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    /// Sector name (allocation chart) or stock name (movers chart)
    pub label: String,

    /// Current value (allocation) or signed P/L (movers)
    pub value: f64,
}

impl ChartSlice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
