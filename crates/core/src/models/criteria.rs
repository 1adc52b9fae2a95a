use serde::{Deserialize, Serialize};

/// Profit/loss filter mode.
///
/// A holding with `pl == 0` exactly is kept by `All` but excluded from
/// both `Gainers` and `Losers` — intentional boundary behavior, not a
/// bug: a flat position is neither a gain nor a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlFilter {
    /// Keep everything
    #[default]
    All,
    /// Keep holdings with pl > 0
    Gainers,
    /// Keep holdings with pl < 0
    Losers,
}

/// Sortable holding field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Stock,
    Sector,
    Qty,
    AvgCost,
    Cost,
    MktPrice,
    Current,
    Pl,
    PlPct,
    Weight,
}

impl SortKey {
    /// Whether this key compares as text rather than numerically.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, SortKey::Stock | SortKey::Sector)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDir {
    Asc,
    /// Default — a fresh sort column starts descending
    #[default]
    Desc,
}

impl SortDir {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// The active view criteria: what the user has typed and clicked.
///
/// Reset to defaults on every new import; never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewCriteria {
    /// Case-insensitive substring matched against stock OR sector;
    /// empty means no search filter
    pub search: String,

    /// Exact sector match; `None` means all sectors
    pub sector: Option<String>,

    /// Gainers / losers / everything
    pub pl_filter: PlFilter,

    /// Active sort column; `None` keeps import order
    pub sort_key: Option<SortKey>,

    /// Direction applied when `sort_key` is set
    pub sort_dir: SortDir,
}

/// A partial criteria change. Fields left `None` keep their current
/// value, so a search keystroke doesn't clobber the sector pick.
#[derive(Debug, Clone, Default)]
pub struct CriteriaUpdate {
    pub search: Option<String>,
    /// `Some(None)` clears the sector filter
    pub sector: Option<Option<String>>,
    pub pl_filter: Option<PlFilter>,
    /// `Some((None, _))` clears the sort entirely
    pub sort: Option<(Option<SortKey>, SortDir)>,
}

impl ViewCriteria {
    /// Merge a partial update into the current criteria.
    pub fn apply(&mut self, update: CriteriaUpdate) {
        if let Some(search) = update.search {
            self.search = search;
        }
        if let Some(sector) = update.sector {
            self.sector = sector;
        }
        if let Some(pl_filter) = update.pl_filter {
            self.pl_filter = pl_filter;
        }
        if let Some((key, dir)) = update.sort {
            self.sort_key = key;
            self.sort_dir = dir;
        }
    }
}
