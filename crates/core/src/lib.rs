pub mod errors;
pub mod models;
pub mod services;
pub mod sources;

use tracing::{debug, info};

use models::{
    criteria::{CriteriaUpdate, SortDir, SortKey, ViewCriteria},
    export::{DocumentExport, SpreadsheetExport},
    holding::{ColumnMap, Holding, RawRow},
    portfolio::Portfolio,
    view::ViewSnapshot,
};
use services::{
    analytics_service::AnalyticsService,
    chart_service::{clamp_top_movers, ChartService, TOP_MOVERS_DEFAULT},
    export_service::ExportService,
    filter_service::FilterService,
    import_service::ImportService,
    sort_service::SortService,
};
use sources::traits::RowSource;

use errors::CoreError;

/// Main entry point for the Portfolio Lens core library.
///
/// Owns the canonical portfolio and the active view criteria, and
/// orchestrates the pipeline (filter → sort → summary/sectors/charts)
/// into one consistent [`ViewSnapshot`] per mutation. Consumers —
/// table, summary cards, both charts, sector table, exports — all read
/// from the same snapshot, so a criteria change can never produce a
/// partial update.
///
/// Two states: *empty* (nothing imported yet) and *loaded*. An import
/// where every row was filtered out still counts as loaded; it just
/// yields zeroed outputs.
#[must_use]
pub struct PortfolioLens {
    portfolio: Portfolio,
    criteria: ViewCriteria,
    source_name: Option<String>,
    top_movers: usize,
    loaded: bool,
    import_service: ImportService,
    filter_service: FilterService,
    sort_service: SortService,
    analytics_service: AnalyticsService,
    chart_service: ChartService,
    export_service: ExportService,
}

impl std::fmt::Debug for PortfolioLens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioLens")
            .field("holdings", &self.portfolio.len())
            .field("criteria", &self.criteria)
            .field("source_name", &self.source_name)
            .field("loaded", &self.loaded)
            .finish()
    }
}

impl PortfolioLens {
    /// Create an empty controller — no portfolio loaded, default criteria.
    pub fn new() -> Self {
        Self {
            portfolio: Portfolio::default(),
            criteria: ViewCriteria::default(),
            source_name: None,
            top_movers: TOP_MOVERS_DEFAULT,
            loaded: false,
            import_service: ImportService::new(),
            filter_service: FilterService::new(),
            sort_service: SortService::new(),
            analytics_service: AnalyticsService::new(),
            chart_service: ChartService::new(),
            export_service: ExportService::new(),
        }
    }

    // ── Import ──────────────────────────────────────────────────────

    /// Import raw rows, replacing any existing portfolio wholesale.
    ///
    /// Normalization is all-or-nothing: on error the previous portfolio
    /// and criteria are untouched. On success the criteria reset to
    /// defaults and one fresh snapshot is returned.
    pub fn import(
        &mut self,
        rows: &[RawRow],
        columns: &ColumnMap,
    ) -> Result<ViewSnapshot, CoreError> {
        let portfolio = self.import_service.normalize(rows, columns)?;
        info!(
            holdings = portfolio.len(),
            raw_rows = rows.len(),
            "imported portfolio"
        );
        self.portfolio = portfolio;
        self.criteria = ViewCriteria::default();
        self.loaded = true;
        Ok(self.snapshot())
    }

    /// Import from a [`RowSource`], remembering its name for export
    /// file naming.
    pub fn import_from_source(
        &mut self,
        source: &mut dyn RowSource,
        columns: &ColumnMap,
    ) -> Result<ViewSnapshot, CoreError> {
        let rows = source.rows()?;
        let name = source.name().to_string();
        let snapshot = self.import(&rows, columns)?;
        self.source_name = Some(name);
        Ok(snapshot)
    }

    /// `true` once an import has succeeded (even if it produced an
    /// empty portfolio).
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    // ── Criteria ────────────────────────────────────────────────────

    /// Merge a partial criteria update and re-derive the view.
    pub fn update_criteria(&mut self, update: CriteriaUpdate) -> ViewSnapshot {
        self.criteria.apply(update);
        debug!(criteria = ?self.criteria, "criteria updated");
        self.snapshot()
    }

    /// Column-header click semantics: clicking the active sort key
    /// flips its direction; clicking a new key activates it descending.
    pub fn toggle_sort(&mut self, key: SortKey) -> ViewSnapshot {
        if self.criteria.sort_key == Some(key) {
            self.criteria.sort_dir = self.criteria.sort_dir.flipped();
        } else {
            self.criteria.sort_key = Some(key);
            self.criteria.sort_dir = SortDir::Desc;
        }
        self.snapshot()
    }

    /// Restore default criteria without touching the portfolio.
    pub fn reset(&mut self) -> ViewSnapshot {
        self.criteria = ViewCriteria::default();
        self.snapshot()
    }

    /// The active criteria.
    #[must_use]
    pub fn criteria(&self) -> &ViewCriteria {
        &self.criteria
    }

    /// Set the top-movers bound used by the movers chart (clamped to
    /// the allowed range) and republish.
    pub fn set_top_movers(&mut self, n: usize) -> ViewSnapshot {
        self.top_movers = clamp_top_movers(n);
        self.snapshot()
    }

    // ── Snapshot ────────────────────────────────────────────────────

    /// Derive the current view snapshot from `(portfolio, criteria)`.
    ///
    /// Pure with respect to the controller's state — calling it twice
    /// without a mutation in between yields equal snapshots.
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        let view = self.current_view();
        ViewSnapshot {
            summary: self.analytics_service.summarize(&view),
            sector_aggregates: self.analytics_service.aggregate_sectors(&view),
            allocation_chart: self.chart_service.allocation(&view),
            movers_chart: self.chart_service.movers(&view, self.top_movers),
            sectors: self.portfolio.sectors(),
            criteria: self.criteria.clone(),
            holdings: view.into_iter().cloned().collect(),
        }
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Spreadsheet export: raw numeric tables built from the current
    /// view (never the unfiltered portfolio).
    #[must_use]
    pub fn export_spreadsheet(&self, top_n: usize) -> SpreadsheetExport {
        let view = self.current_view();
        let sectors = self.analytics_service.aggregate_sectors(&view);
        self.export_service
            .spreadsheet(self.source_name.as_deref(), &view, &sectors, top_n)
    }

    /// Document export: pre-formatted string tables plus the summary
    /// text block, built from the current view.
    #[must_use]
    pub fn export_document(&self, top_n: usize) -> DocumentExport {
        let view = self.current_view();
        let summary = self.analytics_service.summarize(&view);
        let sectors = self.analytics_service.aggregate_sectors(&view);
        self.export_service
            .document(self.source_name.as_deref(), &view, &summary, &sectors, top_n)
    }

    /// Serialize the current snapshot as pretty JSON (for frontends
    /// that consume the whole view in one message).
    pub fn snapshot_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Filter then sort: the current view as borrows into the
    /// canonical portfolio.
    fn current_view(&self) -> Vec<&Holding> {
        let mut view = self.filter_service.apply(&self.portfolio, &self.criteria);
        self.sort_service
            .apply(&mut view, self.criteria.sort_key, self.criteria.sort_dir);
        view
    }
}

impl Default for PortfolioLens {
    fn default() -> Self {
        Self::new()
    }
}
