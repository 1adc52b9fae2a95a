use crate::models::analytics::{PortfolioSummary, SectorAggregate};
use crate::models::export::{DocumentExport, HoldingRow, MoverRow, SpreadsheetExport};
use crate::models::holding::Holding;
use crate::services::chart_service::ChartService;

/// Suffix appended to the source file stem for all export targets.
const EXPORT_SUFFIX: &str = "_export";

/// Fallback stem when the import source had no usable name.
const DEFAULT_STEM: &str = "portfolio";

/// Shapes the current view into export-ready row tables.
///
/// Exports reflect what you see: every table here is built purely from
/// the current (filtered, sorted) view, never the full portfolio. The
/// spreadsheet target gets raw numbers; formatting (currency symbol,
/// decimals, digit grouping) exists only on the document target.
pub struct ExportService {
    chart_service: ChartService,
}

impl ExportService {
    pub fn new() -> Self {
        Self {
            chart_service: ChartService::new(),
        }
    }

    /// Build the spreadsheet export bundle: raw numeric rows.
    pub fn spreadsheet(
        &self,
        source_name: Option<&str>,
        view: &[&Holding],
        sectors: &[SectorAggregate],
        top_n: usize,
    ) -> SpreadsheetExport {
        SpreadsheetExport {
            file_name: export_file_name(source_name, "xlsx"),
            holdings: view
                .iter()
                .map(|h| HoldingRow {
                    stock: h.stock.clone(),
                    sector: h.sector.clone(),
                    qty: h.qty,
                    avg_cost: h.avg_cost,
                    cost: h.cost,
                    mkt_price: h.mkt_price,
                    current: h.current,
                    pl: h.pl,
                })
                .collect(),
            sectors: sectors.to_vec(),
            movers: self.top_movers(view, top_n),
        }
    }

    /// Build the document export bundle: pre-formatted string cells
    /// plus the summary text block.
    pub fn document(
        &self,
        source_name: Option<&str>,
        view: &[&Holding],
        summary: &PortfolioSummary,
        sectors: &[SectorAggregate],
        top_n: usize,
    ) -> DocumentExport {
        DocumentExport {
            file_name: export_file_name(source_name, "pdf"),
            summary_lines: vec![
                format!("Total Cost: {}", format_currency(summary.total_cost)),
                format!("Current Valuation: {}", format_currency(summary.total_current)),
                format!("Unrealized P/L: {}", format_currency(summary.total_pl)),
            ],
            holdings: view
                .iter()
                .map(|h| {
                    vec![
                        h.stock.clone(),
                        h.sector.clone(),
                        format_number(h.qty),
                        format_currency(h.avg_cost),
                        format_currency(h.cost),
                        format_currency(h.mkt_price),
                        format_currency(h.current),
                        format_currency(h.pl),
                    ]
                })
                .collect(),
            sectors: sectors
                .iter()
                .map(|s| {
                    vec![
                        s.sector.clone(),
                        format_currency(s.total_cost),
                        format_currency(s.total_current),
                        format_currency(s.total_pl),
                        format!("{:.2}%", s.pct_of_view_total),
                    ]
                })
                .collect(),
            movers: self
                .top_movers(view, top_n)
                .into_iter()
                .map(|m| vec![m.stock, format_currency(m.pl)])
                .collect(),
        }
    }

    /// Top movers by descending |pl|, truncated to the clamped bound.
    pub fn top_movers(&self, view: &[&Holding], top_n: usize) -> Vec<MoverRow> {
        self.chart_service
            .movers(view, top_n)
            .into_iter()
            .map(|slice| MoverRow {
                stock: slice.label,
                pl: slice.value,
            })
            .collect()
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

/// Export file name: source stem (extension stripped) + `_export` +
/// the target's extension. Falls back to `portfolio_export.<ext>`.
#[must_use]
pub fn export_file_name(source_name: Option<&str>, extension: &str) -> String {
    let stem = source_name
        .map(|name| match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name,
        })
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_STEM);
    format!("{stem}{EXPORT_SUFFIX}.{extension}")
}

/// Format a number with the display currency symbol, two decimals, and
/// Indian-style digit grouping (₹12,34,567.89).
#[must_use]
pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-₹{}", format_number(-value))
    } else {
        format!("₹{}", format_number(value))
    }
}

/// Two decimals with en-IN digit grouping: the last three integer
/// digits form one group, the rest group in twos.
#[must_use]
pub fn format_number(value: f64) -> String {
    let text = format!("{:.2}", value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    if int_part.len() > 3 {
        let (head, tail) = int_part.split_at(int_part.len() - 3);
        let head_bytes = head.as_bytes();
        let lead = head_bytes.len() % 2;
        for (i, b) in head_bytes.iter().enumerate() {
            if i != 0 && (i + 2 - lead) % 2 == 0 {
                grouped.push(',');
            }
            grouped.push(*b as char);
        }
        grouped.push(',');
        grouped.push_str(tail);
    } else {
        grouped.push_str(int_part);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}
