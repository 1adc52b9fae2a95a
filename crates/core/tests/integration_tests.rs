// ═══════════════════════════════════════════════════════════════════
// Integration Tests — PortfolioLens façade, CSV row sources,
// snapshot consistency end to end
// ═══════════════════════════════════════════════════════════════════

use std::collections::HashMap;
use std::io::Write;

use portfolio_lens_core::errors::CoreError;
use portfolio_lens_core::models::criteria::{CriteriaUpdate, PlFilter, SortDir, SortKey};
use portfolio_lens_core::models::holding::{ColumnMap, RawRow};
use portfolio_lens_core::models::view::ViewSnapshot;
use portfolio_lens_core::sources::csv::CsvRowSource;
use portfolio_lens_core::sources::traits::RowSource;
use portfolio_lens_core::PortfolioLens;

const TOL: f64 = 1e-9;

fn row(stock: &str, sector: &str, qty: &str, cost: &str, current: &str) -> RawRow {
    let map = ColumnMap::default();
    HashMap::from([
        (map.stock, stock.to_string()),
        (map.sector, sector.to_string()),
        (map.qty, qty.to_string()),
        (map.cost, cost.to_string()),
        (map.current, current.to_string()),
    ])
}

fn sample_rows() -> Vec<RawRow> {
    vec![
        row("ACME", "Tech", "10", "1000", "1100"),
        row("Globex", "Energy", "5", "500", "500"),
        row("Initech", "Tech", "20", "2000", "1950"),
        row("Total", "", "0", "0", "0"),
    ]
}

fn loaded_lens() -> PortfolioLens {
    let mut lens = PortfolioLens::new();
    lens.import(&sample_rows(), &ColumnMap::default()).unwrap();
    lens
}

/// Every consumer output in a snapshot must describe the same view.
fn assert_consistent(snapshot: &ViewSnapshot) {
    let view_cost: f64 = snapshot.holdings.iter().map(|h| h.cost).sum();
    let view_current: f64 = snapshot.holdings.iter().map(|h| h.current).sum();

    assert!((snapshot.summary.total_cost - view_cost).abs() < TOL);
    assert!((snapshot.summary.total_current - view_current).abs() < TOL);
    assert_eq!(snapshot.summary.holding_count, snapshot.holdings.len());

    let agg_current: f64 = snapshot
        .sector_aggregates
        .iter()
        .map(|a| a.total_current)
        .sum();
    assert!((agg_current - view_current).abs() < TOL);

    let alloc_total: f64 = snapshot.allocation_chart.iter().map(|s| s.value).sum();
    assert!((alloc_total - view_current).abs() < TOL);
}

// ═══════════════════════════════════════════════════════════════════
//  Import & state machine
// ═══════════════════════════════════════════════════════════════════

mod import {
    use super::*;

    #[test]
    fn starts_empty() {
        let lens = PortfolioLens::new();
        assert!(!lens.is_loaded());
        let snapshot = lens.snapshot();
        assert!(snapshot.holdings.is_empty());
        assert_eq!(snapshot.summary.total_cost, 0.0);
        assert_eq!(snapshot.summary.sector_count, 0);
        assert!(snapshot.sectors.is_empty());
    }

    #[test]
    fn import_drops_footer_and_derives_fields() {
        let lens = loaded_lens();
        assert!(lens.is_loaded());
        let snapshot = lens.snapshot();

        assert_eq!(snapshot.holdings.len(), 3);
        let acme = &snapshot.holdings[0];
        assert_eq!(acme.pl, 100.0);
        assert!((acme.pl_pct - 10.0).abs() < TOL);

        let weight_sum: f64 = snapshot.holdings.iter().map(|h| h.weight).sum();
        assert!((weight_sum - 100.0).abs() < 1e-6);
        assert_consistent(&snapshot);
    }

    #[test]
    fn import_replaces_portfolio_wholesale_and_resets_criteria() {
        let mut lens = loaded_lens();
        lens.update_criteria(CriteriaUpdate {
            search: Some("acme".into()),
            pl_filter: Some(PlFilter::Gainers),
            ..CriteriaUpdate::default()
        });

        let snapshot = lens
            .import(
                &[row("Umbrella", "Pharma", "2", "200", "300")],
                &ColumnMap::default(),
            )
            .unwrap();

        assert_eq!(snapshot.holdings.len(), 1);
        assert_eq!(snapshot.holdings[0].stock, "Umbrella");
        // criteria were reset by the new import
        assert!(snapshot.criteria.search.is_empty());
        assert_eq!(snapshot.criteria.pl_filter, PlFilter::All);
        assert_eq!(snapshot.sectors, vec!["Pharma"]);
    }

    #[test]
    fn failed_import_keeps_previous_state() {
        let mut lens = loaded_lens();
        let bad_rows = vec![HashMap::from([("Ticker".to_string(), "X".to_string())])];
        let err = lens.import(&bad_rows, &ColumnMap::default()).unwrap_err();
        assert!(matches!(err, CoreError::ColumnMapping(_)));
        // previous portfolio untouched
        assert_eq!(lens.snapshot().holdings.len(), 3);
    }

    #[test]
    fn empty_import_is_loaded_with_zeroed_outputs() {
        // Scenario E: every row filtered out
        let mut lens = PortfolioLens::new();
        let snapshot = lens
            .import(&[row("Total", "", "0", "0", "0")], &ColumnMap::default())
            .unwrap();

        assert!(lens.is_loaded());
        assert!(snapshot.holdings.is_empty());
        assert_eq!(snapshot.summary.total_cost, 0.0);
        assert_eq!(snapshot.summary.holding_count, 0);
        assert_eq!(snapshot.summary.sector_count, 0);
        assert!(snapshot.sector_aggregates.is_empty());
        assert!(snapshot.movers_chart.is_empty());

        // exports don't fault either
        let sheet = lens.export_spreadsheet(5);
        assert!(sheet.holdings.is_empty());
        let doc = lens.export_document(5);
        assert!(doc.holdings.is_empty());
        assert_eq!(doc.summary_lines[0], "Total Cost: ₹0.00");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Criteria, sorting, reset
// ═══════════════════════════════════════════════════════════════════

mod criteria {
    use super::*;

    #[test]
    fn every_output_follows_the_filter() {
        let mut lens = loaded_lens();
        let snapshot = lens.update_criteria(CriteriaUpdate {
            pl_filter: Some(PlFilter::Losers),
            ..CriteriaUpdate::default()
        });

        assert_eq!(snapshot.holdings.len(), 1);
        assert_eq!(snapshot.holdings[0].stock, "Initech");
        // summary, sectors, charts all describe the filtered view
        assert_eq!(snapshot.summary.holding_count, 1);
        assert_eq!(snapshot.sector_aggregates.len(), 1);
        assert_eq!(snapshot.allocation_chart.len(), 1);
        assert_eq!(snapshot.movers_chart.len(), 1);
        assert_consistent(&snapshot);

        // but the dropdown still lists the full portfolio's sectors
        assert_eq!(snapshot.sectors, vec!["Tech", "Energy"]);
    }

    #[test]
    fn snapshot_is_pure_and_repeatable() {
        let lens = loaded_lens();
        assert_eq!(lens.snapshot(), lens.snapshot());
    }

    #[test]
    fn toggle_sort_new_key_starts_descending() {
        let mut lens = loaded_lens();
        let snapshot = lens.toggle_sort(SortKey::Current);
        assert_eq!(snapshot.criteria.sort_key, Some(SortKey::Current));
        assert_eq!(snapshot.criteria.sort_dir, SortDir::Desc);
        assert_eq!(snapshot.holdings[0].stock, "Initech"); // 1950 first
    }

    #[test]
    fn toggle_sort_same_key_flips_direction() {
        let mut lens = loaded_lens();
        lens.toggle_sort(SortKey::Current);
        let snapshot = lens.toggle_sort(SortKey::Current);
        assert_eq!(snapshot.criteria.sort_dir, SortDir::Asc);
        assert_eq!(snapshot.holdings[0].stock, "Globex"); // 500 first
    }

    #[test]
    fn toggle_sort_switching_keys_resets_to_descending() {
        let mut lens = loaded_lens();
        lens.toggle_sort(SortKey::Current);
        lens.toggle_sort(SortKey::Current); // now Asc
        let snapshot = lens.toggle_sort(SortKey::Pl);
        assert_eq!(snapshot.criteria.sort_key, Some(SortKey::Pl));
        assert_eq!(snapshot.criteria.sort_dir, SortDir::Desc);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_portfolio() {
        let mut lens = loaded_lens();
        lens.update_criteria(CriteriaUpdate {
            search: Some("initech".into()),
            ..CriteriaUpdate::default()
        });
        lens.toggle_sort(SortKey::Pl);

        let snapshot = lens.reset();
        assert_eq!(snapshot.criteria, Default::default());
        assert_eq!(snapshot.holdings.len(), 3);
        assert_consistent(&snapshot);
    }

    #[test]
    fn search_and_sector_compose() {
        let mut lens = loaded_lens();
        let snapshot = lens.update_criteria(CriteriaUpdate {
            search: Some("tech".into()),
            sector: Some(Some("Tech".into())),
            ..CriteriaUpdate::default()
        });
        // "tech" matches both Tech holdings by sector; exact sector keeps them
        assert_eq!(snapshot.holdings.len(), 2);
        assert_consistent(&snapshot);
    }

    #[test]
    fn set_top_movers_bounds_the_chart() {
        let mut lens = loaded_lens();
        let snapshot = lens.set_top_movers(100);
        // clamped to 20, but only 3 holdings exist
        assert_eq!(snapshot.movers_chart.len(), 3);
    }

    #[test]
    fn snapshot_json_serializes() {
        let lens = loaded_lens();
        let json = lens.snapshot_json().unwrap();
        assert!(json.contains("\"holdings\""));
        assert!(json.contains("ACME"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Exports reflect the current view
// ═══════════════════════════════════════════════════════════════════

mod export {
    use super::*;

    #[test]
    fn spreadsheet_rows_match_view_not_portfolio() {
        let mut lens = loaded_lens();
        lens.update_criteria(CriteriaUpdate {
            sector: Some(Some("Tech".into())),
            ..CriteriaUpdate::default()
        });

        let export = lens.export_spreadsheet(5);
        assert_eq!(export.holdings.len(), 2);
        assert!(export.holdings.iter().all(|r| r.sector == "Tech"));
        assert_eq!(export.sectors.len(), 1);
        assert_eq!(export.movers.len(), 2);
    }

    #[test]
    fn export_respects_active_sort() {
        let mut lens = loaded_lens();
        lens.toggle_sort(SortKey::Current);
        let export = lens.export_spreadsheet(5);
        assert_eq!(export.holdings[0].stock, "Initech");
    }

    #[test]
    fn document_export_carries_summary_block() {
        let lens = loaded_lens();
        let doc = lens.export_document(5);
        assert_eq!(doc.summary_lines.len(), 3);
        assert_eq!(doc.holdings.len(), 3);
        assert_eq!(doc.file_name, "portfolio_export.pdf");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  CSV row source
// ═══════════════════════════════════════════════════════════════════

mod csv_source {
    use super::*;

    const STATEMENT: &str = "\
Broker Statement,,,,
Account: 12345,,,,
,,,,
Generated 2026-08-30,,,,
Stock Name,Sector Name,Quantity,Value At Cost,Valuation at Current Market Price
ACME,Tech,10,1000,1200
Total,,0,0,0
";

    #[test]
    fn skips_preamble_and_maps_headers() {
        let mut source =
            CsvRowSource::from_bytes("statement.csv", STATEMENT.as_bytes().to_vec())
                .with_skip_rows(4);
        let rows = source.rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Stock Name"], "ACME");
        assert_eq!(rows[0]["Quantity"], "10");
        assert_eq!(rows[1]["Stock Name"], "Total");
    }

    #[test]
    fn import_from_source_end_to_end() {
        let mut lens = PortfolioLens::new();
        let mut source =
            CsvRowSource::from_bytes("statement.csv", STATEMENT.as_bytes().to_vec())
                .with_skip_rows(4);
        let snapshot = lens
            .import_from_source(&mut source, &ColumnMap::default())
            .unwrap();

        assert_eq!(snapshot.holdings.len(), 1);
        assert_eq!(snapshot.holdings[0].stock, "ACME");
        assert!((snapshot.holdings[0].weight - 100.0).abs() < TOL);

        // export naming picks up the source stem
        assert_eq!(lens.export_spreadsheet(5).file_name, "statement_export.xlsx");
        assert_eq!(lens.export_document(5).file_name, "statement_export.pdf");
    }

    #[test]
    fn from_file_reads_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holdings.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "Stock Name,Sector Name,Quantity,Value At Cost,Valuation at Current Market Price\n\
             ACME,Tech,10,1000,1200\n"
        )
        .unwrap();

        let mut source = CsvRowSource::from_file(&path).unwrap();
        assert_eq!(source.name(), "holdings.csv");
        let rows = source.rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Sector Name"], "Tech");
    }

    #[test]
    fn missing_file_is_a_hard_failure() {
        let err = CsvRowSource::from_file("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }

    #[test]
    fn source_with_no_header_row_errors() {
        let mut source = CsvRowSource::from_bytes("empty.csv", Vec::new()).with_skip_rows(0);
        let err = source.rows().unwrap_err();
        assert!(matches!(err, CoreError::ImportSource(_)));
    }
}
