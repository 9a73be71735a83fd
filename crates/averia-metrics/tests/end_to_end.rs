//! End-to-end scenarios: resolve columns on a realistic export, then
//! derive the full dashboard payload.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use averia_metrics::{SubsetFilter, apply_filter, build_dashboard};
use averia_model::FieldCatalog;
use averia_resolve::resolve_columns;

fn frame(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into())
        .collect();
    DataFrame::new(cols).expect("frame")
}

fn columns_of(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

#[test]
fn renamed_headers_still_produce_consistent_kpis() {
    let df = frame(vec![
        ("Numero Sol", vec!["A1", "A1", "A2"]),
        ("Caso Repetido", vec!["Sí", "no", "1"]),
        ("Fecha De Cierre", vec!["2024-01-15", "2024-01-20", "2024-02-01"]),
    ]);
    let resolved = resolve_columns(&columns_of(&df), &FieldCatalog::default());
    assert_eq!(resolved.incident_id.as_deref(), Some("Numero Sol"));
    assert_eq!(resolved.repeat_flag.as_deref(), Some("Caso Repetido"));
    assert_eq!(resolved.closure_date.as_deref(), Some("Fecha De Cierre"));
    assert!(resolved.creation_date.is_none());

    let dashboard = build_dashboard(&df, &resolved);
    // Two distinct ids; two truthy rows ("Sí" and "1").
    assert_eq!(dashboard.kpis.total_closed, 2);
    assert_eq!(dashboard.kpis.total_repeated, 2);
    assert_eq!(dashboard.kpis.repeat_percentage, 100.0);

    let trend = dashboard.monthly_trend.expect("trend available");
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].period, "2024-01");
    assert_eq!(trend[0].count, 1);
    assert_eq!(trend[1].period, "2024-02");
    assert_eq!(trend[1].count, 1);

    let split = dashboard.repeat_split.expect("split available");
    assert_eq!(split.repeated, 2);
    assert_eq!(split.not_repeated, 1);
}

#[test]
fn absent_repeat_flag_degrades_without_failing() {
    let df = frame(vec![
        ("NUMERO_SOL", vec!["A1", "A2"]),
        ("Producto Agrupado", vec!["Fibra", "Cobre"]),
    ]);
    let resolved = resolve_columns(&columns_of(&df), &FieldCatalog::default());
    assert!(resolved.repeat_flag.is_none());

    let dashboard = build_dashboard(&df, &resolved);
    assert_eq!(dashboard.kpis.total_closed, 2);
    assert_eq!(dashboard.kpis.total_repeated, 0);
    assert_eq!(dashboard.kpis.repeat_percentage, 0.0);
    // Flag-gated visualizations are skipped, not failed.
    assert!(dashboard.repeat_split.is_none());
    assert!(dashboard.product_comparison.is_none());
    assert!(dashboard.monthly_trend.is_none());
}

#[test]
fn empty_subset_is_a_valid_terminal_state() {
    let df = frame(vec![
        ("NUMERO_SOL", vec!["A1"]),
        ("CASO_REPETIDO", vec!["si"]),
        ("FC_CREACION", vec!["2024-01-10"]),
        ("Nombre del Distrito", vec!["Centro"]),
    ]);
    let resolved = resolve_columns(&columns_of(&df), &FieldCatalog::default());
    let filter = SubsetFilter::new().with_district(Some("Norte".to_string()));
    let subset = apply_filter(&df, &resolved, &filter).expect("filter");
    assert_eq!(subset.height(), 0);

    let dashboard = build_dashboard(&subset, &resolved);
    assert_eq!(dashboard.kpis.total_closed, 0);
    assert_eq!(dashboard.kpis.total_repeated, 0);
    assert_eq!(dashboard.kpis.repeat_percentage, 0.0);
    assert_eq!(dashboard.monthly_trend.expect("trend"), vec![]);
    let breakdown = dashboard.district_breakdown.expect("breakdown");
    assert!(breakdown.is_empty());
}

#[test]
fn filters_recompute_metrics_from_the_same_load() {
    let df = frame(vec![
        ("NUMERO_SOL", vec!["A1", "A2", "A3", "A4"]),
        ("CASO_REPETIDO", vec!["si", "no", "si", "no"]),
        ("FC_CREACION", vec![
            "2024-01-10",
            "2024-01-15",
            "2024-02-01",
            "2024-02-20",
        ]),
        ("Tecnologia", vec!["FTTH", "FTTH", "HFC", "HFC"]),
    ]);
    let resolved = resolve_columns(&columns_of(&df), &FieldCatalog::default());

    let everything = build_dashboard(&df, &resolved);
    assert_eq!(everything.kpis.total_closed, 4);
    assert_eq!(everything.kpis.total_repeated, 2);

    let filter = SubsetFilter::new().with_technology(Some("FTTH".to_string()));
    let subset = apply_filter(&df, &resolved, &filter).expect("filter");
    let filtered = build_dashboard(&subset, &resolved);
    assert_eq!(filtered.kpis.total_closed, 2);
    assert_eq!(filtered.kpis.total_repeated, 1);
    assert_eq!(filtered.kpis.repeat_percentage, 50.0);

    // The original load is intact for re-filtering.
    assert_eq!(df.height(), 4);
}
