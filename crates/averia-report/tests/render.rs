use std::collections::BTreeMap;

use averia_model::{
    BreakdownEntry, ColumnHint, Dashboard, KpiSnapshot, ProductComparison, RepeatSplit,
    ResolvedColumns, TrendPoint,
};
use averia_report::{dashboard_json, render_column_report, render_dashboard};

fn sample_dashboard() -> Dashboard {
    let mut columns = ResolvedColumns::default();
    columns.incident_id = Some("NUMERO_SOL".to_string());
    columns.repeat_flag = Some("CASO_REPETIDO".to_string());
    columns.closure_date = Some("Fecha de Cierre".to_string());
    Dashboard {
        columns,
        kpis: KpiSnapshot::from_counts(4, 1),
        monthly_trend: Some(vec![
            TrendPoint {
                period: "2024-01".to_string(),
                count: 3,
            },
            TrendPoint {
                period: "2024-02".to_string(),
                count: 1,
            },
        ]),
        district_breakdown: None,
        sector_breakdown: Some(vec![BreakdownEntry {
            label: "NORTE".to_string(),
            count: 4,
        }]),
        repeat_split: Some(RepeatSplit {
            repeated: 1,
            not_repeated: 3,
        }),
        product_comparison: Some(vec![ProductComparison {
            product: "Fibra".to_string(),
            closed: 3,
            repeated: 1,
        }]),
    }
}

#[test]
fn dashboard_renders_available_sections_and_notices() {
    let text = render_dashboard(&sample_dashboard());
    assert!(text.contains("Key indicators"));
    assert!(text.contains("25.00%"));
    assert!(text.contains("2024-01"));
    assert!(text.contains("NORTE"));
    assert!(text.contains("Fibra"));
    // The unresolved district renders as a notice, not a table.
    assert!(text.contains("Top districts: unavailable (district column not resolved)"));
}

#[test]
fn column_report_lists_fields_and_hints() {
    let mut hints = BTreeMap::new();
    hints.insert(
        "NUMERO_SOL".to_string(),
        ColumnHint {
            is_numeric: true,
            unique_ratio: 1.0,
            null_ratio: 0.0,
        },
    );
    let headers = vec!["NUMERO_SOL".to_string(), "ESTADO".to_string()];
    let mut resolved = ResolvedColumns::default();
    resolved.incident_id = Some("NUMERO_SOL".to_string());

    let text = render_column_report(&headers, &resolved, &hints);
    assert!(text.contains("Resolved fields"));
    assert!(text.contains("Incident id"));
    assert!(text.contains("(not found)"));
    assert!(text.contains("ESTADO"));
}

#[test]
fn json_payload_is_stable() {
    let dashboard = Dashboard {
        columns: ResolvedColumns::default(),
        kpis: KpiSnapshot::from_counts(2, 1),
        monthly_trend: None,
        district_breakdown: None,
        sector_breakdown: None,
        repeat_split: None,
        product_comparison: None,
    };
    let json = dashboard_json(&dashboard).expect("serialize");
    insta::assert_snapshot!(json, @r#"
    {
      "columns": {
        "incident_id": null,
        "repeat_flag": null,
        "creation_date": null,
        "closure_date": null,
        "district": null,
        "product": null,
        "technology": null,
        "city": null,
        "sector": null
      },
      "kpis": {
        "total_closed": 2,
        "total_repeated": 1,
        "repeat_percentage": 50.0
      },
      "monthly_trend": null,
      "district_breakdown": null,
      "sector_breakdown": null,
      "repeat_split": null,
      "product_comparison": null
    }
    "#);
}
