//! Command implementations.

use std::path::Path;

use anyhow::{Context, Result};

use averia_ingest::{
    build_column_hints, dataset_columns, discover_input, read_csv_table, to_dataframe,
};
use averia_metrics::{SubsetFilter, apply_filter, build_dashboard};
use averia_model::{FieldCatalog, SemanticField};
use averia_report::{dashboard_json, render_column_report, render_dashboard};
use averia_resolve::resolve_columns;

use crate::cli::{ColumnsArgs, DashboardArgs};

fn load_catalog(path: Option<&Path>) -> Result<FieldCatalog> {
    match path {
        Some(path) => FieldCatalog::from_json_file(path)
            .with_context(|| format!("load field catalog {}", path.display())),
        None => Ok(FieldCatalog::default()),
    }
}

pub fn run_dashboard(args: &DashboardArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let input = discover_input(&args.input)?;
    let df = averia_ingest::load_dataframe(&input)?;

    let resolved = resolve_columns(&dataset_columns(&df), &catalog);
    tracing::info!(
        resolved = resolved.resolved_count(),
        total = SemanticField::ALL.len(),
        "column resolution finished"
    );

    let filter = SubsetFilter::new()
        .with_date_range(args.date_from, args.date_to)
        .with_district(args.district.clone())
        .with_product(args.product.clone())
        .with_technology(args.technology.clone());
    let subset = apply_filter(&df, &resolved, &filter)?;
    if !filter.is_empty() {
        tracing::info!(rows = subset.height(), of = df.height(), "filter applied");
    }

    let dashboard = build_dashboard(&subset, &resolved);
    if let Some(path) = &args.json_out {
        let payload = dashboard_json(&dashboard)?;
        std::fs::write(path, payload)
            .with_context(|| format!("write {}", path.display()))?;
        println!("Wrote {}", path.display());
    } else if args.json {
        println!("{}", dashboard_json(&dashboard)?);
    } else {
        print!("{}", render_dashboard(&dashboard));
    }
    Ok(())
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let input = discover_input(&args.input)?;
    let table = read_csv_table(&input)?;
    let hints = build_column_hints(&table);
    let df = to_dataframe(&table)?;
    let headers = dataset_columns(&df);
    let resolved = resolve_columns(&headers, &catalog);
    print!("{}", render_column_report(&headers, &resolved, &hints));
    Ok(())
}

pub fn run_fields() {
    let catalog = FieldCatalog::default();
    for field in SemanticField::ALL {
        println!("{}: {}", field.key(), catalog.candidates(field).join(", "));
    }
}
