//! `DataFrame` construction from a [`CsvTable`].
//!
//! Every column is ingested as UTF-8 strings in source order; empty cells
//! become nulls. Type interpretation (dates, truthy flags, numbers) is a
//! per-metric concern downstream, so nothing is coerced here.

use std::collections::BTreeMap;
use std::path::Path;

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use crate::csv_table::{CsvTable, read_csv_table};
use crate::error::Result;

/// Disambiguates duplicate raw headers with a numeric suffix so the frame
/// can hold both columns ("ESTADO", "ESTADO_2", ...).
fn dedupe_headers(headers: &[String]) -> Vec<String> {
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    let mut out = Vec::with_capacity(headers.len());
    for header in headers {
        let count = seen.entry(header.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            out.push(header.clone());
        } else {
            out.push(format!("{header}_{count}"));
        }
    }
    out
}

/// Builds a string `DataFrame` from the table, one nullable UTF-8 column
/// per header in source order.
pub fn to_dataframe(table: &CsvTable) -> Result<DataFrame> {
    let headers = dedupe_headers(&table.headers);
    let mut columns: Vec<Column> = Vec::with_capacity(headers.len());
    for (col_idx, header) in headers.iter().enumerate() {
        let mut values: Vec<Option<String>> = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            let cell = row.get(col_idx).map(String::as_str).unwrap_or("");
            if cell.is_empty() {
                values.push(None);
            } else {
                values.push(Some(cell.to_string()));
            }
        }
        columns.push(Series::new(header.as_str().into(), values).into());
    }
    Ok(DataFrame::new(columns)?)
}

/// Reads a CSV file straight into a string `DataFrame`.
pub fn load_dataframe(path: &Path) -> Result<DataFrame> {
    let table = read_csv_table(path)?;
    if table.is_empty() {
        tracing::warn!(path = %path.display(), "no header row found; dataset is empty");
    }
    let df = to_dataframe(&table)?;
    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded dataset"
    );
    Ok(df)
}

/// Dataset column names in frame order, as owned strings.
#[must_use]
pub fn dataset_columns(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}
