//! Raw CSV reading with header-row detection.
//!
//! Executive exports often carry a logo/title block above the real header
//! row. Instead of trusting record 0, the reader scores the first few rows
//! and picks the last header-looking row before data starts.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use csv::ReaderBuilder;

use averia_model::ColumnHint;

use crate::error::{IngestError, Result};

/// A CSV file reduced to a header list plus string rows, both in source
/// order. Rows are padded/truncated to the header width.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

fn clean_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    // Collapse internal whitespace runs so "Numero  Sol" and "Numero Sol"
    // carry the same header.
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn clean_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

#[derive(Debug, Default, Clone, Copy)]
struct RowShape {
    total: usize,
    non_empty: usize,
    numeric: usize,
    alphabetic: usize,
}

impl RowShape {
    fn ratio(self, part: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            part as f64 / self.total as f64
        }
    }

    fn looks_like_header(self) -> bool {
        self.ratio(self.non_empty) >= 0.8
            && self.ratio(self.alphabetic) >= 0.5
            && self.ratio(self.numeric) <= 0.1
    }

    fn looks_like_data(self) -> bool {
        self.ratio(self.numeric) >= 0.2
    }
}

fn row_shape(row: &[String]) -> RowShape {
    let mut shape = RowShape {
        total: row.len(),
        ..RowShape::default()
    };
    for cell in row {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            continue;
        }
        shape.non_empty += 1;
        if trimmed.parse::<f64>().is_ok() {
            shape.numeric += 1;
        }
        if trimmed.chars().any(|ch| ch.is_alphabetic()) {
            shape.alphabetic += 1;
        }
    }
    shape
}

/// Index of the header row among the leading rows.
fn detect_header_row(rows: &[Vec<String>]) -> usize {
    let probe = rows.len().min(5);
    let shapes: Vec<RowShape> = rows.iter().take(probe).map(|row| row_shape(row)).collect();
    let data_start = shapes
        .iter()
        .position(|shape| shape.looks_like_data())
        .unwrap_or(1)
        .max(1);
    let mut candidate = 0usize;
    for (idx, shape) in shapes.iter().enumerate().take(data_start) {
        if shape.looks_like_header() {
            candidate = idx;
        }
    }
    candidate
}

/// Reads a CSV file into a [`CsvTable`].
///
/// Fully blank rows are dropped, the header row is detected among the
/// first rows, and every data row is sized to the header width.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(clean_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(CsvTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }

    let header_index = detect_header_row(&raw_rows);
    if header_index > 0 {
        tracing::debug!(skipped = header_index, "skipped rows above the header");
    }
    let headers: Vec<String> = raw_rows[header_index].iter().map(|v| clean_header(v)).collect();

    let mut rows = Vec::with_capacity(raw_rows.len() - header_index - 1);
    for record in raw_rows.iter().skip(header_index + 1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).cloned().unwrap_or_default());
        }
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}

/// Per-column shape summaries for the diagnostic view.
#[must_use]
pub fn build_column_hints(table: &CsvTable) -> BTreeMap<String, ColumnHint> {
    let mut hints = BTreeMap::new();
    let row_count = table.rows.len();
    for (col_idx, header) in table.headers.iter().enumerate() {
        let mut non_empty = 0usize;
        let mut numeric = 0usize;
        let mut uniques = BTreeSet::new();
        for row in &table.rows {
            let value = row.get(col_idx).map(String::as_str).unwrap_or("");
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }
            non_empty += 1;
            uniques.insert(trimmed.to_string());
            if trimmed.parse::<f64>().is_ok() {
                numeric += 1;
            }
        }
        let null_ratio = if row_count == 0 {
            1.0
        } else {
            (row_count - non_empty) as f64 / row_count as f64
        };
        let unique_ratio = if non_empty == 0 {
            0.0
        } else {
            uniques.len() as f64 / non_empty as f64
        };
        hints.insert(
            header.clone(),
            ColumnHint {
                is_numeric: non_empty > 0 && numeric == non_empty,
                unique_ratio,
                null_ratio,
            },
        );
    }
    hints
}
