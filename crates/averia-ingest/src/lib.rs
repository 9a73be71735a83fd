//! Dataset ingestion.
//!
//! Turns a CSV export into an in-memory string `DataFrame` in source column
//! order, tolerating the usual spreadsheet noise: UTF-8 BOM, title rows
//! above the real header, blank separator rows, and ragged record lengths.
//! Loading is the one fatal boundary of the system; everything after it
//! degrades gracefully.

pub mod csv_table;
pub mod discovery;
pub mod error;
pub mod frame;
pub mod polars_utils;

pub use csv_table::{CsvTable, build_column_hints, read_csv_table};
pub use discovery::{discover_input, list_csv_files};
pub use error::{IngestError, Result};
pub use frame::{dataset_columns, load_dataframe, to_dataframe};
pub use polars_utils::{any_to_string, column_value_string, format_numeric, parse_f64};
