//! Core data model for the incident dashboard.
//!
//! Everything downstream of ingestion works in terms of *semantic fields*
//! (incident id, repeat flag, dates, organizational dimensions) rather than
//! raw column headers. This crate defines those fields, the catalog of
//! candidate header names per field, the resolved column map produced once
//! per dataset load, and the plain payload types the presentation layer
//! consumes.

pub mod catalog;
pub mod columns;
pub mod dashboard;
pub mod error;
pub mod field;

pub use catalog::FieldCatalog;
pub use columns::{ColumnHint, ResolvedColumns};
pub use dashboard::{
    BreakdownEntry, Dashboard, KpiSnapshot, ProductComparison, RepeatSplit, TrendPoint,
};
pub use error::{ModelError, Result};
pub use field::SemanticField;
