//! Rendering of the dashboard payload.
//!
//! The core hands over plain semantic values (counts, percentages,
//! labeled series); this crate turns them into terminal tables or a JSON
//! document. Unavailable series render as an informational notice naming
//! the missing field; the dashboard stays usable with partial column
//! coverage.

pub mod json;
pub mod render;

pub use json::dashboard_json;
pub use render::{render_column_report, render_dashboard};
