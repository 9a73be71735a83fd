//! Metric derivation over a filtered subset of the incident dataset.
//!
//! Every computation here is a pure function of (subset, resolved column
//! map): no caching, no mutation of the loaded frame, no ordering hazards
//! between recomputations. Unresolved columns degrade the affected
//! aggregate to zero/empty/`None`; they never error.

pub mod dates;
pub mod engine;
pub mod error;
pub mod filter;

pub use dates::{parse_date, year_month};
pub use engine::{
    TOP_GROUP_LIMIT, build_dashboard, kpi_snapshot, monthly_trend, product_comparison,
    repeat_split, top_breakdown, total_closed, total_repeated,
};
pub use error::{MetricsError, Result};
pub use filter::{SubsetFilter, apply_filter};
