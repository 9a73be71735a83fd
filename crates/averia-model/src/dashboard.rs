//! Payload types consumed by the presentation layer.
//!
//! Every series is wrapped in `Option`: `None` means the visualization is
//! unavailable because a required column did not resolve, and the caller
//! should skip it with a notice rather than fail.

use serde::{Deserialize, Serialize};

use crate::columns::ResolvedColumns;

/// Headline figures shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    /// Distinct closed incidents (or rows when no incident-id column).
    pub total_closed: u64,
    /// Rows flagged as repeated incidents.
    pub total_repeated: u64,
    /// `total_repeated / total_closed * 100`, `0.0` when nothing closed.
    pub repeat_percentage: f64,
}

impl KpiSnapshot {
    /// Derive the snapshot from the two counts; the percentage keeps full
    /// precision internally and is rounded at display time only.
    #[must_use]
    pub fn from_counts(total_closed: u64, total_repeated: u64) -> Self {
        let repeat_percentage = if total_closed > 0 {
            total_repeated as f64 / total_closed as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total_closed,
            total_repeated,
            repeat_percentage,
        }
    }

    /// Percentage formatted for display, two decimal places.
    #[must_use]
    pub fn percentage_display(&self) -> String {
        format!("{:.2}%", self.repeat_percentage)
    }
}

/// One calendar-month bucket of the trend line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Year-month bucket key, `"YYYY-MM"`.
    pub period: String,
    pub count: u64,
}

/// One group of a top-N categorical breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub label: String,
    pub count: u64,
}

/// Repeated vs non-repeated row counts (the donut chart).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatSplit {
    pub repeated: u64,
    pub not_repeated: u64,
}

/// Closed and repeated counts for one product value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductComparison {
    pub product: String,
    pub closed: u64,
    pub repeated: u64,
}

/// Everything the presentation layer needs for one filtered subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    /// The resolved column map, included for diagnostic display.
    pub columns: ResolvedColumns,
    pub kpis: KpiSnapshot,
    pub monthly_trend: Option<Vec<TrendPoint>>,
    pub district_breakdown: Option<Vec<BreakdownEntry>>,
    pub sector_breakdown: Option<Vec<BreakdownEntry>>,
    pub repeat_split: Option<RepeatSplit>,
    pub product_comparison: Option<Vec<ProductComparison>>,
}
