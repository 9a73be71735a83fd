//! Pure subset filtering.
//!
//! Filtering never mutates the loaded frame: it builds a row mask and
//! produces a new subset, so the original load stays available for
//! re-filtering. A filter that names an unresolved column is a no-op,
//! so the dashboard stays usable with partial column coverage.

use chrono::NaiveDate;
use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};

use averia_ingest::column_value_string;
use averia_model::ResolvedColumns;

use crate::dates::parse_date;
use crate::error::Result;

/// Criteria for one evaluation's subset.
#[derive(Debug, Clone, Default)]
pub struct SubsetFilter {
    /// Inclusive lower date bound, applied to the preferred date column.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub date_to: Option<NaiveDate>,
    pub district: Option<String>,
    pub product: Option<String>,
    pub technology: Option<String>,
}

impl SubsetFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    #[must_use]
    pub fn with_district(mut self, district: Option<String>) -> Self {
        self.district = district;
        self
    }

    #[must_use]
    pub fn with_product(mut self, product: Option<String>) -> Self {
        self.product = product;
        self
    }

    #[must_use]
    pub fn with_technology(mut self, technology: Option<String>) -> Self {
        self.technology = technology;
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.date_from.is_none()
            && self.date_to.is_none()
            && self.district.is_none()
            && self.product.is_none()
            && self.technology.is_none()
    }
}

fn apply_date_bounds(
    df: &DataFrame,
    date_column: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    keep: &mut [bool],
) {
    for (idx, slot) in keep.iter_mut().enumerate() {
        if !*slot {
            continue;
        }
        match parse_date(&column_value_string(df, date_column, idx)) {
            Some(date) => {
                if from.is_some_and(|bound| date < bound) || to.is_some_and(|bound| date > bound) {
                    *slot = false;
                }
            }
            // A row without a usable date cannot satisfy a date bound.
            None => *slot = false,
        }
    }
}

fn apply_equals(df: &DataFrame, column: &str, expected: &str, keep: &mut [bool]) {
    let expected = expected.trim();
    for (idx, slot) in keep.iter_mut().enumerate() {
        if !*slot {
            continue;
        }
        if column_value_string(df, column, idx).trim() != expected {
            *slot = false;
        }
    }
}

/// Produces the filtered subset as a new frame.
pub fn apply_filter(
    df: &DataFrame,
    resolved: &ResolvedColumns,
    filter: &SubsetFilter,
) -> Result<DataFrame> {
    if filter.is_empty() {
        return Ok(df.clone());
    }
    let mut keep = vec![true; df.height()];

    if filter.date_from.is_some() || filter.date_to.is_some() {
        match resolved.date_column().filter(|name| df.column(name).is_ok()) {
            Some(date_column) => {
                apply_date_bounds(df, date_column, filter.date_from, filter.date_to, &mut keep);
            }
            None => tracing::warn!("date filter requested but no date column resolved; skipping"),
        }
    }

    let categorical = [
        (filter.district.as_deref(), resolved.district.as_deref()),
        (filter.product.as_deref(), resolved.product.as_deref()),
        (filter.technology.as_deref(), resolved.technology.as_deref()),
    ];
    for (expected, column) in categorical {
        let (Some(expected), Some(column)) = (expected, column) else {
            continue;
        };
        if df.column(column).is_ok() {
            apply_equals(df, column, expected, &mut keep);
        }
    }

    let mask = BooleanChunked::from_slice("subset".into(), &keep);
    Ok(df.filter(&mask)?)
}

#[cfg(test)]
mod tests {
    use polars::prelude::{Column, DataFrame, NamedFrom, Series};

    use super::*;

    fn frame() -> DataFrame {
        let columns: Vec<Column> = vec![
            Series::new(
                "FC_CREACION".into(),
                vec!["2024-01-10", "2024-02-05", "2024-03-01"],
            )
            .into(),
            Series::new("distrito".into(), vec!["Centro", "Norte", "Centro"]).into(),
        ];
        DataFrame::new(columns).expect("frame")
    }

    fn resolved() -> ResolvedColumns {
        let mut resolved = ResolvedColumns::default();
        resolved.creation_date = Some("FC_CREACION".to_string());
        resolved.district = Some("distrito".to_string());
        resolved
    }

    #[test]
    fn empty_filter_keeps_every_row() {
        let df = frame();
        let subset = apply_filter(&df, &resolved(), &SubsetFilter::new()).expect("filter");
        assert_eq!(subset.height(), 3);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let df = frame();
        let filter = SubsetFilter::new().with_date_range(
            NaiveDate::from_ymd_opt(2024, 2, 5),
            NaiveDate::from_ymd_opt(2024, 3, 1),
        );
        let subset = apply_filter(&df, &resolved(), &filter).expect("filter");
        assert_eq!(subset.height(), 2);
    }

    #[test]
    fn categorical_filter_matches_trimmed_values() {
        let df = frame();
        let filter = SubsetFilter::new().with_district(Some(" Centro ".to_string()));
        let subset = apply_filter(&df, &resolved(), &filter).expect("filter");
        assert_eq!(subset.height(), 2);
    }

    #[test]
    fn filter_on_unresolved_column_is_a_no_op() {
        let df = frame();
        let filter = SubsetFilter::new().with_product(Some("Fibra".to_string()));
        let subset = apply_filter(&df, &resolved(), &filter).expect("filter");
        assert_eq!(subset.height(), 3);
    }

    #[test]
    fn original_frame_is_untouched() {
        let df = frame();
        let filter = SubsetFilter::new().with_district(Some("Norte".to_string()));
        let subset = apply_filter(&df, &resolved(), &filter).expect("filter");
        assert_eq!(subset.height(), 1);
        assert_eq!(df.height(), 3);
    }
}
