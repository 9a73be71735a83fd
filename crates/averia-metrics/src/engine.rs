//! The aggregate computations behind the dashboard.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use polars::prelude::DataFrame;

use averia_ingest::column_value_string;
use averia_model::{
    BreakdownEntry, Dashboard, KpiSnapshot, ProductComparison, RepeatSplit, ResolvedColumns,
    TrendPoint,
};
use averia_resolve::truthy_series;

use crate::dates::{parse_date, year_month};

/// Breakdowns keep at most this many groups.
pub const TOP_GROUP_LIMIT: usize = 12;

/// The resolved column name, only when it is actually present in `df`.
fn usable_column<'a>(df: &DataFrame, resolved: Option<&'a str>) -> Option<&'a str> {
    resolved.filter(|name| df.column(name).is_ok())
}

fn repeat_flags(df: &DataFrame, resolved: &ResolvedColumns) -> Option<Vec<bool>> {
    let name = usable_column(df, resolved.repeat_flag.as_deref())?;
    let column = df.column(name).ok()?;
    Some(truthy_series(Some(column)))
}

/// Distinct stringified values in a column; all-missing cells collapse
/// into one empty-string value.
fn distinct_count(df: &DataFrame, column: &str) -> u64 {
    let mut values = BTreeSet::new();
    for idx in 0..df.height() {
        values.insert(column_value_string(df, column, idx));
    }
    values.len() as u64
}

/// Closed incidents in the subset: distinct incident ids when that column
/// resolved (multiple touch-points on one incident count once), otherwise
/// the subset row count.
#[must_use]
pub fn total_closed(df: &DataFrame, resolved: &ResolvedColumns) -> u64 {
    match usable_column(df, resolved.incident_id.as_deref()) {
        Some(column) => distinct_count(df, column),
        None => df.height() as u64,
    }
}

/// Rows the truthy classifier marks as repeated; 0 when the repeat-flag
/// column did not resolve.
#[must_use]
pub fn total_repeated(df: &DataFrame, resolved: &ResolvedColumns) -> u64 {
    match repeat_flags(df, resolved) {
        Some(flags) => flags.into_iter().filter(|flag| *flag).count() as u64,
        None => 0,
    }
}

/// The headline KPI figures for one subset.
#[must_use]
pub fn kpi_snapshot(df: &DataFrame, resolved: &ResolvedColumns) -> KpiSnapshot {
    KpiSnapshot::from_counts(total_closed(df, resolved), total_repeated(df, resolved))
}

/// Incidents per calendar month, chronologically ordered.
///
/// `None` when neither date column resolved. Rows whose date does not
/// parse are dropped from this aggregate only; an empty bucket list is a
/// valid result.
#[must_use]
pub fn monthly_trend(df: &DataFrame, resolved: &ResolvedColumns) -> Option<Vec<TrendPoint>> {
    let date_column = usable_column(df, resolved.date_column())?;
    let id_column = usable_column(df, resolved.incident_id.as_deref());

    let mut distinct_ids: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut row_counts: BTreeMap<String, u64> = BTreeMap::new();
    for idx in 0..df.height() {
        let Some(date) = parse_date(&column_value_string(df, date_column, idx)) else {
            continue;
        };
        let bucket = year_month(date);
        match id_column {
            Some(column) => {
                distinct_ids
                    .entry(bucket)
                    .or_default()
                    .insert(column_value_string(df, column, idx));
            }
            None => *row_counts.entry(bucket).or_insert(0) += 1,
        }
    }

    let points: Vec<TrendPoint> = if id_column.is_some() {
        distinct_ids
            .into_iter()
            .map(|(period, ids)| TrendPoint {
                period,
                count: ids.len() as u64,
            })
            .collect()
    } else {
        row_counts
            .into_iter()
            .map(|(period, count)| TrendPoint { period, count })
            .collect()
    };
    Some(points)
}

/// Row counts per stringified group value, descending, capped at `limit`.
///
/// Missing cells group under the empty string so the counts always sum to
/// the subset's row count. Ties keep first-seen group order.
#[must_use]
pub fn top_breakdown(df: &DataFrame, column: &str, limit: usize) -> Vec<BreakdownEntry> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u64> = HashMap::new();
    for idx in 0..df.height() {
        let label = column_value_string(df, column, idx);
        if !counts.contains_key(&label) {
            order.push(label.clone());
        }
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut entries: Vec<BreakdownEntry> = order
        .into_iter()
        .map(|label| {
            let count = counts[&label];
            BreakdownEntry { label, count }
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}

/// Repeated vs non-repeated row counts; `None` without a repeat-flag
/// column.
#[must_use]
pub fn repeat_split(df: &DataFrame, resolved: &ResolvedColumns) -> Option<RepeatSplit> {
    let flags = repeat_flags(df, resolved)?;
    let repeated = flags.iter().filter(|flag| **flag).count() as u64;
    Some(RepeatSplit {
        repeated,
        not_repeated: flags.len() as u64 - repeated,
    })
}

/// Closed vs repeated counts per product, in first-seen product order.
///
/// Counts are distinct incident ids per (product, flag) pair when the id
/// column resolved, rows otherwise; a pair with no rows contributes 0.
/// Grouping is row-level, so an id flagged both ways across rows counts
/// in both buckets. `None` unless both the product and repeat-flag
/// columns resolved.
#[must_use]
pub fn product_comparison(
    df: &DataFrame,
    resolved: &ResolvedColumns,
) -> Option<Vec<ProductComparison>> {
    let product_column = usable_column(df, resolved.product.as_deref())?;
    let flags = repeat_flags(df, resolved)?;
    let id_column = usable_column(df, resolved.incident_id.as_deref());

    let mut order: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut distinct_ids: HashMap<(String, bool), BTreeSet<String>> = HashMap::new();
    let mut row_counts: HashMap<(String, bool), u64> = HashMap::new();
    for idx in 0..df.height() {
        let product = column_value_string(df, product_column, idx);
        if seen.insert(product.clone()) {
            order.push(product.clone());
        }
        let flag = flags[idx];
        match id_column {
            Some(column) => {
                distinct_ids
                    .entry((product, flag))
                    .or_default()
                    .insert(column_value_string(df, column, idx));
            }
            None => *row_counts.entry((product, flag)).or_insert(0) += 1,
        }
    }

    let count_for = |product: &str, flag: bool| -> u64 {
        let key = (product.to_string(), flag);
        if id_column.is_some() {
            distinct_ids.get(&key).map_or(0, |ids| ids.len() as u64)
        } else {
            row_counts.get(&key).copied().unwrap_or(0)
        }
    };

    Some(
        order
            .into_iter()
            .map(|product| {
                let closed = count_for(&product, false);
                let repeated = count_for(&product, true);
                ProductComparison {
                    product,
                    closed,
                    repeated,
                }
            })
            .collect(),
    )
}

/// Assembles the full presentation payload for one filtered subset.
#[must_use]
pub fn build_dashboard(df: &DataFrame, resolved: &ResolvedColumns) -> Dashboard {
    let kpis = kpi_snapshot(df, resolved);
    let district_breakdown = usable_column(df, resolved.district.as_deref())
        .map(|column| top_breakdown(df, column, TOP_GROUP_LIMIT));
    let sector_breakdown = usable_column(df, resolved.sector.as_deref())
        .map(|column| top_breakdown(df, column, TOP_GROUP_LIMIT));
    let dashboard = Dashboard {
        columns: resolved.clone(),
        kpis,
        monthly_trend: monthly_trend(df, resolved),
        district_breakdown,
        sector_breakdown,
        repeat_split: repeat_split(df, resolved),
        product_comparison: product_comparison(df, resolved),
    };
    tracing::debug!(
        rows = df.height(),
        total_closed = dashboard.kpis.total_closed,
        total_repeated = dashboard.kpis.total_repeated,
        "dashboard computed"
    );
    dashboard
}
