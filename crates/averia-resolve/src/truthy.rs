//! Strict boolean classification of mixed-representation flag values.

use polars::prelude::{AnyValue, Column};

use averia_ingest::{any_to_string, parse_f64};

/// Words that read as "yes" in the exports this serves. Membership is
/// exact after trim/lowercase; "no" is deliberately absent and substring
/// matching is never performed.
const TRUTH_WORDS: [&str; 10] = [
    "1", "true", "si", "sí", "y", "yes", "t", "repetida", "repetido", "s",
];

/// Classifies one raw value.
///
/// True when the trimmed, lowercased text is a truth word, or when it
/// parses as a non-zero number. Blank, missing, and malformed values are
/// false; the two checks are independent, non-exclusive paths.
#[must_use]
pub fn is_truthy(raw: &str) -> bool {
    let value = raw.trim().to_lowercase();
    if TRUTH_WORDS.contains(&value.as_str()) {
        return true;
    }
    // NaN parses as a float but carries no "yes" signal.
    parse_f64(&value).is_some_and(|number| number != 0.0 && !number.is_nan())
}

/// Classifies a whole column; `None` input yields an empty series.
///
/// The result lives only as long as one evaluation: it is recomputed for
/// every filtered subset rather than cached.
#[must_use]
pub fn truthy_series(column: Option<&Column>) -> Vec<bool> {
    let Some(column) = column else {
        return Vec::new();
    };
    (0..column.len())
        .map(|idx| is_truthy(&any_to_string(column.get(idx).unwrap_or(AnyValue::Null))))
        .collect()
}
