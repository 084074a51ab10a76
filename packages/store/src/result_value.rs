//! Parsing and ranking of result values.
//!
//! A TIME value is colon-delimited (`hh:mm:ss:ms`, `hh:mm:ss`, `mm:ss` or bare
//! seconds) and converts to seconds as a float. DISTANCE and POINTS values are
//! plain numbers.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{ResultRecord, ResultType};

/// Shape a TIME value must have to pass form validation.
static TIME_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}:\d{2}:\d{1,3}$").expect("valid regex"));

/// Whether `value` is written as `hh:mm:ss:fractional`.
pub fn is_valid_time(value: &str) -> bool {
    TIME_FORMAT.is_match(value)
}

/// Convert a colon-delimited time to seconds.
///
/// Returns `None` when any part is not a whole number or there are more than
/// four parts.
pub fn parse_time_seconds(value: &str) -> Option<f64> {
    let parts = value
        .trim()
        .split(':')
        .map(|p| p.parse::<u64>().ok().map(|n| n as f64))
        .collect::<Option<Vec<_>>>()?;

    match parts.as_slice() {
        [h, m, s, ms] => Some(h * 3600.0 + m * 60.0 + s + ms / 1000.0),
        [h, m, s] => Some(h * 3600.0 + m * 60.0 + s),
        [m, s] => Some(m * 60.0 + s),
        [s] => Some(*s),
        _ => None,
    }
}

/// Parse a DISTANCE or POINTS value.
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Numeric value used for ranking, per result type.
pub fn numeric_value(result_type: ResultType, value: &str) -> Option<f64> {
    match result_type {
        ResultType::Time => parse_time_seconds(value),
        ResultType::Distance | ResultType::Points => parse_number(value),
    }
}

/// Ranking order: best performance first.
///
/// TIME ascending, DISTANCE and POINTS descending. Results of different types
/// are grouped by type; unparseable values go last.
pub fn compare_results(a: &ResultRecord, b: &ResultRecord) -> Ordering {
    if a.result_type != b.result_type {
        return type_rank(a.result_type).cmp(&type_rank(b.result_type));
    }

    let va = numeric_value(a.result_type, &a.result_value);
    let vb = numeric_value(b.result_type, &b.result_value);
    match (va, vb) {
        (Some(x), Some(y)) => {
            let ord = x.total_cmp(&y);
            if a.result_type.higher_is_better() {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn type_rank(t: ResultType) -> u8 {
    match t {
        ResultType::Time => 0,
        ResultType::Distance => 1,
        ResultType::Points => 2,
    }
}
