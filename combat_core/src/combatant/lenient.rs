//! Lenient field decoding for records produced by the dashboard shell
//!
//! Player and monster records arrive with numbers, numeric strings, `null`
//! or garbage in any stat slot. Everything that is not a finite number
//! decodes to 0 so the formulas never see a missing value.

use crate::standards::Level;
use serde_json::Value;

/// First non-zero value among `keys`, checked in order; 0 when none is set
///
/// Records may carry the same stat under several spellings (`def` and
/// `defense`); an empty or zero spelling never hides a set one.
pub fn field(record: &Value, keys: &[&str]) -> f64 {
    keys.iter()
        .filter_map(|key| record.get(key))
        .map(coerce_number)
        .find(|value| *value != 0.0)
        .unwrap_or(0.0)
}

/// Level from the first non-zero spelling, at least 1
pub fn level_field(record: &Value, keys: &[&str]) -> Level {
    coerce_level(field(record, keys))
}

pub fn coerce_number(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

pub fn coerce_level(value: f64) -> Level {
    if value.is_finite() && value >= 1.0 {
        value.min(Level::MAX as f64).floor() as Level
    } else {
        1
    }
}
