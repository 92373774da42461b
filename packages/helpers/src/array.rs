//! Coercion of arbitrary values into sequences

use crate::value::{Record, Value};

/// Turn any value into a sequence of values
///
/// - falsy values give an empty sequence
/// - arrays give their elements in order
/// - array-likes (records with a numeric `length`, binary buffers) give a
///   materialized copy of their indexed elements
/// - anything else gives a one-element sequence holding the value
#[must_use]
pub fn make_array(candidate: &Value) -> Vec<Value> {
    if !candidate.is_truthy() {
        return Vec::new();
    }

    match candidate {
        Value::Array(items) => items.snapshot(),
        Value::Bytes(bytes) => bytes.iter().map(|b| Value::from(u32::from(*b))).collect(),
        Value::Record(record) => {
            let record = record.read();
            let Some(len) = array_like_length(&record) else {
                return vec![candidate.clone()];
            };

            let mut items = Vec::new();
            if items.try_reserve_exact(len).is_err() {
                log::debug!("array-like length {len} cannot be materialized, wrapping instead");
                return vec![candidate.clone()];
            }
            items.extend(
                (0..len).map(|idx| record.get(&idx.to_string()).cloned().unwrap_or_default()),
            );
            items
        }
        other => vec![other.clone()],
    }
}

/// Element count of a record that exposes a `length` key
///
/// The length is converted the way array slicing converts it: truncated
/// towards zero, with negative, `NaN` and non-numeric lengths counting as
/// zero elements. Lengths are capped at the largest array length,
/// `u32::MAX`.
fn array_like_length(record: &Record) -> Option<usize> {
    let length = record.get("length")?;
    let n = match length {
        Value::Number(n) => *n,
        Value::Bool(true) => 1.0,
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_nan() || n <= 0.0 {
        return Some(0);
    }
    let n = n.trunc().min(f64::from(u32::MAX));
    // in range after the cap above
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let len = n as usize;
    Some(len)
}
