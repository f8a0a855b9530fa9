//! Strict value equality for condition matching
//!
//! No type coercion: a string never equals a number, `null` only equals
//! `null`. Numbers compare by numeric value regardless of representation.

use serde_json::{Number, Value};

/// Strict equality between a cell value and an expected value
pub fn strict_eq(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::Array(a), Value::Array(b)) => sequence_eq(a, b),
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, value)| b.get(key).is_some_and(|other| strict_eq(value, other)))
        }
        _ => actual == expected,
    }
}

/// Ordered, element-wise equality of two sequences of identical length
pub fn sequence_eq(actual: &[Value], expected: &[Value]) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected.iter())
            .all(|(a, b)| strict_eq(a, b))
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
