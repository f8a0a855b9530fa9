//! Argument validation for pipeline entry points
//!
//! Checks run before any state is touched, in order: integer, then bounds.

use serde_json::Value;

use super::errors::{QueryError, QueryResult};

/// Largest integer exactly representable in an IEEE-754 double
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Requires a safe (non-fractional) integer
pub fn ensure_integer(operation: &'static str, index: usize, value: &Value) -> QueryResult<i64> {
    let integer = match value {
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Some(i),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER as f64 => {
                Some(f as i64)
            }
            _ => None,
        },
        _ => None,
    };

    match integer {
        Some(i) if i.unsigned_abs() <= MAX_SAFE_INTEGER as u64 => Ok(i),
        _ => Err(QueryError::invalid_argument(
            operation,
            index,
            value.clone(),
            "an integer",
        )),
    }
}

/// Requires `value >= min`
pub fn ensure_min(
    operation: &'static str,
    index: usize,
    value: i64,
    min: i64,
) -> QueryResult<i64> {
    if value < min {
        return Err(QueryError::invalid_argument(
            operation,
            index,
            Value::from(value),
            format!("equal or greater than {}", min),
        ));
    }
    Ok(value)
}

/// Requires a safe integer `>= 0`, returned as a count
pub fn non_negative_count(operation: &'static str, index: usize, value: &Value) -> QueryResult<usize> {
    let integer = ensure_integer(operation, index, value)?;
    let integer = ensure_min(operation, index, integer, 0)?;
    Ok(usize::try_from(integer).unwrap_or(usize::MAX))
}
