//! Row sorting for query execution
//!
//! Multi-key, stable, deterministic. Each key compares independently and
//! ties fall through to the next key.

use std::cmp::Ordering;

use serde_json::Value;

use crate::record::Record;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort specification for a single key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to sort by
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Parses `"field"` (ascending) or `"-field"` (descending)
    pub fn parse(key: &str) -> Self {
        match key.strip_prefix('-') {
            Some(field) => Self::desc(field),
            None => Self::asc(key),
        }
    }
}

/// Sorts rows by a list of sort keys
pub struct RowSorter;

impl RowSorter {
    /// Sorts rows according to the sort keys, first key most significant.
    ///
    /// Rows equal on every key keep their input order.
    pub fn sort<R: Record>(rows: &mut [R], specs: &[SortSpec]) {
        if specs.is_empty() {
            return;
        }
        rows.sort_by(|a, b| Self::compare_rows(a, b, specs));
    }

    /// Compares two rows key by key
    pub fn compare_rows<R: Record>(a: &R, b: &R, specs: &[SortSpec]) -> Ordering {
        for spec in specs {
            let ordering = Self::compare_values(a.field(&spec.field), b.field(&spec.field));
            let ordering = match spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Compares two JSON values for sorting.
    ///
    /// Ordering rules:
    /// - absent < null < bool < number < string < array < object
    /// - For same types, natural ordering
    pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a_val), Some(b_val)) => {
                // Compare by type first
                let type_order = |v: &Value| -> u8 {
                    match v {
                        Value::Null => 0,
                        Value::Bool(_) => 1,
                        Value::Number(_) => 2,
                        Value::String(_) => 3,
                        Value::Array(_) => 4,
                        Value::Object(_) => 5,
                    }
                };

                let a_type = type_order(a_val);
                let b_type = type_order(b_val);

                if a_type != b_type {
                    return a_type.cmp(&b_type);
                }

                match (a_val, b_val) {
                    (Value::Bool(a_b), Value::Bool(b_b)) => a_b.cmp(b_b),
                    (Value::Number(a_n), Value::Number(b_n)) => {
                        if let (Some(a_i), Some(b_i)) = (a_n.as_i64(), b_n.as_i64()) {
                            return a_i.cmp(&b_i);
                        }
                        if let (Some(a_u), Some(b_u)) = (a_n.as_u64(), b_n.as_u64()) {
                            return a_u.cmp(&b_u);
                        }
                        let a_f = a_n.as_f64().unwrap_or(0.0);
                        let b_f = b_n.as_f64().unwrap_or(0.0);
                        a_f.total_cmp(&b_f)
                    }
                    (Value::String(a_s), Value::String(b_s)) => a_s.cmp(b_s),
                    // Null equals null; arrays and objects are not ordered
                    _ => Ordering::Equal,
                }
            }
        }
    }
}
