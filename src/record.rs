//! Record access for query execution
//!
//! A record is any structured row whose fields can be read by name and
//! enumerated in their own order. The engine never mutates records.

use serde_json::{Map, Value};

/// A structured row that can be queried
pub trait Record: Clone {
    /// Returns the value of a field, or None if the field is absent
    fn field(&self, name: &str) -> Option<&Value>;

    /// Returns the record's own field names in enumeration order
    fn field_names(&self) -> Vec<&str>;

    /// Returns the first own field name, if any
    fn first_field_name(&self) -> Option<&str> {
        self.field_names().into_iter().next()
    }
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    fn field_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn first_field_name(&self) -> Option<&str> {
        self.keys().next().map(String::as_str)
    }
}

/// Only JSON objects carry fields; every other JSON value is a record
/// without fields.
impl Record for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(name),
            _ => None,
        }
    }

    fn field_names(&self) -> Vec<&str> {
        match self {
            Value::Object(map) => map.field_names(),
            _ => Vec::new(),
        }
    }

    fn first_field_name(&self) -> Option<&str> {
        match self {
            Value::Object(map) => map.first_field_name(),
            _ => None,
        }
    }
}
