//! Condition specifications
//!
//! A `Conditions` value maps field names to a `Condition`. Every specified
//! field must be satisfied for a row to match; unspecified fields impose no
//! constraint.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

/// A caller-supplied test over a single cell value.
///
/// Receives `None` when the field is absent from the row.
pub type CellPredicate = Arc<dyn Fn(Option<&Value>) -> bool + Send + Sync>;

/// How a single field is validated
#[derive(Clone)]
pub enum Condition {
    /// Strict equality with a scalar value
    Literal(Value),
    /// Arbitrary test over the cell value
    Predicate(CellPredicate),
    /// Ordered, element-wise equality with a sequence
    Sequence(Vec<Value>),
    /// Recursive match against an object-valued cell
    Nested(Conditions),
}

impl Condition {
    /// Creates a predicate condition
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    {
        Condition::Predicate(Arc::new(f))
    }

    /// Returns true if this condition is ignored by the null-tolerant filter
    pub fn is_null(&self) -> bool {
        matches!(self, Condition::Literal(Value::Null))
    }

    /// Returns the kind name for log output
    pub fn kind(&self) -> &'static str {
        match self {
            Condition::Literal(_) => "literal",
            Condition::Predicate(_) => "predicate",
            Condition::Sequence(_) => "sequence",
            Condition::Nested(_) => "nested",
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            Condition::Predicate(_) => f.write_str("Predicate(..)"),
            Condition::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Condition::Nested(nested) => f.debug_tuple("Nested").field(nested).finish(),
        }
    }
}

/// JSON arrays become sequences, objects become nested specifications,
/// everything else is a literal.
impl From<Value> for Condition {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Condition::Sequence(items),
            Value::Object(map) => Condition::Nested(Conditions::from_map(map)),
            other => Condition::Literal(other),
        }
    }
}

impl From<Conditions> for Condition {
    fn from(conditions: Conditions) -> Self {
        Condition::Nested(conditions)
    }
}

/// A condition specification: field name to condition, in insertion order
#[derive(Debug, Clone, Default)]
pub struct Conditions {
    entries: Vec<(String, Condition)>,
}

impl Conditions {
    /// Creates an empty specification (matches every row)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a specification from a JSON object.
    ///
    /// Any non-object value yields an empty specification.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(map),
            _ => Self::new(),
        }
    }

    /// Builds a specification from a JSON map
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(field, value)| (field, Condition::from(value)))
                .collect(),
        }
    }

    /// Adds a condition for a field, replacing any earlier one
    pub fn with(mut self, field: impl Into<String>, condition: impl Into<Condition>) -> Self {
        let field = field.into();
        let condition = condition.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = condition,
            None => self.entries.push((field, condition)),
        }
        self
    }

    /// Field must equal the value (arrays and objects follow `Condition::from`)
    pub fn eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(field, Condition::from(value.into()))
    }

    /// Field must satisfy the predicate
    pub fn matching<F>(self, field: impl Into<String>, f: F) -> Self
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    {
        self.with(field, Condition::predicate(f))
    }

    /// Field must be a sequence equal to `items`, in order
    pub fn sequence(self, field: impl Into<String>, items: Vec<Value>) -> Self {
        self.with(field, Condition::Sequence(items))
    }

    /// Field must be an object matching `nested`
    pub fn nested(self, field: impl Into<String>, nested: Conditions) -> Self {
        self.with(field, Condition::Nested(nested))
    }

    /// Field must equal the value if present; `None` stores `null`, which the
    /// null-tolerant filter skips
    pub fn optional<V: Into<Value>>(self, field: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.eq(field, v),
            None => self.with(field, Condition::Literal(Value::Null)),
        }
    }

    /// Returns the condition for a field
    pub fn get(&self, field: &str) -> Option<&Condition> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, condition)| condition)
    }

    /// Iterates over (field, condition) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Condition)> {
        self.entries.iter().map(|(name, c)| (name.as_str(), c))
    }

    /// Returns the number of specified fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no field is specified
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Value> for Conditions {
    fn from(value: Value) -> Self {
        Self::from_json(value)
    }
}
