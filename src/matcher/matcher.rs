//! Condition matching against records
//!
//! A row matches when every specified field is satisfied (AND semantics).
//! Missing fields are not errors: they are evaluated as absent.

use serde_json::Value;

use super::condition::{Condition, Conditions};
use super::equality::{sequence_eq, strict_eq};
use crate::record::Record;

/// Evaluates condition specifications against records
pub struct ConditionMatcher;

impl ConditionMatcher {
    /// Checks if a row satisfies every condition in the specification.
    ///
    /// With `ignore_nulls`, `null` conditions impose no constraint instead of
    /// requiring a literal `null` cell.
    pub fn matches<R: Record>(row: &R, conditions: &Conditions, ignore_nulls: bool) -> bool {
        conditions
            .iter()
            .all(|(field, condition)| Self::matches_field(row.field(field), condition, ignore_nulls))
    }

    /// Checks a single cell against a single condition
    pub fn matches_field(cell: Option<&Value>, condition: &Condition, ignore_nulls: bool) -> bool {
        if ignore_nulls && condition.is_null() {
            return true;
        }

        match condition {
            Condition::Predicate(test) => test(cell),
            Condition::Sequence(items) => match cell {
                Some(Value::Array(values)) => sequence_eq(values, items),
                _ => false,
            },
            Condition::Nested(nested) => match cell {
                Some(Value::Object(map)) => Self::matches(map, nested, ignore_nulls),
                _ => false,
            },
            Condition::Literal(expected) => cell.is_some_and(|actual| strict_eq(actual, expected)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equality_match() {
        let doc = json!({"name": "Alice", "age": 30});

        let spec = Conditions::new().eq("name", "Alice");
        assert!(ConditionMatcher::matches(&doc, &spec, false));

        let spec = Conditions::new().eq("name", "Bob");
        assert!(!ConditionMatcher::matches(&doc, &spec, false));
    }

    #[test]
    fn test_no_type_coercion() {
        let doc = json!({"value": 123});

        // String "123" should NOT match integer 123
        let spec = Conditions::new().eq("value", "123");
        assert!(!ConditionMatcher::matches(&doc, &spec, false));

        let spec = Conditions::new().eq("value", 123);
        assert!(ConditionMatcher::matches(&doc, &spec, false));
    }

    #[test]
    fn test_conjunction_over_specified_keys() {
        let doc = json!({"age": 25, "active": true, "name": "Eve"});

        let spec = Conditions::new().eq("age", 25).eq("active", true);
        assert!(ConditionMatcher::matches(&doc, &spec, false));

        let spec = Conditions::new().eq("age", 25).eq("active", false);
        assert!(!ConditionMatcher::matches(&doc, &spec, false));

        assert!(ConditionMatcher::matches(&doc, &Conditions::new(), false));
    }

    #[test]
    fn test_missing_field_compares_as_absent() {
        let doc = json!({"name": "Alice"});

        let spec = Conditions::new().eq("age", 30);
        assert!(!ConditionMatcher::matches(&doc, &spec, false));

        let spec = Conditions::new().matching("age", |v| v.is_none());
        assert!(ConditionMatcher::matches(&doc, &spec, false));
    }

    #[test]
    fn test_null_literal_strict_and_tolerant() {
        let null_doc = json!({"city": null});
        let set_doc = json!({"city": "Oslo"});
        let missing_doc = json!({});
        let spec = Conditions::new().eq("city", Value::Null);

        assert!(ConditionMatcher::matches(&null_doc, &spec, false));
        assert!(!ConditionMatcher::matches(&set_doc, &spec, false));
        assert!(!ConditionMatcher::matches(&missing_doc, &spec, false));

        assert!(ConditionMatcher::matches(&null_doc, &spec, true));
        assert!(ConditionMatcher::matches(&set_doc, &spec, true));
        assert!(ConditionMatcher::matches(&missing_doc, &spec, true));
    }

    #[test]
    fn test_predicate_receives_raw_cell() {
        let doc = json!({"p": 3});
        let spec = Conditions::new().matching("p", |v| v.and_then(Value::as_i64) == Some(3));
        assert!(ConditionMatcher::matches(&doc, &spec, false));
    }

    #[test]
    fn test_sequence_requires_array_cell() {
        let doc = json!({"tags": ["a", "b"], "name": "ab"});

        let spec = Conditions::new().sequence("tags", vec![json!("a"), json!("b")]);
        assert!(ConditionMatcher::matches(&doc, &spec, false));

        let spec = Conditions::new().sequence("tags", vec![json!("b"), json!("a")]);
        assert!(!ConditionMatcher::matches(&doc, &spec, false));

        let spec = Conditions::new().sequence("name", vec![json!("a"), json!("b")]);
        assert!(!ConditionMatcher::matches(&doc, &spec, false));
    }

    #[test]
    fn test_nested_recursion() {
        let doc = json!({"foo": {"bar": "b", "foo": {"bar": "c"}}});

        let spec = Conditions::from_json(json!({"foo": {"bar": "b"}}));
        assert!(ConditionMatcher::matches(&doc, &spec, false));

        let spec = Conditions::from_json(json!({"foo": {"bar": "b", "foo": {"bar": "c"}}}));
        assert!(ConditionMatcher::matches(&doc, &spec, false));

        let spec = Conditions::from_json(json!({"foo": {"bar": "b", "foo": {"bar": "d"}}}));
        assert!(!ConditionMatcher::matches(&doc, &spec, false));
    }

    #[test]
    fn test_nested_against_scalar_fails() {
        let doc = json!({"foo": "bar"});
        let spec = Conditions::new().nested("foo", Conditions::new());
        assert!(!ConditionMatcher::matches(&doc, &spec, false));
    }

    #[test]
    fn test_nested_null_tolerance_propagates() {
        let doc = json!({"address": {"city": "Oslo"}});
        let spec = Conditions::new().nested(
            "address",
            Conditions::new().eq("city", "Oslo").optional("zip", None::<&str>),
        );

        assert!(ConditionMatcher::matches(&doc, &spec, true));
        assert!(!ConditionMatcher::matches(&doc, &spec, false));
    }
}
