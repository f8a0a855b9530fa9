//! Observability Tests
//!
//! Tests for logging and metrics:
//! - Log lines are valid, deterministic JSON
//! - Metrics count pipeline work without affecting results

use aeroquery::observability::{Logger, QueryEvent, Severity};
use aeroquery::{Query, QueryConfig};
use serde_json::{json, Value};

// =============================================================================
// Logging Tests
// =============================================================================

/// Query events render as one JSON object per line.
#[test]
fn test_query_event_log_line() {
    let mut buffer = Vec::new();
    let event = QueryEvent::ArgumentRejected;
    Logger::log_to_writer(
        event.severity(),
        event.as_str(),
        &[("operation", "skip"), ("expected", "equal or greater than 0")],
        &mut buffer,
    );

    let line = String::from_utf8(buffer).unwrap();
    let parsed: Value = serde_json::from_str(&line).unwrap();
    assert_eq!(parsed["event"], "QUERY_ARGUMENT_REJECTED");
    assert_eq!(parsed["severity"], "WARN");
    assert_eq!(parsed["operation"], "skip");
}

/// Logging configuration never changes results.
#[test]
fn test_verbose_query_same_results() {
    let rows = vec![json!({"a": 2}), json!({"a": 1}), json!({"a": 3})];

    let mut silent = Query::from_rows(&rows);
    let mut verbose = Query::with_config(&rows, QueryConfig::verbose().with_label("verbose"));

    for query in [&mut silent, &mut verbose] {
        query.order_by(["a"]).filter_by(|r| r["a"] != json!(3));
        assert!(query.skip(-5).is_err());
    }

    assert_eq!(silent.all(), verbose.all());
    assert_eq!(verbose.config().log_level, Some(Severity::Trace));
}

// =============================================================================
// Metrics Tests
// =============================================================================

/// Counters track filters, sorts, extractions and rejections.
#[test]
fn test_metrics_snapshot() {
    let rows = vec![json!({"a": 1}), json!({"a": 2}), json!({"a": 3})];
    let mut query = Query::from_rows(&rows);

    query.filter_by(|r| r["a"].as_i64() != Some(2));
    query.order_by(["-a"]);
    let _ = query.limit(-1);
    let _ = query.all();
    let _ = query.scalar();

    let snap = query.metrics();
    assert_eq!(snap.filters_applied, 1);
    assert_eq!(snap.rows_discarded, 1);
    assert_eq!(snap.sorts_applied, 1);
    assert_eq!(snap.arguments_rejected, 1);
    assert_eq!(snap.extractions, 2);
}
