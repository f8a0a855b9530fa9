//! Observability subsystem
//!
//! - Structured logging (JSON lines)
//! - Per-query counters
//! - Typed query events
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on query results
//! 3. No async or background threads
//! 4. Deterministic output

mod events;
mod logger;
mod metrics;

pub use events::QueryEvent;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsSnapshot, QueryMetrics};
