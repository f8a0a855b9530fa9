//! Per-query metrics
//!
//! - Counters only
//! - Monotonic increase
//! - Atomic so extraction (`&self`) can count without touching query state

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for a single query
#[derive(Debug, Default)]
pub struct QueryMetrics {
    /// Filter calls applied
    filters_applied: AtomicU64,
    /// Rows removed by filtering
    rows_discarded: AtomicU64,
    /// Sort calls applied
    sorts_applied: AtomicU64,
    /// Result extractions served
    extractions: AtomicU64,
    /// Skip/limit arguments rejected
    arguments_rejected: AtomicU64,
}

impl QueryMetrics {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a filter pass that removed `discarded` rows
    pub fn record_filter(&self, discarded: u64) {
        self.filters_applied.fetch_add(1, Ordering::Relaxed);
        self.rows_discarded.fetch_add(discarded, Ordering::Relaxed);
    }

    /// Increment sorts applied
    pub fn increment_sorts(&self) {
        self.sorts_applied.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment extractions served
    pub fn increment_extractions(&self) {
        self.extractions.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment rejected arguments
    pub fn increment_rejections(&self) {
        self.arguments_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all counters as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            filters_applied: self.filters_applied.load(Ordering::Relaxed),
            rows_discarded: self.rows_discarded.load(Ordering::Relaxed),
            sorts_applied: self.sorts_applied.load(Ordering::Relaxed),
            extractions: self.extractions.load(Ordering::Relaxed),
            arguments_rejected: self.arguments_rejected.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of a query's counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub filters_applied: u64,
    pub rows_discarded: u64,
    pub sorts_applied: u64,
    pub extractions: u64,
    pub arguments_rejected: u64,
}

impl MetricsSnapshot {
    /// Returns the snapshot as a JSON object string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
