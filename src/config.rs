//! Query configuration
//!
//! Configuration only affects observability; results are identical under
//! every configuration.

use serde::Deserialize;

use crate::observability::Severity;

/// Configuration for a single query
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Minimum severity that is logged; None disables logging
    pub log_level: Option<Severity>,
    /// Label attached to every log line of the query
    pub label: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            log_level: None, // Silent by default
            label: "query".to_string(),
        }
    }
}

impl QueryConfig {
    /// Create config that logs every pipeline step
    pub fn verbose() -> Self {
        Self {
            log_level: Some(Severity::Trace),
            ..Self::default()
        }
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the minimum logged severity
    pub fn with_log_level(mut self, level: Option<Severity>) -> Self {
        self.log_level = level;
        self
    }

    /// Check if an event of this severity is logged
    pub fn logs(&self, severity: Severity) -> bool {
        severity.passes(self.log_level)
    }
}
