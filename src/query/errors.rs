//! Query error types
//!
//! Error codes:
//! - AERO_INVALID_ARGUMENT (ERROR)
//!
//! Raised before any pipeline state changes; the failed call has no effect.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Severity levels for query errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation failed, query state is intact
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Query errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// An argument failed validation before reaching the pipeline
    #[error("Invalid argument {index} of {operation}: expected {expected}, got {actual}")]
    InvalidArgument {
        /// Operation that rejected the argument
        operation: &'static str,
        /// Zero-based parameter position
        index: usize,
        /// The argument as passed
        actual: Value,
        /// What the parameter requires
        expected: String,
    },
}

impl QueryError {
    /// Create an invalid argument error
    pub fn invalid_argument(
        operation: &'static str,
        index: usize,
        actual: Value,
        expected: impl Into<String>,
    ) -> Self {
        QueryError::InvalidArgument {
            operation,
            index,
            actual,
            expected: expected.into(),
        }
    }

    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::InvalidArgument { .. } => "AERO_INVALID_ARGUMENT",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the operation that raised the error
    pub fn operation(&self) -> &'static str {
        match self {
            QueryError::InvalidArgument { operation, .. } => *operation,
        }
    }

    /// Returns the expectation string
    pub fn expected(&self) -> &str {
        match self {
            QueryError::InvalidArgument { expected, .. } => expected,
        }
    }
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
