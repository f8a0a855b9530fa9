//! Observable query events
//!
//! Events are explicit and typed; their names are the `event` key of a log line.

use std::fmt;

use super::logger::Severity;

/// Observable events in a query's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryEvent {
    /// Query constructed from input rows
    Created,
    /// Rows filtered by a specification or row predicate
    Filter,
    /// Rows filtered in null-tolerant mode
    FilterWhere,
    /// Rows reordered
    Order,
    /// Projection changed
    Select,
    /// Skip or limit changed
    Window,
    /// Skip or limit argument rejected
    ArgumentRejected,
}

impl QueryEvent {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryEvent::Created => "QUERY_CREATED",
            QueryEvent::Filter => "QUERY_FILTER",
            QueryEvent::FilterWhere => "QUERY_FILTER_WHERE",
            QueryEvent::Order => "QUERY_ORDER",
            QueryEvent::Select => "QUERY_SELECT",
            QueryEvent::Window => "QUERY_WINDOW",
            QueryEvent::ArgumentRejected => "QUERY_ARGUMENT_REJECTED",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            QueryEvent::Created => Severity::Info,
            QueryEvent::ArgumentRejected => Severity::Warn,
            _ => Severity::Trace,
        }
    }
}

impl fmt::Display for QueryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
