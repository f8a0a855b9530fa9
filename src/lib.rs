//! aeroquery - A strict, deterministic, in-memory query engine
//!
//! Filters, sorts, projects and paginates a finite collection of
//! structured records held entirely in memory.
//!
//! ```
//! use aeroquery::{Conditions, Query};
//! use serde_json::{json, Value};
//!
//! let rows = vec![
//!     json!({"id": "1", "p": 1}),
//!     json!({"id": "2", "p": 3}),
//!     json!({"id": "3", "p": 0}),
//! ];
//!
//! let mut query = Query::from_rows(&rows);
//! query
//!     .filter(Conditions::new().matching("p", |v| v.and_then(Value::as_i64).is_some_and(|p| p >= 0)))
//!     .order_by(["-p"])
//!     .select("id");
//!
//! assert_eq!(query.column(), vec![&json!("2"), &json!("1"), &json!("3")]);
//! ```

pub mod config;
pub mod matcher;
pub mod observability;
pub mod query;
pub mod record;

pub use config::QueryConfig;
pub use matcher::{Condition, ConditionMatcher, Conditions};
pub use query::{Query, QueryError, QueryResult, SortSpec};
pub use record::Record;
