//! Query pipeline subsystem
//!
//! Holds the working row set and query state, and produces results.
//!
//! # Pipeline
//!
//! 1. Copy input rows at construction
//! 2. Filter eagerly on every `filter`/`filter_by`/`filter_where` call
//! 3. Sort eagerly and stably on every `order_by` call
//! 4. Validate `skip`/`limit` arguments before touching state
//! 5. On extraction, apply skip then limit to the current rows
//!
//! # Invariants
//!
//! - Rows only ever shrink or reorder; input rows are never mutated
//! - Extraction is idempotent and never changes query state
//! - A rejected argument leaves the query unchanged

mod columns;
mod errors;
mod query;
mod sorter;
mod validate;
mod window;

pub use columns::Columns;
pub use errors::{QueryError, QueryResult, Severity};
pub use query::Query;
pub use sorter::{RowSorter, SortDirection, SortSpec};
pub use validate::{ensure_integer, ensure_min, non_negative_count, MAX_SAFE_INTEGER};
pub use window::Window;
