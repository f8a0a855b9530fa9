//! Condition matcher subsystem
//!
//! Decides whether a record satisfies a condition specification,
//! recursing into object-valued fields.
//!
//! # Dispatch order (per field)
//!
//! 1. `null` condition in null-tolerant mode: skipped
//! 2. Predicate: caller-supplied test over the raw cell
//! 3. Sequence: ordered element-wise equality
//! 4. Nested: recursive match against an object cell
//! 5. Literal: strict equality, no coercion

mod condition;
mod equality;
mod matcher;

pub use condition::{CellPredicate, Condition, Conditions};
pub use equality::{sequence_eq, strict_eq};
pub use matcher::ConditionMatcher;
