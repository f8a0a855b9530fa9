//! Result windowing (skip / limit)
//!
//! Recomputed on every extraction from the current row set; never mutates it.

/// Skip/limit window over a row sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    /// Rows dropped from the front
    pub start: usize,
    /// Maximum number of rows returned; None is unbounded
    pub limit: Option<usize>,
}

impl Window {
    /// Creates an unbounded window starting at the first row
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the windowed slice of `rows`, clipped to its length
    pub fn apply<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let len = rows.len();
        let start = self.start.min(len);
        let end = match self.limit {
            Some(limit) => start.saturating_add(limit).min(len),
            None => len,
        };
        &rows[start..end]
    }
}
