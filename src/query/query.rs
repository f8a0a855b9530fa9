//! Fluent query pipeline
//!
//! Mutating calls (filter, order, select, skip, limit) take effect
//! immediately on the working row set. Extraction calls apply the current
//! skip/limit window and never change query state.
//!
//! A `Query` is single-owner: it is not meant to be mutated from several
//! threads at once. Independent queries share nothing.

use serde_json::Value;

use super::columns::Columns;
use super::errors::QueryResult;
use super::sorter::{RowSorter, SortSpec};
use super::validate::non_negative_count;
use super::window::Window;
use crate::config::QueryConfig;
use crate::matcher::{ConditionMatcher, Conditions};
use crate::observability::{Logger, MetricsSnapshot, QueryEvent, QueryMetrics};
use crate::record::Record;

/// Reported for fields a row does not have
static NULL: Value = Value::Null;

/// An in-memory query over a private copy of the input rows
#[derive(Debug)]
pub struct Query<T: Record> {
    rows: Vec<T>,
    columns: Columns,
    window: Window,
    ignore_null_values: bool,
    config: QueryConfig,
    metrics: QueryMetrics,
}

impl<T: Record> Query<T> {
    /// Creates a query over a copy of `rows`
    pub fn from_rows(rows: &[T]) -> Self {
        Self::with_config(rows, QueryConfig::default())
    }

    /// Creates a query over a copy of `rows` with explicit configuration
    pub fn with_config(rows: &[T], config: QueryConfig) -> Self {
        Self::from_owned(rows.to_vec(), config)
    }

    fn from_owned(rows: Vec<T>, config: QueryConfig) -> Self {
        let query = Self {
            rows,
            columns: Columns::default(),
            window: Window::new(),
            ignore_null_values: false,
            config,
            metrics: QueryMetrics::new(),
        };
        query.observe(QueryEvent::Created, &[("rows", query.rows.len().to_string())]);
        query
    }

    // ==================
    // Pipeline state
    // ==================

    /// Sets the projection, replacing any earlier selection
    pub fn select(&mut self, columns: impl Into<Columns>) -> &mut Self {
        self.columns = columns.into();
        self.observe(
            QueryEvent::Select,
            &[("columns", self.columns.names().join(","))],
        );
        self
    }

    /// Keeps rows matching every condition; `null` conditions require `null` cells
    pub fn filter(&mut self, conditions: impl Into<Conditions>) -> &mut Self {
        let conditions = conditions.into();
        self.apply_conditions(QueryEvent::Filter, &conditions);
        self
    }

    /// Keeps rows for which the whole-row predicate holds
    pub fn filter_by<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&T) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|row| predicate(row));
        self.record_filter(QueryEvent::Filter, before);
        self
    }

    /// Keeps rows matching every condition, skipping `null` conditions
    pub fn filter_where(&mut self, conditions: impl Into<Conditions>) -> &mut Self {
        let conditions = conditions.into();
        self.ignore_null_values = true;
        self.apply_conditions(QueryEvent::FilterWhere, &conditions);
        self.ignore_null_values = false;
        self
    }

    /// Stably reorders rows by one or more keys; `-key` sorts descending
    pub fn order_by<I, S>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let specs: Vec<SortSpec> = keys.into_iter().map(|k| SortSpec::parse(k.as_ref())).collect();
        RowSorter::sort(&mut self.rows, &specs);
        self.metrics.increment_sorts();

        let keys: Vec<String> = specs
            .iter()
            .map(|s| format!("{}:{}", s.field, s.direction.as_str()))
            .collect();
        self.observe(QueryEvent::Order, &[("keys", keys.join(","))]);
        self
    }

    /// Drops the first `n` rows of every result
    pub fn skip(&mut self, n: impl Into<Value>) -> QueryResult<&mut Self> {
        let start = self.check_count("skip", n.into())?;
        self.window.start = start;
        self.observe(QueryEvent::Window, &[("skip", start.to_string())]);
        Ok(self)
    }

    /// Caps every result at `n` rows
    pub fn limit(&mut self, n: impl Into<Value>) -> QueryResult<&mut Self> {
        let limit = self.check_count("limit", n.into())?;
        self.window.limit = Some(limit);
        self.observe(QueryEvent::Window, &[("limit", limit.to_string())]);
        Ok(self)
    }

    // ==================
    // Extraction
    // ==================

    /// Number of rows in the windowed result
    pub fn count(&self) -> usize {
        self.served().len()
    }

    /// True if the windowed result is non-empty
    pub fn exists(&self) -> bool {
        !self.served().is_empty()
    }

    /// First windowed row
    pub fn first(&self) -> Option<&T> {
        self.served().first()
    }

    /// Last windowed row
    pub fn last(&self) -> Option<&T> {
        self.served().last()
    }

    /// Every windowed row
    pub fn all(&self) -> &[T] {
        self.served()
    }

    /// Value of the first column of the first windowed row.
    ///
    /// None when there is no row, no column, or the value is absent or `null`.
    /// Falsy values such as `0`, `""` and `false` are returned as-is.
    pub fn scalar(&self) -> Option<&Value> {
        let rows = self.served();
        let row = rows.first()?;
        let column = self.first_column(rows)?;
        row.field(column).filter(|v| !v.is_null())
    }

    /// First column's value across all windowed rows
    pub fn column(&self) -> Vec<&Value> {
        let rows = self.served();
        match self.first_column(rows) {
            Some(column) => rows
                .iter()
                .map(|row| row.field(column).unwrap_or(&NULL))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Selected columns' values per windowed row, or every own field when
    /// nothing is selected
    pub fn values(&self) -> Vec<Vec<&Value>> {
        let rows = self.served();
        rows.iter()
            .map(|row| {
                if self.columns.is_empty() {
                    row.field_names()
                        .into_iter()
                        .map(|name| row.field(name).unwrap_or(&NULL))
                        .collect()
                } else {
                    self.columns
                        .names()
                        .iter()
                        .map(|name| row.field(name).unwrap_or(&NULL))
                        .collect()
                }
            })
            .collect()
    }

    // ==================
    // Introspection
    // ==================

    /// Selected columns in projection order
    pub fn selected_columns(&self) -> &[String] {
        self.columns.names()
    }

    /// Current skip offset
    pub fn start_at(&self) -> usize {
        self.window.start
    }

    /// Current limit, if any
    pub fn limit_value(&self) -> Option<usize> {
        self.window.limit
    }

    /// True only while a null-tolerant filter is running
    pub fn ignores_null_values(&self) -> bool {
        self.ignore_null_values
    }

    /// Returns the query configuration
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Returns a snapshot of this query's counters
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    // ==================
    // Internals
    // ==================

    fn served(&self) -> &[T] {
        self.metrics.increment_extractions();
        self.window.apply(&self.rows)
    }

    fn first_column<'a>(&'a self, rows: &'a [T]) -> Option<&'a str> {
        match self.columns.first() {
            Some(column) => Some(column),
            None => rows.first().and_then(|row| row.first_field_name()),
        }
    }

    fn apply_conditions(&mut self, event: QueryEvent, conditions: &Conditions) {
        let before = self.rows.len();
        let ignore_nulls = self.ignore_null_values;
        self.rows
            .retain(|row| ConditionMatcher::matches(row, conditions, ignore_nulls));
        self.record_filter(event, before);
    }

    fn record_filter(&self, event: QueryEvent, before: usize) {
        let after = self.rows.len();
        self.metrics.record_filter((before - after) as u64);
        self.observe(
            event,
            &[
                ("rows_after", after.to_string()),
                ("rows_before", before.to_string()),
            ],
        );
    }

    fn check_count(&self, operation: &'static str, value: Value) -> QueryResult<usize> {
        non_negative_count(operation, 0, &value).inspect_err(|err| {
            self.metrics.increment_rejections();
            self.observe(
                QueryEvent::ArgumentRejected,
                &[
                    ("actual", value.to_string()),
                    ("expected", err.expected().to_string()),
                    ("operation", operation.to_string()),
                ],
            );
        })
    }

    fn observe(&self, event: QueryEvent, fields: &[(&str, String)]) {
        let severity = event.severity();
        if !self.config.logs(severity) {
            return;
        }
        let mut refs: Vec<(&str, &str)> = Vec::with_capacity(fields.len() + 1);
        refs.push(("label", self.config.label.as_str()));
        refs.extend(fields.iter().map(|(k, v)| (*k, v.as_str())));
        Logger::log(severity, event.as_str(), &refs);
    }
}

impl<T: Record> From<Vec<T>> for Query<T> {
    fn from(rows: Vec<T>) -> Self {
        Self::from_owned(rows, QueryConfig::default())
    }
}
