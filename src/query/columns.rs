//! Column selection (projection)

/// Ordered list of selected field names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns(Vec<String>);

impl Columns {
    /// Returns the selected names in projection order
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Returns the first selected name
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Returns true if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Columns {
    fn from(column: &str) -> Self {
        Columns(vec![column.to_string()])
    }
}

impl From<String> for Columns {
    fn from(column: String) -> Self {
        Columns(vec![column])
    }
}

impl From<Vec<String>> for Columns {
    fn from(columns: Vec<String>) -> Self {
        Columns(columns)
    }
}

impl From<Vec<&str>> for Columns {
    fn from(columns: Vec<&str>) -> Self {
        columns.as_slice().into()
    }
}

impl From<&[&str]> for Columns {
    fn from(columns: &[&str]) -> Self {
        Columns(columns.iter().map(|c| c.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Columns {
    fn from(columns: [&str; N]) -> Self {
        columns.as_slice().into()
    }
}
