use std::fmt;

use serde::Serialize;

/// A problem found in a source file.
///
/// Structural problems (missing columns) have no row; field problems carry
/// the 1-based line number of the offending row, counting the header as
/// line 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowIssue {
    pub row: Option<usize>,
    pub message: String,
}

impl RowIssue {
    pub fn file(message: impl Into<String>) -> Self {
        Self {
            row: None,
            message: message.into(),
        }
    }

    pub fn at(row: usize, message: impl Into<String>) -> Self {
        Self {
            row: Some(row),
            message: message.into(),
        }
    }
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "Row {row}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// A record that passed validation, with the line it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Validated<T> {
    pub row: usize,
    pub record: T,
}

/// Outcome of validating one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult<T> {
    /// True when the header was complete and no row was rejected.
    pub valid: bool,
    pub errors: Vec<RowIssue>,
    pub data: Vec<Validated<T>>,
}

impl<T> ValidationResult<T> {
    /// Error lines as shown to users, in file order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn records(&self) -> impl Iterator<Item = &T> {
        self.data.iter().map(|validated| &validated.record)
    }

    /// The first `limit` accepted records.
    pub fn preview(&self, limit: usize) -> impl Iterator<Item = &T> {
        self.records().take(limit)
    }
}
