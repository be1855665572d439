//! The row loop shared by every record kind.

use medrec_ingest::Grid;
use medrec_model::RecordKind;
use tracing::debug;

use crate::columns::{ColumnIndex, RowView};
use crate::result::{RowIssue, ValidationResult, Validated};

/// Field rules for one record kind.
pub trait RecordSchema {
    type Record;

    const KIND: RecordKind;

    /// Columns the header must carry.
    fn required_columns() -> &'static [&'static str] {
        Self::KIND.columns()
    }

    /// Checks one row. Every violated rule is appended to `problems`; a
    /// record is returned only when `problems` stays empty.
    fn parse_row(row: &RowView<'_>, problems: &mut Vec<&'static str>) -> Option<Self::Record>;
}

/// Records `message` when `value` is `None`, passing the value through.
pub(crate) fn require<T>(
    problems: &mut Vec<&'static str>,
    value: Option<T>,
    message: &'static str,
) -> Option<T> {
    if value.is_none() {
        problems.push(message);
    }
    value
}

/// Validates a parsed grid (header first) against `S`.
///
/// A missing required column rejects the whole file with a single message
/// and no rows are looked at. Otherwise each data row is checked on its own:
/// a bad row adds one `Row n: ...` message listing every problem, and its
/// siblings are unaffected.
pub fn validate<S: RecordSchema>(grid: &Grid) -> ValidationResult<S::Record> {
    let header = grid.first().map(Vec::as_slice);
    let index = match ColumnIndex::resolve(header, S::required_columns()) {
        Ok(index) => index,
        Err(missing) => {
            debug!(kind = %S::KIND, missing = missing.len(), "required columns missing");
            return ValidationResult {
                valid: false,
                errors: vec![RowIssue::file(format!(
                    "Missing columns: {}",
                    missing.join(", ")
                ))],
                data: Vec::new(),
            };
        }
    };

    let mut errors = Vec::new();
    let mut data = Vec::new();
    for (idx, cells) in grid.iter().enumerate().skip(1) {
        let line = idx + 1;
        let mut problems = Vec::new();
        let parsed = S::parse_row(&index.row(cells), &mut problems);
        match parsed {
            Some(record) if problems.is_empty() => data.push(Validated { row: line, record }),
            _ => errors.push(RowIssue::at(line, problems.join("; "))),
        }
    }

    debug!(
        kind = %S::KIND,
        rows = grid.len().saturating_sub(1),
        accepted = data.len(),
        rejected = errors.len(),
        "validated csv rows"
    );
    ValidationResult {
        valid: errors.is_empty(),
        errors,
        data,
    }
}
