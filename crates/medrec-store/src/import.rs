//! Bulk import of validated rows.
//!
//! Validation decides whether a row is well formed; merging decides whether
//! it fits the store (unique identifier, known patient). Both kinds of
//! rejection end up in one [`ImportReport`], ordered by source row.

use serde::Serialize;

use medrec_validate::{RowIssue, Validated, ValidationResult};

/// Outcome of importing one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Rows added to the store.
    pub merged: usize,
    /// Validation and merge rejections. File-level problems come first,
    /// then row problems in row order.
    pub errors: Vec<RowIssue>,
}

impl ImportReport {
    pub fn rejected(&self) -> usize {
        self.errors.len()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Offers every accepted row to `accept` in file order and collects the
/// refusals next to the validation errors.
///
/// `accept` returns the merge message for a refused record.
pub(crate) fn merge_rows<R, F>(result: ValidationResult<R>, mut accept: F) -> ImportReport
where
    F: FnMut(R) -> Result<(), String>,
{
    let ValidationResult { errors, data, .. } = result;
    let mut report = ImportReport { merged: 0, errors };
    for Validated { row, record } in data {
        match accept(record) {
            Ok(()) => report.merged += 1,
            Err(message) => report.errors.push(RowIssue::at(row, message)),
        }
    }
    report.errors.sort_by_key(|issue| issue.row);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_messages_interleave_with_validation_errors() {
        let result = ValidationResult {
            valid: false,
            errors: vec![RowIssue::at(3, "Invalid age")],
            data: vec![
                Validated { row: 2, record: "a" },
                Validated { row: 4, record: "b" },
            ],
        };
        let report = merge_rows(result, |record| {
            if record == "a" {
                Err("taken".to_string())
            } else {
                Ok(())
            }
        });
        assert_eq!(report.merged, 1);
        assert_eq!(report.error_messages(), vec!["Row 2: taken", "Row 3: Invalid age"]);
    }
}
