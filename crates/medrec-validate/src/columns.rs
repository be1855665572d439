//! Header matching and by-name cell access shared by every record kind.

use std::collections::BTreeMap;

use medrec_model::{parse_float_prefix, parse_int_prefix};

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    positions: BTreeMap<&'static str, usize>,
}

impl ColumnIndex {
    /// Matches `required` against a header row.
    ///
    /// Header cells are compared trimmed and lower-cased; when a name repeats,
    /// the first occurrence wins. Returns the missing columns, in `required`
    /// order, when any are absent. A missing header row means every column
    /// is missing.
    pub fn resolve(
        header: Option<&[String]>,
        required: &[&'static str],
    ) -> Result<Self, Vec<&'static str>> {
        let normalized: Vec<String> = header
            .unwrap_or_default()
            .iter()
            .map(|cell| cell.trim().to_lowercase())
            .collect();

        let mut positions = BTreeMap::new();
        let mut missing = Vec::new();
        for &column in required {
            match normalized.iter().position(|name| name == column) {
                Some(idx) => {
                    positions.insert(column, idx);
                }
                None => missing.push(column),
            }
        }

        if missing.is_empty() {
            Ok(Self { positions })
        } else {
            Err(missing)
        }
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }

    /// Borrows one data row for by-name access.
    pub fn row<'a>(&'a self, cells: &'a [String]) -> RowView<'a> {
        RowView {
            index: self,
            cells,
        }
    }
}

/// One data row addressed by column name.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    index: &'a ColumnIndex,
    cells: &'a [String],
}

impl<'a> RowView<'a> {
    /// Cell text for `column`; short rows read as empty.
    pub fn get(&self, column: &str) -> &'a str {
        self.index
            .position(column)
            .and_then(|idx| self.cells.get(idx))
            .map_or("", String::as_str)
    }

    pub fn text(&self, column: &str) -> String {
        self.get(column).to_string()
    }

    pub fn int(&self, column: &str) -> Option<i64> {
        parse_int_prefix(self.get(column))
    }

    pub fn float(&self, column: &str) -> Option<f64> {
        parse_float_prefix(self.get(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn resolves_case_insensitive_headers_in_any_order() {
        let header = strings(&[" AGE ", "Patient_ID"]);
        let index = ColumnIndex::resolve(Some(&header), &["patient_id", "age"]).unwrap();
        assert_eq!(index.position("patient_id"), Some(1));
        assert_eq!(index.position("age"), Some(0));
    }

    #[test]
    fn reports_missing_in_required_order() {
        let header = strings(&["bmi"]);
        let missing = ColumnIndex::resolve(Some(&header), &["age", "bmi", "gender"]).unwrap_err();
        assert_eq!(missing, vec!["age", "gender"]);
    }

    #[test]
    fn no_header_means_everything_missing() {
        let missing = ColumnIndex::resolve(None, &["age", "bmi"]).unwrap_err();
        assert_eq!(missing, vec!["age", "bmi"]);
    }

    #[test]
    fn first_duplicate_header_wins() {
        let header = strings(&["age", "age"]);
        let index = ColumnIndex::resolve(Some(&header), &["age"]).unwrap();
        assert_eq!(index.position("age"), Some(0));
    }

    #[test]
    fn short_rows_read_as_empty() {
        let header = strings(&["age", "bmi"]);
        let index = ColumnIndex::resolve(Some(&header), &["age", "bmi"]).unwrap();
        let cells = strings(&["41"]);
        let row = index.row(&cells);
        assert_eq!(row.int("age"), Some(41));
        assert_eq!(row.get("bmi"), "");
        assert_eq!(row.float("bmi"), None);
    }
}
