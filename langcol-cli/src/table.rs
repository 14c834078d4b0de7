//! In-memory tabular model

use csv::StringRecord;

use crate::error::CliError;

/// A CSV file loaded whole into memory.
///
/// Column names are the header row when the file has one, otherwise
/// synthesized 1-based positional indices. Invariant: every row has
/// exactly as many cells as there are column names.
#[derive(Debug)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<StringRecord>,
    has_header: bool,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<StringRecord>, has_header: bool) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Self {
            columns,
            rows,
            has_header,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Translate a 1-based column number into a cell index,
    /// rejecting anything outside `[1, column_count]`.
    pub fn column_index(&self, one_based: usize) -> Result<usize, CliError> {
        if one_based == 0 || one_based > self.column_count() {
            return Err(CliError::ColumnOutOfRange {
                column: one_based,
                count: self.column_count(),
            });
        }
        Ok(one_based - 1)
    }

    /// Append one column after all existing ones. `values` must hold
    /// exactly one cell per row.
    pub fn push_column(&mut self, name: &str, values: Vec<String>) {
        assert_eq!(values.len(), self.rows.len());
        self.columns.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push_field(&value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::new(
            vec!["id".to_string(), "text".to_string()],
            vec![
                StringRecord::from(vec!["1", "Bonjour"]),
                StringRecord::from(vec!["2", "Hello"]),
            ],
            true,
        )
    }

    #[test]
    fn test_column_index_in_range() {
        let table = sample_table();
        assert_eq!(table.column_index(1).unwrap(), 0);
        assert_eq!(table.column_index(2).unwrap(), 1);
    }

    #[test]
    fn test_column_index_zero_rejected() {
        let table = sample_table();
        assert!(matches!(
            table.column_index(0),
            Err(CliError::ColumnOutOfRange { column: 0, count: 2 })
        ));
    }

    #[test]
    fn test_column_index_past_last_rejected() {
        let table = sample_table();
        assert!(matches!(
            table.column_index(3),
            Err(CliError::ColumnOutOfRange { column: 3, count: 2 })
        ));
    }

    #[test]
    fn test_push_column_appends_after_existing() {
        let mut table = sample_table();
        table.push_column("language", vec!["FR".to_string(), "EN".to_string()]);

        assert_eq!(table.columns(), ["id", "text", "language"]);
        assert_eq!(&table.rows()[0], &StringRecord::from(vec!["1", "Bonjour", "FR"]));
        assert_eq!(&table.rows()[1], &StringRecord::from(vec!["2", "Hello", "EN"]));
    }

    #[test]
    fn test_push_column_preserves_row_count() {
        let mut table = sample_table();
        let before = table.row_count();
        table.push_column("language", vec!["FR".to_string(), "EN".to_string()]);
        assert_eq!(table.row_count(), before);
    }

    #[test]
    fn test_empty_table_rejects_any_column() {
        let table = Table::new(Vec::new(), Vec::new(), false);
        assert!(table.column_index(1).is_err());
        assert!(table.column_index(2).is_err());
    }
}
