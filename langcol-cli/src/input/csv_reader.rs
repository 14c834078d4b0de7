//! CSV loading

use std::path::Path;

use crate::error::{CliError, CliResult};
use crate::table::Table;

/// Parse a CSV file into a [`Table`].
///
/// With `has_header` the first line becomes the column names and is
/// excluded from the row data; otherwise every line is a data row and
/// column names are synthesized as 1-based positional indices. Any
/// structural problem (missing file, unequal row lengths) aborts with
/// no partial table.
pub fn load_table(path: &Path, has_header: bool) -> CliResult<Table> {
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .from_path(path)
        .map_err(|e| CliError::ParseError(e.to_string()))?;

    let mut columns: Vec<String> = if has_header {
        reader
            .headers()
            .map_err(|e| CliError::ParseError(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect()
    } else {
        Vec::new()
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| CliError::ParseError(e.to_string()))?;
        if !has_header && columns.is_empty() {
            columns = (1..=record.len()).map(|i| i.to_string()).collect();
        }
        rows.push(record);
    }

    log::debug!(
        "Loaded {} rows x {} columns from {}",
        rows.len(),
        columns.len(),
        path.display()
    );

    Ok(Table::new(columns, rows, has_header))
}
