//! CSV serialization

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::CliResult;
use crate::table::Table;

/// Where to write when no explicit output path is given: the input
/// path itself (overwriting it), unless it lacks a `.csv` suffix, in
/// which case `.csv` is appended and the original is left untouched.
/// The overwrite default is long-standing reference behavior; callers
/// needing guaranteed non-destructive output pass `--output_file`.
pub fn resolve_output_path(input: &Path, output: Option<PathBuf>) -> PathBuf {
    match output {
        Some(path) => path,
        None => {
            let input_str = input.to_string_lossy();
            if input_str.ends_with(".csv") {
                input.to_path_buf()
            } else {
                PathBuf::from(format!("{input_str}.csv"))
            }
        }
    }
}

/// Serialize the table to `path`, creating or overwriting it.
///
/// The header row is written iff the table was loaded with one; column
/// order is preserved.
pub fn write_table(table: &Table, path: &Path) -> CliResult<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    if table.has_header() {
        writer
            .write_record(table.columns())
            .context("Failed to write header row")?;
    }
    for row in table.rows() {
        writer
            .write_record(row)
            .context("Failed to write data row")?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush output file: {}", path.display()))?;

    log::debug!("Wrote {} rows to {}", table.row_count(), path.display());
    Ok(())
}
