//! Row-wise language annotation

use langcol_core::{Detection, Detector};
use rayon::prelude::*;

use crate::error::CliResult;
use crate::progress::ProgressReporter;
use crate::table::Table;

/// Name of the appended column
pub const LANGUAGE_COLUMN: &str = "language";

/// Run every row's addressed cell through the detector and append the
/// results as a `language` column.
///
/// `text_column` is 1-based and validated before any row is processed;
/// an out-of-range column aborts the whole operation with the table
/// untouched. Results align 1:1 with rows in row order, whether the
/// map runs sequentially or on the rayon pool.
pub fn annotate_table(
    table: &mut Table,
    text_column: usize,
    detector: &Detector,
    parallel: bool,
    progress: &ProgressReporter,
) -> CliResult<()> {
    let cell_index = table.column_index(text_column)?;

    let detect_row = |row: &csv::StringRecord| {
        let detection = detector.detect(row.get(cell_index).unwrap_or(""));
        progress.row_completed();
        detection
    };

    let detections: Vec<Detection> = if parallel {
        table.rows().par_iter().map(detect_row).collect()
    } else {
        table.rows().iter().map(detect_row).collect()
    };

    table.push_column(
        LANGUAGE_COLUMN,
        detections
            .iter()
            .map(|d| d.as_column_value().to_string())
            .collect(),
    );
    Ok(())
}
