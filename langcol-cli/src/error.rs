//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific failures. All of these are
/// fatal: they abort the run before any output is written.
#[derive(Debug)]
pub enum CliError {
    /// Input file missing or inaccessible
    FileNotFound(String),
    /// Input is not parseable as delimited tabular text
    ParseError(String),
    /// Requested text column outside `[1, column_count]`
    ColumnOutOfRange { column: usize, count: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ParseError(msg) => write!(f, "Failed to parse CSV: {msg}"),
            CliError::ColumnOutOfRange { column, count } => write!(
                f,
                "Text column {column} is out of range (file has {count} columns)"
            ),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
