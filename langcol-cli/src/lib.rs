//! langcol CLI library
//!
//! This library provides the command-line interface for langcol, a
//! tool that appends a detected ISO 639-1 language column to CSV
//! files.

pub mod annotate;
pub mod cli;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod table;

pub use error::{CliError, CliResult};
