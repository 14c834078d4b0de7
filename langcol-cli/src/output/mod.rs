//! Output handling module

pub mod csv_writer;

pub use csv_writer::{resolve_output_path, write_table};
