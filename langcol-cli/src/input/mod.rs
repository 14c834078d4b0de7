//! Input handling module

pub mod csv_reader;

pub use csv_reader::load_table;
