//! Parameter Table Converter Library
//!
//! Converts meteorological parameter reference tables into the textual
//! formats consumed by GRIB table lookups.
//!
//! This library provides tools for:
//! - Parsing header-labelled CSV parameter tables into named records
//! - Correcting unit vocabulary, vertical reference suffixes and known misspellings
//! - Rendering `add(...)` registration statements
//! - Parsing legacy fixed-field tables and writing colon-delimited `.tab` lookup tables
//! - Reading `.tab` tables back the way the lookup facility does

pub mod config;
pub mod constants;
pub mod csv_table;
pub mod error;
pub mod fixed_table;
pub mod models;
pub mod output;
pub mod tokenizer;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::ConverterConfig;
pub use csv_table::CsvTableConverter;
pub use error::{Result, TableError};
pub use fixed_table::FixedTableConverter;
pub use models::{ConversionStats, ParameterRecord, ParameterTriple, TabEntry};
