//! Configuration management and validation.
//!
//! Provides configuration structures for both table pipelines. Defaults
//! reproduce the historical behaviour (hardcoded paths, 5-line header block,
//! `-1:57:1:133` table header); CLI flags override them.

use crate::constants::{
    DEFAULT_CSV_DELIMITER, DEFAULT_FIXED_INPUT_PATH, DEFAULT_TAB_HEADER, DEFAULT_TAB_OUTPUT_PATH,
    FIXED_HEADER_LINES,
};
use crate::error::{Result, TableError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Settings for the CSV table pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvTableConfig {
    /// Field delimiter byte
    pub delimiter: u8,
}

impl Default for CsvTableConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_CSV_DELIMITER,
        }
    }
}

/// Settings for the fixed-field table pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedTableConfig {
    /// Source table path
    pub input_path: PathBuf,

    /// Generated lookup table path
    pub output_path: PathBuf,

    /// Leading lines skipped regardless of content
    pub header_lines: usize,

    /// First line written to the lookup table
    pub table_header: String,
}

impl Default for FixedTableConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_FIXED_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_TAB_OUTPUT_PATH),
            header_lines: FIXED_HEADER_LINES,
            table_header: DEFAULT_TAB_HEADER.to_string(),
        }
    }
}

/// Global configuration for a conversion run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    pub csv: CsvTableConfig,
    pub fixed: FixedTableConfig,
}

impl ConverterConfig {
    /// Override the CSV delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.csv.delimiter = delimiter;
        self
    }

    /// Override the fixed-field source path
    pub fn with_fixed_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixed.input_path = path.into();
        self
    }

    /// Override the lookup table destination
    pub fn with_tab_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixed.output_path = path.into();
        self
    }

    /// Override the number of leading header lines
    pub fn with_header_lines(mut self, header_lines: usize) -> Self {
        self.fixed.header_lines = header_lines;
        self
    }

    /// Override the lookup table header line
    pub fn with_table_header(mut self, header: impl Into<String>) -> Self {
        self.fixed.table_header = header.into();
        self
    }

    /// Reject settings that cannot produce a well-formed table
    pub fn validate(&self) -> Result<()> {
        if !self.csv.delimiter.is_ascii() {
            return Err(TableError::configuration(format!(
                "CSV delimiter must be ASCII, got byte 0x{:02x}",
                self.csv.delimiter
            )));
        }
        if self.fixed.input_path.as_os_str().is_empty() {
            return Err(TableError::configuration("Fixed-field input path is empty"));
        }
        if self.fixed.output_path.as_os_str().is_empty() {
            return Err(TableError::configuration("Lookup table output path is empty"));
        }
        if self.fixed.table_header.trim().is_empty() {
            return Err(TableError::configuration("Lookup table header is empty"));
        }
        if self.fixed.table_header.contains('\n') {
            return Err(TableError::configuration(
                "Lookup table header must be a single line",
            ));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
