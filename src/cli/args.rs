//! Command-line argument definitions for the parameter table converter
//!
//! This module defines the CLI interface using the clap derive API. Each
//! pipeline gets its own subcommand; verbosity flags are global.

use crate::config::ConverterConfig;
use crate::constants::{
    DEFAULT_FIXED_INPUT_PATH, DEFAULT_TAB_HEADER, DEFAULT_TAB_OUTPUT_PATH, FIXED_HEADER_LINES,
};
use crate::error::{Result, TableError};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the parameter table converter
///
/// Converts meteorological parameter reference tables into registration
/// statements and colon-delimited lookup tables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "paramtab",
    version,
    about = "Convert meteorological parameter tables into registration statements and lookup tables",
    long_about = "Parses parameter reference tables distributed as CSV or fixed-field text, \
                  corrects known vocabulary and encoding problems, and renders either add(...) \
                  registration statements or a colon-delimited .tab lookup table."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Render add(...) statements from a CSV parameter table
    Statements(StatementsArgs),
    /// Convert a fixed-field parameter table into a .tab lookup table
    Tab(TabArgs),
    /// Read a .tab lookup table the way the lookup facility does
    CheckTab(CheckTabArgs),
}

/// Arguments for the statements command (CSV pipeline)
#[derive(Debug, Clone, Parser)]
pub struct StatementsArgs {
    /// CSV parameter table with a header row
    #[arg(value_name = "SOURCE_CSV")]
    pub source: PathBuf,

    /// Write statements to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Field delimiter
    #[arg(short = 'd', long = "delimiter", default_value_t = ',')]
    pub delimiter: char,
}

/// Arguments for the tab command (fixed-field pipeline)
#[derive(Debug, Clone, Parser)]
pub struct TabArgs {
    /// Fixed-field source table
    #[arg(short = 'i', long = "input", value_name = "PATH", default_value = DEFAULT_FIXED_INPUT_PATH)]
    pub input: PathBuf,

    /// Lookup table to write
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_TAB_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Leading lines to skip regardless of content
    #[arg(long = "header-lines", value_name = "N", default_value_t = FIXED_HEADER_LINES)]
    pub header_lines: usize,

    /// First line of the lookup table
    #[arg(
        long = "table-header",
        value_name = "LINE",
        default_value = DEFAULT_TAB_HEADER,
        allow_hyphen_values = true
    )]
    pub table_header: String,

    /// Read the written table back and check it parses
    #[arg(long = "verify")]
    pub verify: bool,
}

/// Arguments for the check-tab command
#[derive(Debug, Clone, Parser)]
pub struct CheckTabArgs {
    /// Lookup table to read
    #[arg(value_name = "TAB_FILE")]
    pub path: PathBuf,

    /// Print the entries as JSON
    #[arg(long = "json")]
    pub json: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl StatementsArgs {
    pub fn to_config(&self) -> Result<ConverterConfig> {
        if !self.delimiter.is_ascii() {
            return Err(TableError::configuration(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }
        let config = ConverterConfig::default().with_delimiter(self.delimiter as u8);
        config.validate()?;
        Ok(config)
    }
}

impl TabArgs {
    pub fn to_config(&self) -> Result<ConverterConfig> {
        let config = ConverterConfig::default()
            .with_fixed_input(&self.input)
            .with_tab_output(&self.output)
            .with_header_lines(self.header_lines)
            .with_table_header(&self.table_header);
        config.validate()?;
        Ok(config)
    }
}
