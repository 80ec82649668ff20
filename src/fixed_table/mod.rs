//! Fixed-field parameter table pipeline.
//!
//! Reads the whole legacy table into memory, parses every data row into a
//! parameter triple, then writes the colon-delimited lookup table in one
//! atomic step.

pub mod parser;
pub mod reader;
pub mod writer;

use self::parser::parse_fixed_table;
use self::reader::{TabTable, read_tab_file};
use self::writer::write_tab;

use crate::config::FixedTableConfig;
use crate::error::{Result, TableError};
use crate::models::{ConversionStats, ParameterTriple};
use crate::tokenizer::decode_text;
use std::fs;
use tracing::{debug, info};

/// Triples written for one table
#[derive(Debug, Clone, Default)]
pub struct FixedConversion {
    pub triples: Vec<ParameterTriple>,
    pub stats: ConversionStats,
}

/// Converter from fixed-field tables to lookup tables
#[derive(Debug, Clone, Default)]
pub struct FixedTableConverter {
    config: FixedTableConfig,
}

impl FixedTableConverter {
    pub fn new(config: FixedTableConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FixedTableConfig {
        &self.config
    }

    /// Parse the configured source table without writing anything
    pub fn parse(&self) -> Result<FixedConversion> {
        let path = &self.config.input_path;
        info!("Reading fixed-field table {}", path.display());

        let bytes = fs::read(path).map_err(|e| TableError::open_failed(path, e))?;
        let content = decode_text(&bytes);
        let table = parse_fixed_table(&content, self.config.header_lines, path)?;

        let stats = ConversionStats {
            rows_read: table.triples.len(),
            lines_skipped: table.lines_skipped,
            ..Default::default()
        };
        debug!(
            "Parsed {} parameters, skipped {} lines",
            stats.rows_read, stats.lines_skipped
        );

        Ok(FixedConversion {
            triples: table.triples,
            stats,
        })
    }

    /// Parse the source table and write the lookup table
    pub fn convert(&self) -> Result<FixedConversion> {
        let mut conversion = self.parse()?;
        write_tab(
            &self.config.output_path,
            &self.config.table_header,
            &conversion.triples,
        )?;
        conversion.stats.records_written = conversion.triples.len();
        Ok(conversion)
    }

    /// Read the written lookup table back as the lookup facility would
    pub fn verify_output(&self) -> Result<TabTable> {
        read_tab_file(&self.config.output_path)
    }
}
