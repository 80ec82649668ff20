//! CSV parameter table pipeline.
//!
//! Parses a header-labelled CSV table, runs every record through the
//! normalization chain and renders one `add(...)` statement per record.
//! Rendering happens into memory; callers only see output for a table
//! that parsed completely.

pub mod normalizer;
pub mod parser;
pub mod renderer;

use self::{normalizer::Normalizer, parser::CsvTableParser, renderer::push_statement};

use crate::config::CsvTableConfig;
use crate::error::Result;
use crate::models::ConversionStats;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Rendered statements for one table
#[derive(Debug, Clone, Default)]
pub struct CsvConversion {
    pub statements: String,
    pub stats: ConversionStats,
}

/// Converter from CSV parameter tables to registration statements
#[derive(Debug, Clone, Default)]
pub struct CsvTableConverter {
    config: CsvTableConfig,
    normalizer: Normalizer,
}

impl CsvTableConverter {
    pub fn new(config: CsvTableConfig) -> Self {
        Self {
            config,
            normalizer: Normalizer::default(),
        }
    }

    /// Replace the normalization chain
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Convert a CSV table on disk
    pub fn convert_file(&self, path: &Path) -> Result<CsvConversion> {
        info!("Converting CSV table {}", path.display());
        let parser = CsvTableParser::open(path, &self.config)?;
        self.convert_parsed(parser)
    }

    /// Convert CSV content from any reader; `source` names it in errors
    pub fn convert_reader<R: Read>(&self, reader: R, source: &Path) -> Result<CsvConversion> {
        let parser = CsvTableParser::from_reader(reader, source, &self.config)?;
        self.convert_parsed(parser)
    }

    fn convert_parsed<R: Read>(&self, parser: CsvTableParser<R>) -> Result<CsvConversion> {
        let mut conversion = CsvConversion::default();

        for record in parser {
            let record = record?;
            conversion.stats.rows_read += 1;

            let normalized = self.normalizer.normalize(record);
            conversion.stats.record_rules(&normalized.applied);

            push_statement(&mut conversion.statements, &normalized.record);
            conversion.stats.records_written += 1;
        }

        debug!(
            "Rendered {} statements with {} corrections",
            conversion.stats.records_written,
            conversion.stats.total_corrections()
        );
        Ok(conversion)
    }
}
