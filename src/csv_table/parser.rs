//! CSV parameter table parsing.
//!
//! The first row names the fields (spaces become underscores); every later
//! row must carry exactly as many fields as the header and is deserialized
//! into a [`ParameterRecord`] by field name. Fields that are not valid UTF-8
//! are read as Windows-1252, like the fixed-field tables.

use crate::config::CsvTableConfig;
use crate::constants::fields;
use crate::error::{Result, TableError};
use crate::models::ParameterRecord;
use crate::tokenizer::{decode_record, header_identifiers};
use csv::{ByteRecord, ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Streaming parser over a header-labelled CSV parameter table
pub struct CsvTableParser<R: Read> {
    reader: csv::Reader<R>,
    field_names: StringRecord,
    source: PathBuf,
    row: ByteRecord,
}

impl CsvTableParser<File> {
    /// Open a CSV table from disk
    pub fn open(path: &Path, config: &CsvTableConfig) -> Result<Self> {
        let file = File::open(path).map_err(|e| TableError::open_failed(path, e))?;
        Self::from_reader(file, path, config)
    }
}

impl<R: Read> CsvTableParser<R> {
    /// Build a parser over any reader; `source` is used in error messages
    pub fn from_reader(
        reader: R,
        source: impl Into<PathBuf>,
        config: &CsvTableConfig,
    ) -> Result<Self> {
        let source = source.into();
        let mut reader = ReaderBuilder::new()
            .delimiter(config.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let field_names = header_identifiers(&decode_record(reader.byte_headers()?));
        for required in fields::REQUIRED {
            if !field_names.iter().any(|name| name == *required) {
                return Err(TableError::MissingColumn {
                    path: source,
                    column: (*required).to_string(),
                });
            }
        }

        debug!(
            "Parsed header of {} with {} fields: {:?}",
            source.display(),
            field_names.len(),
            field_names
        );

        Ok(Self {
            reader,
            field_names,
            source,
            row: ByteRecord::new(),
        })
    }

    /// Parse the next data row, or `None` at end of input
    pub fn next_record(&mut self) -> Result<Option<ParameterRecord>> {
        if !self.reader.read_byte_record(&mut self.row)? {
            return Ok(None);
        }

        if self.row.len() != self.field_names.len() {
            return Err(TableError::FieldCountMismatch {
                path: self.source.clone(),
                line: self.row.position().map(|p| p.line()).unwrap_or(0),
                expected: self.field_names.len(),
                found: self.row.len(),
            });
        }

        let record = decode_record(&self.row).deserialize(Some(&self.field_names))?;
        Ok(Some(record))
    }
}

impl<R: Read> Iterator for CsvTableParser<R> {
    type Item = Result<ParameterRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
