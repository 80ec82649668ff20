//! Fixed-field parameter table parsing.
//!
//! Legacy tables are position based: of the first six whitespace-separated
//! entries only the name (2nd), parameter code (3rd) and unit (6th) matter,
//! but all six must be present.

use crate::constants::{
    COUNT_UNIT_MARKER, FIXED_FIELD_COUNT, SUPERSCRIPT_THREE, TAB_SEPARATOR, fixed_columns,
};
use crate::error::{Result, TableError};
use crate::models::{ParameterTriple, RawRow};
use crate::tokenizer::tokenize_fixed_table;
use std::path::Path;
use tracing::warn;

/// Replace the superscript three with `3` and the count marker `#` with `1`
pub fn fix_unit(unit: &str) -> String {
    unit.replace(SUPERSCRIPT_THREE, "3")
        .replace(COUNT_UNIT_MARKER, "1")
}

/// Build a triple from one tokenized data row
pub fn parse_row(row: &RawRow, source: &Path) -> Result<ParameterTriple> {
    if row.len() < FIXED_FIELD_COUNT {
        return Err(TableError::MalformedRow {
            path: source.to_path_buf(),
            line: row.line,
            expected: FIXED_FIELD_COUNT,
            found: row.len(),
        });
    }

    let name = &row.tokens[fixed_columns::NAME];
    let param = &row.tokens[fixed_columns::PARAM];
    let unit = fix_unit(&row.tokens[fixed_columns::UNIT]);

    Ok(ParameterTriple::new(param.as_str(), name.as_str(), &unit))
}

/// True when any field would add a `:` to the lookup table line
pub fn contains_separator(triple: &ParameterTriple) -> bool {
    [&triple.param, &triple.name, &triple.comment]
        .iter()
        .any(|field| field.contains(TAB_SEPARATOR))
}

/// Parsed triples and the number of lines that carried no data
#[derive(Debug, Clone, Default)]
pub struct FixedTable {
    pub triples: Vec<ParameterTriple>,
    pub lines_skipped: usize,
}

/// Parse a decoded fixed-field table, keeping input order
pub fn parse_fixed_table(content: &str, header_lines: usize, source: &Path) -> Result<FixedTable> {
    let rows = tokenize_fixed_table(content, header_lines);

    let triples = rows
        .rows
        .iter()
        .map(|row| parse_row(row, source))
        .collect::<Result<Vec<_>>>()?;

    for triple in triples.iter().filter(|triple| contains_separator(triple)) {
        warn!(
            "Parameter {} ({}) contains ':' and will split differently in the lookup table: {}",
            triple.param, triple.name, triple.comment
        );
    }

    Ok(FixedTable {
        triples,
        lines_skipped: rows.lines_skipped,
    })
}
