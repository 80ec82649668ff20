//! Lookup table reader.
//!
//! Reads a colon-delimited `.tab` file the way the GRIB table lookup does,
//! so a generated table can be checked before it is installed.

use crate::constants::{COMMENT_MARKER, TAB_SEPARATOR, UNDEFINED_DESCRIPTION};
use crate::error::{Result, TableError};
use crate::models::TabEntry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Entries of a lookup table, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct TabTable {
    /// The skipped first line
    pub header: String,
    pub entries: Vec<TabEntry>,
    /// Entries that replaced an earlier one with the same number
    pub duplicates: usize,
    /// Entries dropped for an "undefined" description
    pub undefined: usize,
}

impl TabTable {
    pub fn get(&self, number: i32) -> Option<&TabEntry> {
        self.entries.iter().find(|entry| entry.number == number)
    }
}

/// Read a lookup table from disk
pub fn read_tab_file(path: &Path) -> Result<TabTable> {
    let content = fs::read_to_string(path).map_err(|e| TableError::open_failed(path, e))?;
    read_tab_table(&content, path)
}

/// Parse lookup table content; `source` names it in errors
pub fn read_tab_table(content: &str, source: &Path) -> Result<TabTable> {
    let mut lines = content.lines();
    let mut table = TabTable {
        header: lines.next().unwrap_or_default().to_string(),
        ..Default::default()
    };
    let mut positions: HashMap<i32, usize> = HashMap::new();

    for (index, line) in lines.enumerate() {
        // Header occupies line 1
        let line_number = index + 2;
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        let entry = parse_tab_line(line).map_err(|reason| TableError::InvalidTabEntry {
            path: source.to_path_buf(),
            line: line_number,
            reason,
        })?;

        if entry.description.eq_ignore_ascii_case(UNDEFINED_DESCRIPTION) {
            table.undefined += 1;
            continue;
        }

        match positions.get(&entry.number) {
            Some(&position) => {
                warn!(
                    "Line {}: parameter {} redefined ({} replaces {})",
                    line_number, entry.number, entry.name, table.entries[position].name
                );
                table.entries[position] = entry;
                table.duplicates += 1;
            }
            None => {
                positions.insert(entry.number, table.entries.len());
                table.entries.push(entry);
            }
        }
    }

    debug!(
        "Read {} entries from {} ({} duplicates, {} undefined)",
        table.entries.len(),
        source.display(),
        table.duplicates,
        table.undefined
    );
    Ok(table)
}

fn parse_tab_line(line: &str) -> std::result::Result<TabEntry, String> {
    let mut fields: Vec<&str> = line.split(TAB_SEPARATOR).collect();
    // Trailing empty fields do not count, so `7:X:` has two
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    if fields.len() < 3 {
        return Err(format!("expected 3 ':'-separated fields, found {}", fields.len()));
    }

    let number = fields[0]
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("parameter number '{}' is not an integer: {}", fields[0].trim(), e))?;
    let name = fields[1].trim().to_string();
    let (description, units) = split_units(fields[2])?;

    Ok(TabEntry {
        number,
        name,
        description,
        units,
    })
}

/// Split `desc [units]` into its parts; text without `[` has no units
fn split_units(field: &str) -> std::result::Result<(String, String), String> {
    let Some((description, rest)) = field.split_once('[') else {
        return Ok((field.trim().to_string(), String::new()));
    };

    let bracketed = rest.split('[').next().unwrap_or_default();
    let end = bracketed
        .rfind(']')
        .ok_or_else(|| format!("unterminated units in '{}'", field))?;

    Ok((
        description.trim().to_string(),
        bracketed[..end].trim().to_string(),
    ))
}
