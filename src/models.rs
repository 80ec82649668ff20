//! Core data structures for parameter table conversion.
//!
//! Defines the raw token rows, the two record shapes produced by the
//! pipelines, lookup table entries and run statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered tokens from one non-blank, non-comment input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the source file
    pub line: usize,
    pub tokens: Vec<String>,
}

impl RawRow {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }
}

/// One row of a CSV parameter table
///
/// Numeric-looking fields stay as text and are reproduced verbatim. Records are
/// never mutated; the `with_*` methods return a modified copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRecord {
    #[serde(rename = "Discipline")]
    pub discipline: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Parameter")]
    pub parameter: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Unit")]
    pub unit: String,
    #[serde(rename = "No_Coverage")]
    pub no_coverage: String,
    #[serde(rename = "Missing")]
    pub missing: String,
}

impl ParameterRecord {
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self.clone()
        }
    }

    pub fn with_unit(&self, unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            ..self.clone()
        }
    }
}

/// One entry of the fixed-field table: `(Param, Name, Comment)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterTriple {
    pub param: String,
    pub name: String,
    pub comment: String,
}

impl ParameterTriple {
    /// Build a triple, synthesizing the comment as `"<Name with spaces> [<Unit>]"`
    pub fn new(param: impl Into<String>, name: impl Into<String>, unit: &str) -> Self {
        let name = name.into();
        let comment = format!("{} [{}]", name.replace('_', " "), unit);
        Self {
            param: param.into(),
            name,
            comment,
        }
    }
}

/// A parameter as the lookup facility reads it back from a `.tab` file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabEntry {
    pub number: i32,
    pub name: String,
    pub description: String,
    pub units: String,
}

/// Statistics for a single conversion run
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Data rows parsed from the source
    pub rows_read: usize,
    /// Statements or table lines written
    pub records_written: usize,
    /// Header, blank and comment lines skipped
    pub lines_skipped: usize,
    /// How often each normalization rule fired
    pub rule_counts: BTreeMap<&'static str, usize>,
}

impl ConversionStats {
    pub fn record_rules(&mut self, applied: &[&'static str]) {
        for &rule in applied {
            *self.rule_counts.entry(rule).or_insert(0) += 1;
        }
    }

    /// Total number of rule firings across all records
    pub fn total_corrections(&self) -> usize {
        self.rule_counts.values().sum()
    }
}
