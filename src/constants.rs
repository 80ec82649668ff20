//! Application constants for the parameter table converter
//!
//! This module contains the table layouts, default paths and correction
//! vocabularies used by both conversion pipelines.

// =============================================================================
// Fixed-Field Table Defaults
// =============================================================================

/// Historical location of the fixed-field source table
pub const DEFAULT_FIXED_INPUT_PATH: &str = "./wrf_param_output_V133.txt";

/// Historical location of the generated lookup table
pub const DEFAULT_TAB_OUTPUT_PATH: &str = "afwa_133.tab";

/// Leading line of every generated lookup table (center:subcenter:version:table)
pub const DEFAULT_TAB_HEADER: &str = "-1:57:1:133";

/// Lines at the top of the fixed-field table that never contain data
pub const FIXED_HEADER_LINES: usize = 5;

/// Whitespace-delimited entries each fixed-field data row must carry
pub const FIXED_FIELD_COUNT: usize = 6;

/// Comment marker for fixed-field and lookup tables
pub const COMMENT_MARKER: char = '#';

/// Field separator in the generated lookup table
pub const TAB_SEPARATOR: char = ':';

/// Zero-based token positions in a fixed-field row
pub mod fixed_columns {
    pub const NAME: usize = 1;
    pub const PARAM: usize = 2;
    pub const UNIT: usize = 5;
}

// =============================================================================
// Unit Character Substitutions
// =============================================================================

/// Superscript three as it appears in legacy unit strings (Latin-1 byte 0xB3)
pub const SUPERSCRIPT_THREE: char = '\u{b3}';

/// The table writes count units as `#`
pub const COUNT_UNIT_MARKER: char = '#';

// =============================================================================
// CSV Table Layout
// =============================================================================

/// Default CSV delimiter
pub const DEFAULT_CSV_DELIMITER: u8 = b',';

/// Field names every CSV parameter table header must provide (after space replacement)
pub mod fields {
    pub const DISCIPLINE: &str = "Discipline";
    pub const CATEGORY: &str = "Category";
    pub const PARAMETER: &str = "Parameter";
    pub const NAME: &str = "Name";
    pub const DESCRIPTION: &str = "Description";
    pub const UNIT: &str = "Unit";
    pub const NO_COVERAGE: &str = "No_Coverage";
    pub const MISSING: &str = "Missing";

    pub const REQUIRED: &[&str] = &[
        DISCIPLINE,
        CATEGORY,
        PARAMETER,
        NAME,
        DESCRIPTION,
        UNIT,
        NO_COVERAGE,
        MISSING,
    ];
}

// =============================================================================
// Normalization Vocabulary
// =============================================================================

/// Vertical reference frames that belong in the description rather than the unit
pub const VERTICAL_REFERENCE_SUFFIXES: &[&str] = &[" MSL", " AGL"];

/// Unit strings meaning "no physical unit"
pub const DIMENSIONLESS_ALIASES: &[&str] = &["non-dim", "flag"];

/// Controlled token for unit-less quantities
pub const DIMENSIONLESS_UNIT: &str = "dimensionless";

/// Known misspellings in source tables and their corrections
pub const SPELLING_CORRECTIONS: &[(&str, &str)] = &[("Reflectivty", "Reflectivity")];

/// Lookup consumers drop entries carrying this description
pub const UNDEFINED_DESCRIPTION: &str = "undefined";
