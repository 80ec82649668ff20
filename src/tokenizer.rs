//! Line tokenization for the two table dialects.
//!
//! CSV lines are split by the `csv` crate; this module only turns header
//! labels into field identifiers. Fixed-field lines are split on runs of
//! whitespace, with header, blank and comment lines dropped before any row
//! reaches the parser.

use crate::constants::COMMENT_MARKER;
use crate::models::RawRow;
use csv::{ByteRecord, StringRecord};
use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;
use tracing::debug;

/// Decode table bytes: UTF-8 when valid, otherwise Latin-1 (Windows-1252)
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            debug!("Text is not valid UTF-8, decoding as Windows-1252");
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            text
        }
    }
}

/// Decode every field of a raw CSV row with [`decode_text`]
pub fn decode_record(record: &ByteRecord) -> StringRecord {
    record.iter().map(decode_text).collect()
}

/// Turn a header label into a field identifier (`No Coverage` -> `No_Coverage`)
pub fn field_identifier(label: &str) -> String {
    label.replace(' ', "_")
}

/// Apply [`field_identifier`] to every label of a CSV header row
pub fn header_identifiers(header: &StringRecord) -> StringRecord {
    header.iter().map(field_identifier).collect()
}

/// Blank lines and lines starting with `#` carry no data
pub fn is_skippable_line(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with(COMMENT_MARKER)
}

/// Split a fixed-field line into runs of non-whitespace characters.
///
/// End of line terminates the last token; no trailing whitespace is required.
pub fn split_fields(line: &str, line_number: usize) -> RawRow {
    RawRow {
        line: line_number,
        tokens: line.split_whitespace().map(str::to_string).collect(),
    }
}

/// Data rows of a fixed-field table plus the count of lines dropped
#[derive(Debug, Clone, Default)]
pub struct FixedRows {
    pub rows: Vec<RawRow>,
    pub lines_skipped: usize,
}

/// Tokenize a whole fixed-field table.
///
/// The first `header_lines` lines are skipped whatever they contain, then
/// blank and comment lines are skipped.
pub fn tokenize_fixed_table(content: &str, header_lines: usize) -> FixedRows {
    let mut result = FixedRows::default();

    for (index, line) in content.lines().enumerate() {
        if index < header_lines || is_skippable_line(line) {
            result.lines_skipped += 1;
            continue;
        }
        result.rows.push(split_fields(line, index + 1));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_latin1_superscript() {
        assert_eq!(decode_text(b"kg/m\xb3"), "kg/m\u{b3}");
    }

    #[test]
    fn test_decode_utf8_is_borrowed() {
        let text = "kg/m\u{b3}".as_bytes();
        assert!(matches!(decode_text(text), Cow::Borrowed(_)));
    }

    #[test]
    fn test_decode_record_per_field() {
        let record = ByteRecord::from(vec![&b"0"[..], &b"kg/m\xb3"[..], "m\u{b3}".as_bytes()]);
        let decoded = decode_record(&record);
        assert_eq!(&decoded[0], "0");
        assert_eq!(&decoded[1], "kg/m\u{b3}");
        assert_eq!(&decoded[2], "m\u{b3}");
    }

    #[test]
    fn test_field_identifier() {
        assert_eq!(field_identifier("No Coverage"), "No_Coverage");
        assert_eq!(field_identifier("Discipline"), "Discipline");
        assert_eq!(field_identifier("A B C"), "A_B_C");
    }

    #[test]
    fn test_header_identifiers() {
        let header = StringRecord::from(vec!["Unit", "No Coverage", "Missing"]);
        let ids = header_identifiers(&header);
        assert_eq!(ids, StringRecord::from(vec!["Unit", "No_Coverage", "Missing"]));
    }

    #[test]
    fn test_skippable_lines() {
        assert!(is_skippable_line(""));
        assert!(is_skippable_line("   \t"));
        assert!(is_skippable_line("# comment"));
        assert!(is_skippable_line("#"));
        assert!(!is_skippable_line("x A1 100 y z m3"));
    }

    #[test]
    fn test_split_fields_whitespace_runs() {
        let row = split_fields("x   A1\t100  y z m3", 7);
        assert_eq!(row.line, 7);
        assert_eq!(row.tokens, vec!["x", "A1", "100", "y", "z", "m3"]);

        // Line ending mid-field still yields the last token
        let row = split_fields("  a b", 1);
        assert_eq!(row.tokens, vec!["a", "b"]);
    }

    #[test]
    fn test_tokenize_skips_header_block_regardless_of_content() {
        let content = "\
x H1 1 y z m
x H2 2 y z m
x H3 3 y z m
x H4 4 y z m
x H5 5 y z m
x A1 100 y z m3

# comment
x B2 101 y z K
";
        let rows = tokenize_fixed_table(content, 5);

        assert_eq!(rows.rows.len(), 2);
        assert_eq!(rows.rows[0].line, 6);
        assert_eq!(rows.rows[0].get(1), Some("A1"));
        assert_eq!(rows.rows[1].line, 9);
        assert_eq!(rows.lines_skipped, 7);
    }

    #[test]
    fn test_tokenize_short_file() {
        let rows = tokenize_fixed_table("one\ntwo\n", 5);
        assert!(rows.rows.is_empty());
        assert_eq!(rows.lines_skipped, 2);
    }
}
