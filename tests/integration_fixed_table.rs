//! Integration tests for the fixed-field lookup table pipeline
//!
//! These tests build legacy whitespace-column tables in temporary
//! directories, convert them, and read the result back with the same rules
//! the GRIB table lookup applies.

use paramtab::TableError;
use paramtab::config::FixedTableConfig;
use paramtab::fixed_table::FixedTableConverter;
use paramtab::fixed_table::reader::read_tab_file;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEADER_BLOCK: &str = "\
 WRF post-processor parameter output
 Table version 133
 ------------------------------------------------------------
 #  Name            Param  Level   Stat  Units
 ------------------------------------------------------------
";

fn converter(dir: &Path, body: &[u8]) -> FixedTableConverter {
    let input_path = dir.join("wrf_param_output_V133.txt");
    let mut bytes = HEADER_BLOCK.as_bytes().to_vec();
    bytes.extend_from_slice(body);
    fs::write(&input_path, bytes).unwrap();

    FixedTableConverter::new(FixedTableConfig {
        input_path,
        output_path: dir.join("afwa_133.tab"),
        ..Default::default()
    })
}

/// Test the reference scenario: one six-field row
///
/// Purpose: Validate positional extraction and comment synthesis
/// Benefit: Guards the exact `Param:Name:Comment` syntax of the lookup table
#[test]
fn test_reference_row() {
    let temp_dir = TempDir::new().unwrap();
    let converter = converter(temp_dir.path(), b"x A1 100 y z m3\n");

    converter.convert().expect("Failed to convert reference table");

    assert_eq!(
        fs::read_to_string(&converter.config().output_path).unwrap(),
        "-1:57:1:133\n100:A1:A1 [m3]\n"
    );
}

/// Test a realistic Latin-1 table with comments, blanks and unit fixes
///
/// Purpose: Validate decoding, skipping and both unit substitutions together
/// Benefit: Ensures the legacy table converts without manual cleanup
#[test]
fn test_realistic_latin1_table() {
    let temp_dir = TempDir::new().unwrap();
    let body: &[u8] = b"\
1   T2               11   sfc    inst  K
2   QVAPOR           51   hyb    inst  kg/kg
# lightning block
3   LTG_FLASH_RATE   209  sfc    max   #/km\xb2/min

4   AIR_DENSITY      212  hyb    inst  kg/m\xb3
5   CLOUD_COUNT      213  sfc    inst  #
";
    let converter = converter(temp_dir.path(), body);

    let conversion = converter.convert().unwrap();

    assert_eq!(conversion.stats.rows_read, 5);
    assert_eq!(conversion.stats.lines_skipped, 7);
    assert_eq!(
        fs::read_to_string(&converter.config().output_path).unwrap(),
        "-1:57:1:133\n\
         11:T2:T2 [K]\n\
         51:QVAPOR:QVAPOR [kg/kg]\n\
         209:LTG_FLASH_RATE:LTG FLASH RATE [1/km\u{b2}/min]\n\
         212:AIR_DENSITY:AIR DENSITY [kg/m3]\n\
         213:CLOUD_COUNT:CLOUD COUNT [1]\n"
    );
}

/// Test that the written table reads back as the lookup facility expects
///
/// Purpose: Validate the contract with the `.tab` consumer
/// Benefit: Catches tables that would be rejected after installation
#[test]
fn test_written_table_reads_back() {
    let temp_dir = TempDir::new().unwrap();
    let converter = converter(
        temp_dir.path(),
        b"1 SNOW_DEPTH 66 sfc inst m\n2 PRECIP_RATE 59 sfc inst kg/m\xb2/s\n",
    );
    converter.convert().unwrap();

    let table = read_tab_file(&converter.config().output_path).unwrap();

    assert_eq!(table.header, "-1:57:1:133");
    assert_eq!(table.entries.len(), 2);
    let snow = table.get(66).unwrap();
    assert_eq!(snow.name, "SNOW_DEPTH");
    assert_eq!(snow.description, "SNOW DEPTH");
    assert_eq!(snow.units, "m");
}

/// Test that a short row aborts without touching the destination
///
/// Purpose: Validate malformed-row detection and atomic output
/// Benefit: A previously installed table survives a bad regeneration
#[test]
fn test_short_row_keeps_previous_table() {
    let temp_dir = TempDir::new().unwrap();
    let converter = converter(temp_dir.path(), b"1 T2 11 sfc inst K\n2 Q2 52 sfc\n");
    let output = converter.config().output_path.clone();
    fs::write(&output, "-1:57:1:133\n11:T2:T2 [K]\n").unwrap();

    let err = converter.convert().unwrap_err();

    match err {
        TableError::MalformedRow {
            line,
            expected,
            found,
            ..
        } => {
            assert_eq!(line, 7);
            assert_eq!(expected, 6);
            assert_eq!(found, 4);
        }
        other => panic!("Expected MalformedRow, got {:?}", other),
    }
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "-1:57:1:133\n11:T2:T2 [K]\n"
    );
}

/// Test a custom header line and header block size
///
/// Purpose: Validate that configuration overrides reach parsing and writing
/// Benefit: Other centre/table numbers can be generated with the same tool
#[test]
fn test_custom_header() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("table.txt");
    fs::write(&input_path, "only header\nx A1 100 y z m3\n").unwrap();

    let converter = FixedTableConverter::new(FixedTableConfig {
        input_path,
        output_path: temp_dir.path().join("custom.tab"),
        header_lines: 1,
        table_header: "-1:7:1:2".to_string(),
    });
    converter.convert().unwrap();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("custom.tab")).unwrap(),
        "-1:7:1:2\n100:A1:A1 [m3]\n"
    );
}
