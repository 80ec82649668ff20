//! Registration statement rendering.
//!
//! Each record becomes one `add(...)` statement. Numeric-looking fields are
//! written bare, string fields inside double quotes with no escaping.

use crate::models::ParameterRecord;
use std::fmt::Write;
use tracing::warn;

/// Render one record as `add(d, c, p, "name", "desc", "unit", nc, missing);`
pub fn render_add_statement(record: &ParameterRecord) -> String {
    format!(
        "add({}, {}, {}, \"{}\", \"{}\", \"{}\", {}, {});",
        record.discipline,
        record.category,
        record.parameter,
        record.name,
        record.description,
        record.unit,
        record.no_coverage,
        record.missing
    )
}

/// Append a statement and its newline to `buffer`
pub fn push_statement(buffer: &mut String, record: &ParameterRecord) {
    warn_unescaped_quotes(record);
    // Writing to a String cannot fail
    let _ = writeln!(buffer, "{}", render_add_statement(record));
}

/// Quotes inside string fields end the literal early in the generated
/// statement. They are passed through unchanged and reported here.
fn warn_unescaped_quotes(record: &ParameterRecord) {
    for (field, value) in [
        ("Name", &record.name),
        ("Description", &record.description),
        ("Unit", &record.unit),
    ] {
        if value.contains('"') {
            warn!(
                "Parameter {}-{}-{}: {} contains a double quote that will not be escaped: {}",
                record.discipline, record.category, record.parameter, field, value
            );
        }
    }
}
