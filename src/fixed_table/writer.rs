//! Colon-delimited lookup table rendering.

use crate::constants::TAB_SEPARATOR;
use crate::error::Result;
use crate::models::ParameterTriple;
use crate::output::write_atomically;
use std::path::Path;
use tracing::info;

/// Render the header line followed by one `Param:Name:Comment` line per triple
pub fn render_tab(header: &str, triples: &[ParameterTriple]) -> String {
    let mut table = String::with_capacity(header.len() + 1 + triples.len() * 48);
    table.push_str(header);
    table.push('\n');

    for triple in triples {
        table.push_str(&triple.param);
        table.push(TAB_SEPARATOR);
        table.push_str(&triple.name);
        table.push(TAB_SEPARATOR);
        table.push_str(&triple.comment);
        table.push('\n');
    }

    table
}

/// Render and atomically write a lookup table
pub fn write_tab(path: &Path, header: &str, triples: &[ParameterTriple]) -> Result<()> {
    let table = render_tab(header, triples);
    write_atomically(path, table.as_bytes())?;
    info!("Wrote {} parameters to {}", triples.len(), path.display());
    Ok(())
}
