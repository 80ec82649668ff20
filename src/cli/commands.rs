//! Command implementations for the parameter table converter
//!
//! Each subcommand sets up logging, builds its configuration from the CLI
//! arguments, runs one pipeline and reports a short summary on stderr.

use crate::cli::args::{Args, CheckTabArgs, Commands, StatementsArgs, TabArgs};
use crate::csv_table::CsvTableConverter;
use crate::fixed_table::FixedTableConverter;
use crate::fixed_table::reader::{TabTable, read_tab_file};
use crate::models::ConversionStats;
use crate::output::write_atomically;
use anyhow::{Context, Result};
use colored::*;
use std::io::{self, Write};
use std::time::Instant;
use tracing::{debug, info};

/// Main entry point for command execution
pub fn run(args: Args) -> Result<ConversionStats> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let start_time = Instant::now();
    let stats = match args.command {
        Some(Commands::Statements(ref statements)) => run_statements(statements)?,
        Some(Commands::Tab(ref tab)) => run_tab(tab)?,
        Some(Commands::CheckTab(ref check)) => run_check_tab(check)?,
        None => ConversionStats::default(),
    };

    info!(
        "Finished in {:.2?}: {} rows read, {} written, {} lines skipped, {} corrections",
        start_time.elapsed(),
        stats.rows_read,
        stats.records_written,
        stats.lines_skipped,
        stats.total_corrections()
    );
    for (rule, count) in &stats.rule_counts {
        info!("  {}: {}", rule, count);
    }

    Ok(stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("paramtab={}", log_level)));

    // stdout carries generated statements, so logs always go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// CSV table to add(...) statements
fn run_statements(args: &StatementsArgs) -> Result<ConversionStats> {
    let config = args.to_config()?;
    let conversion = CsvTableConverter::new(config.csv)
        .convert_file(&args.source)
        .with_context(|| format!("Failed to convert {}", args.source.display()))?;

    match &args.output {
        Some(path) => {
            write_atomically(path, conversion.statements.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Wrote {} statements to {}",
                conversion.stats.records_written,
                path.display()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(conversion.statements.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write statements to stdout")?;
        }
    }

    Ok(conversion.stats)
}

/// Fixed-field table to .tab lookup table
fn run_tab(args: &TabArgs) -> Result<ConversionStats> {
    let config = args.to_config()?;
    let converter = FixedTableConverter::new(config.fixed);
    let output = &converter.config().output_path;

    let conversion = converter.convert().with_context(|| {
        format!(
            "Failed to convert {} into {}",
            converter.config().input_path.display(),
            output.display()
        )
    })?;
    info!("Wrote lookup table {}", output.display());

    if args.verify {
        let table = converter
            .verify_output()
            .with_context(|| format!("Written table {} does not parse", output.display()))?;
        print_tab_summary(&output.display().to_string(), &table);
    }

    Ok(conversion.stats)
}

/// Read a lookup table and report what the lookup facility would see
fn run_check_tab(args: &CheckTabArgs) -> Result<ConversionStats> {
    let table = read_tab_file(&args.path)
        .with_context(|| format!("Failed to read lookup table {}", args.path.display()))?;

    if args.json {
        let json = serde_json::to_string_pretty(&table.entries)
            .context("Failed to serialize table entries")?;
        println!("{}", json);
    } else {
        print_tab_summary(&args.path.display().to_string(), &table);
    }

    Ok(ConversionStats {
        rows_read: table.entries.len() + table.duplicates + table.undefined,
        ..Default::default()
    })
}

fn print_tab_summary(name: &str, table: &TabTable) {
    eprintln!("{} {}", "Lookup table".bright_green().bold(), name.bright_cyan());
    eprintln!("  Header:     {}", table.header);
    eprintln!(
        "  Parameters: {}",
        table.entries.len().to_string().bright_yellow()
    );
    if table.duplicates > 0 {
        eprintln!(
            "  {}",
            format!("Redefined:  {}", table.duplicates).bright_red()
        );
    }
    if table.undefined > 0 {
        eprintln!("  Undefined:  {}", table.undefined);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_second_logging_setup_is_an_error() {
        let args = Args::try_parse_from(["paramtab"]).unwrap();

        // Whichever call installs the global subscriber, the next one must fail
        let _ = setup_logging(&args);
        let err = setup_logging(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to initialize logging"));
    }
}
