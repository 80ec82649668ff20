use clap::Parser;
use paramtab::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been logged by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("paramtab - Meteorological Parameter Table Converter");
    println!("===================================================");
    println!();
    println!("Convert parameter reference tables into add(...) registration statements");
    println!("and colon-delimited .tab lookup tables.");
    println!();
    println!("USAGE:");
    println!("    paramtab <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    statements  Render add(...) statements from a CSV parameter table");
    println!("    tab         Convert a fixed-field parameter table into a .tab lookup table");
    println!("    check-tab   Read a .tab lookup table and summarize its entries");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose    Increase logging verbosity (repeatable)");
    println!("    -q, --quiet      Only log errors");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Print statements for a CSV table:");
    println!("    paramtab statements UserTable_MRMS_v12.2.csv");
    println!();
    println!("    # Write afwa_133.tab from ./wrf_param_output_V133.txt:");
    println!("    paramtab tab --verify");
    println!();
    println!("For detailed help on any command, use:");
    println!("    paramtab <COMMAND> --help");
}
