//! gridref - A1 cell reference and range algebra from the command line

mod commands;
mod error;

use std::env;

use gridref_core::reference::ExpandLimits;

use crate::error::CliError;

fn print_usage() {
    eprintln!("Usage: gridref [OPTIONS] <COMMAND> [ARGS...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  column <LETTERS|INDEX>        Convert between column letters and 0-based index");
    eprintln!("  cell <REF>                    Print the 0-based row and column of a reference");
    eprintln!("  anchor <REF>                  Like cell, plus which axes are $-anchored");
    eprintln!("  offset <REF> <ROWS> <COLS>    Move a reference");
    eprintln!("  normalize <RANGE>             Order range corners top-left to bottom-right");
    eprintln!("  size <RANGE>                  Print rows, columns and total cells");
    eprintln!("  expand <RANGE>                List every cell, row by row");
    eprintln!("  contains <REF> <RANGE>        TRUE if the cell lies in the range");
    eprintln!("  intersect <RANGE> <RANGE>     Overlap of two ranges, or NONE");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --max-cells <N>               Largest range expand will list (default: 1000000)");
    eprintln!("  -h, --help                    Print help");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut limits = ExpandLimits::default();
    let mut positional: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--max-cells" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    eprintln!("Error: {}", CliError::MissingValue("--max-cells"));
                    std::process::exit(1);
                };
                limits.max_cells = match value.parse() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("Error: {}", CliError::InvalidNumber(value.clone()));
                        std::process::exit(1);
                    }
                };
            }
            // Negative offsets look like flags once a command is present.
            arg if arg.starts_with('-') && positional.is_empty() => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => positional.push(args[i].clone()),
        }
        i += 1;
    }

    let Some((command, rest)) = positional.split_first() else {
        eprintln!("Error: {}", CliError::MissingCommand);
        print_usage();
        std::process::exit(1);
    };

    match commands::run(command, rest, &limits) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
