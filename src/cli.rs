//! The chibagen command-line interface.
//!
//! This module is the entry point for all CLI commands and orchestrates
//! the generator library functions.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::errors::{io_error, print_error, ErrorKind, ErrorReporting, InputContext, SourceContext};
use crate::generator::{self, DEFAULT_OUTPUT_PATH, MAX_FIELD_COUNT, MIN_FIELD_COUNT};

// ============================================================================
// CLI ARGUMENTS - Command-line argument definitions
// ============================================================================

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "chibagen",
    version,
    about = "Generates the CHIBA reflected-struct macro header for C consumers."
)]
pub struct ChibaGenArgs {
    #[command(subcommand)]
    pub command: ArgsCommand,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// Generate the macro header and write it to disk.
    Generate {
        /// Maximum number of fields a reflected struct may declare (1-256).
        /// Prompts on stdin when omitted.
        #[arg(short = 'n', long)]
        count: Option<i64>,
        /// Where to write the generated header.
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },
    /// Print the generated header to stdout without touching disk.
    Show {
        /// Maximum number of fields a reflected struct may declare (1-256).
        /// Prompts on stdin when omitted.
        #[arg(short = 'n', long)]
        count: Option<i64>,
    },
}

// ============================================================================
// MAIN ENTRY POINT - Direct generator calls
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = ChibaGenArgs::parse();

    match args.command {
        ArgsCommand::Generate { count, output } => {
            let (count, ctx) = resolve_count_or_exit(count);
            if let Err(e) = generator::write_header(count, &ctx, &output) {
                print_error(e);
                process::exit(1);
            }
            println!("Generated {} (arities 1..={})", output.display(), count);
        }

        ArgsCommand::Show { count } => {
            let (count, ctx) = resolve_count_or_exit(count);
            let text = generator::assemble(count, &ctx).unwrap_or_else(|e| {
                print_error(e);
                process::exit(1);
            });
            print!("{text}");
        }
    }
}

// ============================================================================
// HELPER FUNCTIONS - Count acquisition
// ============================================================================

/// Resolves the field count from the argument if given, otherwise from an
/// interactive stdin prompt. Range validation happens later in the
/// assembler; this only gets an integer and the context it came from.
fn resolve_count_or_exit(count: Option<i64>) -> (i64, InputContext) {
    match count {
        Some(value) => {
            let ctx = InputContext::new(SourceContext::from_input(value.to_string()));
            (value, ctx)
        }
        None => prompt_for_count().unwrap_or_else(|e| {
            print_error(e);
            process::exit(1);
        }),
    }
}

/// Prompts on stdout and reads one integer line from stdin.
fn prompt_for_count() -> Result<(i64, InputContext), crate::ChibaGenError> {
    print!(
        "Maximum field count to generate ({}-{}): ",
        MIN_FIELD_COUNT, MAX_FIELD_COUNT
    );
    io::stdout()
        .flush()
        .map_err(|source| io_error(ErrorKind::Prompt { source }))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|source| io_error(ErrorKind::Prompt { source }))?;

    let input = line.trim();
    let ctx = InputContext::new(SourceContext::from_input(input));
    match input.parse::<i64>() {
        Ok(value) => Ok((value, ctx)),
        Err(_) => Err(ctx.invalid_count(input, ctx.source.full_span())),
    }
}
