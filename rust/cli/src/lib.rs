//! # Showdown CLI Library
//!
//! Command-line front end for the `showdown-engine` exact equity calculator.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["showdown", "equity", "--hole", "AC", "KD", "--flop", "2H", "7S", "9C"];
//! let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `equity`: Exact equity of one starting hand against N opponents
//! - `table`: Equity of every starting hand drawn from a set of suits
//! - `score`: Category and packed score of a 5 to 7 card hand
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
#[macro_use]
mod macros;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{Commands, ShowdownCli};
use commands::{
    handle_cfg_command, handle_equity_command, handle_score_command, handle_table_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["showdown", "score", "--cards", "AS", "KS", "QS", "JS", "TS"];
/// let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["equity", "table", "score", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ShowdownCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // help and version go to stdout with a zero exit code
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err);
            write_or_exit!(err, "Showdown equity CLI");
            write_or_exit!(err, "Usage: showdown <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: showdown --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        // cfg reports its own configuration errors
        Commands::Cfg => {
            return match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(_) => exit_code::ERROR,
            };
        }
        Commands::Equity {
            hole,
            board,
            opponents,
            tie_policy,
            json,
        } => handle_equity_command(&hole, &board, opponents, tie_policy, json, out),
        Commands::Table {
            suits,
            board,
            opponents,
            tie_policy,
            output,
        } => handle_table_command(
            suits.as_deref(),
            &board,
            opponents,
            tie_policy,
            output.as_deref(),
            out,
            err,
        ),
        Commands::Score { cards } => handle_score_command(&cards, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
