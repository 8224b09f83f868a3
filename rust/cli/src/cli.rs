//! Command-line argument definitions.
//!
//! The clap parser types live here so that `lib.rs` only deals with
//! dispatching and exit codes.

use clap::{Args, Parser, Subcommand};
use showdown_engine::equity::TiePolicy;

#[derive(Parser, Debug)]
#[command(
    name = "showdown",
    version,
    about = "Exact Texas Hold'em equity by exhaustive enumeration"
)]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Known community cards, street by street.
#[derive(Args, Debug, Clone, Default)]
pub struct BoardArgs {
    /// Three flop cards, e.g. `--flop QS JS TS`
    #[arg(long, num_args = 1..)]
    pub flop: Option<Vec<String>>,
    /// Turn card (requires --flop)
    #[arg(long)]
    pub turn: Option<String>,
    /// River card (requires --turn)
    #[arg(long)]
    pub river: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the exact equity of one starting hand
    Equity {
        /// Two hole cards, e.g. `--hole AC KD`
        #[arg(long, num_args = 1.., required = true)]
        hole: Vec<String>,
        #[command(flatten)]
        board: BoardArgs,
        /// Number of opponents (defaults to the configured value)
        #[arg(long)]
        opponents: Option<usize>,
        /// Tie credit policy: half or split
        #[arg(long)]
        tie_policy: Option<TiePolicy>,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute the equity of every starting hand drawn from the given suits
    Table {
        /// Suits the starting hands are drawn from, e.g. `CH`
        #[arg(long)]
        suits: Option<String>,
        #[command(flatten)]
        board: BoardArgs,
        /// Number of opponents (defaults to the configured value)
        #[arg(long)]
        opponents: Option<usize>,
        /// Tie credit policy: half or split
        #[arg(long)]
        tie_policy: Option<TiePolicy>,
        /// Also write one JSON object per hand to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Score a 5 to 7 card hand
    Score {
        #[arg(long, num_args = 1.., required = true)]
        cards: Vec<String>,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
