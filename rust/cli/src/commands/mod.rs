//! Command handler modules for the showdown CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod cfg;
mod equity;
mod score;
mod table;

pub use cfg::handle_cfg_command;
pub use equity::handle_equity_command;
pub use score::handle_score_command;
pub use table::handle_table_command;

use crate::cli::BoardArgs;
use crate::config::{self, Config};
use crate::error::CliError;
use showdown_engine::cards::{Card, parse_cards};
use showdown_engine::equity::{GameState, TiePolicy};

/// Board cards parsed once from the command line.
#[derive(Debug, Clone, Default)]
pub(crate) struct KnownBoard {
    flop: Option<Vec<Card>>,
    turn: Option<Vec<Card>>,
    river: Option<Vec<Card>>,
}

impl KnownBoard {
    pub(crate) fn parse(args: &BoardArgs) -> Result<Self, CliError> {
        let single = |card: &Option<String>| {
            card.as_ref()
                .map(|c| parse_cards(std::slice::from_ref(c)))
                .transpose()
        };
        Ok(Self {
            flop: args.flop.as_deref().map(parse_cards).transpose()?,
            turn: single(&args.turn)?,
            river: single(&args.river)?,
        })
    }

    pub(crate) fn state(&self, opponents: usize, hole: &[Card]) -> Result<GameState, CliError> {
        Ok(GameState::new(
            opponents,
            hole,
            self.flop.as_deref(),
            self.turn.as_deref(),
            self.river.as_deref(),
        )?)
    }

    pub(crate) fn cards(&self) -> Vec<Card> {
        [&self.flop, &self.turn, &self.river]
            .into_iter()
            .flatten()
            .flatten()
            .copied()
            .collect()
    }
}

/// Settings after applying command-line overrides on top of the configuration.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub opponents: usize,
    pub tie_policy: TiePolicy,
    pub config: Config,
}

pub(crate) fn resolve_settings(
    opponents: Option<usize>,
    tie_policy: Option<TiePolicy>,
) -> Result<Settings, CliError> {
    let config = config::load()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    Ok(Settings {
        opponents: opponents.unwrap_or(config.opponents),
        tie_policy: tie_policy.unwrap_or(config.tie_policy),
        config,
    })
}
