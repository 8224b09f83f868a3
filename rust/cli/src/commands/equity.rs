//! Equity command handler.
//!
//! Computes the exact equity of one starting hand against a number of
//! opponents, timing the enumeration. Text output is meant for people; the
//! `--json` form prints the full report for scripts.

use crate::cli::BoardArgs;
use crate::commands::{KnownBoard, resolve_settings};
use crate::error::CliError;
use crate::formatters::{format_board, format_equity};
use showdown_engine::cards::parse_cards;
use showdown_engine::equity::{TiePolicy, evaluate_equity};
use std::io::Write;
use std::time::Instant;

/// Handle the equity command.
///
/// # Arguments
///
/// * `hole` - The player's two hole cards in text form
/// * `board` - Known flop / turn / river
/// * `opponents` - Opponent count, falling back to the configuration
/// * `tie_policy` - Tie credit policy, falling back to the configuration
/// * `json` - Print the report as JSON instead of text
/// * `out` - Output stream for the result
///
/// # Errors
///
/// Returns `CliError::Engine` for invalid cards or a degenerate table and
/// `CliError::Config` when the configuration cannot be loaded.
pub fn handle_equity_command(
    hole: &[String],
    board: &BoardArgs,
    opponents: Option<usize>,
    tie_policy: Option<TiePolicy>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let settings = resolve_settings(opponents, tie_policy)?;
    let hole = parse_cards(hole)?;
    let known = KnownBoard::parse(board)?;
    let state = known.state(settings.opponents, &hole)?;

    let start = Instant::now();
    let report = evaluate_equity(&state, settings.tie_policy)?;
    let elapsed = start.elapsed();

    if json {
        let display = serde_json::json!({
            "hole": state.hole().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "board": state.board().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "report": report,
            "elapsed_ms": u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
        return Ok(());
    }

    writeln!(
        out,
        "Hole: {}  Board: {}",
        format_board(state.hole()),
        format_board(state.board())
    )?;
    writeln!(
        out,
        "Opponents: {}  Tie policy: {}",
        report.opponents, report.tie_policy
    )?;
    writeln!(out, "Equity: {}", format_equity(report.equity))?;
    writeln!(
        out,
        "Scenarios: {} over {} board(s) (wins {}, ties {}, losses {})",
        report.scenarios, report.boards, report.wins, report.ties, report.losses
    )?;
    writeln!(out, "Elapsed: {:?}", elapsed)?;
    Ok(())
}
