//! Table command handler: the batch driver over starting hands.
//!
//! Walks every two-card starting hand drawn from the chosen suits, computes
//! its exact equity against the known board, and prints one
//! `hand<TAB>equity<TAB>seconds` line per hand followed by the total time.
//! With `--output`, each result is also appended to a JSONL file.

use crate::cli::BoardArgs;
use crate::commands::{KnownBoard, resolve_settings};
use crate::config::parse_suits;
use crate::error::CliError;
use crate::ui;
use serde::Serialize;
use showdown_engine::cards::{Card, all_ranks};
use showdown_engine::deck::Deck;
use showdown_engine::equity::{TiePolicy, evaluate_equity};
use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Serialize)]
struct TableRow {
    hand: String,
    equity: f64,
    scenarios: u64,
    seconds: f64,
}

/// Handle the table command.
///
/// # Arguments
///
/// * `suits` - Suits the starting hands are drawn from (configuration default: all four)
/// * `board` - Known flop / turn / river shared by every hand
/// * `opponents` - Opponent count, falling back to the configuration
/// * `tie_policy` - Tie credit policy, falling back to the configuration
/// * `output` - Optional JSONL file receiving one object per hand
/// * `out` - Output stream for the table
/// * `err` - Output stream for warnings
pub fn handle_table_command(
    suits: Option<&str>,
    board: &BoardArgs,
    opponents: Option<usize>,
    tie_policy: Option<TiePolicy>,
    output: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let settings = resolve_settings(opponents, tie_policy)?;
    let suits = parse_suits(suits.unwrap_or(&settings.config.table_suits))
        .map_err(|e| CliError::InvalidInput(format!("suits {}", e)))?;
    let known = KnownBoard::parse(board)?;
    let board_cards = known.cards();

    // every card of the chosen suits that is not already on the board
    let live = Deck::remaining(&board_cards);
    let pool: Vec<Card> = suits
        .iter()
        .flat_map(|&suit| all_ranks().map(|rank| Card { suit, rank }))
        .filter(|c| live.contains(*c))
        .collect();

    if board_cards.is_empty() {
        ui::display_warning(
            err,
            "no board given: every hand enumerates all 2,118,760 boards and takes minutes",
        )?;
    }

    let mut writer = match output {
        Some(path) => Some(open_output(path)?),
        None => None,
    };

    let total = Instant::now();
    let mut hands = 0usize;
    for (i, &first) in pool.iter().enumerate() {
        for &second in &pool[i + 1..] {
            let state = known.state(settings.opponents, &[first, second])?;
            let start = Instant::now();
            let report = evaluate_equity(&state, settings.tie_policy)?;
            let seconds = start.elapsed().as_secs_f64();

            let row = TableRow {
                hand: format!("{} {}", first, second),
                equity: report.equity,
                scenarios: report.scenarios,
                seconds,
            };
            tracing::debug!(hand = %row.hand, equity = row.equity, seconds, "starting hand settled");
            writeln!(out, "{}\t{:.6}\t{:.3}", row.hand, row.equity, row.seconds)?;
            if let Some(w) = writer.as_mut() {
                serde_json::to_writer(&mut *w, &row)?;
                w.write_all(b"\n")?;
            }
            hands += 1;
        }
    }

    if let Some(w) = writer.as_mut() {
        w.flush()?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Total time: {:.3}s for {} hand(s)",
        total.elapsed().as_secs_f64(),
        hands
    )?;
    Ok(())
}

fn open_output(path: &str) -> Result<BufWriter<File>, CliError> {
    let path = Path::new(path);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}
