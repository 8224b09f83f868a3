//! Score command handler: evaluates a single 5 to 7 card hand.

use crate::error::CliError;
use crate::formatters::{format_board, format_strength};
use showdown_engine::cards::parse_cards;
use showdown_engine::hand::{evaluate_hand, score};
use std::io::Write;

/// Handle the score command.
///
/// Prints the parsed cards, the best category with its kickers, and the
/// packed numeric score.
///
/// # Errors
///
/// Returns `CliError::Engine` for malformed or duplicate cards and for a
/// card count outside 5..=7.
pub fn handle_score_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(cards)?;
    let value = score(&cards)?;
    let strength = evaluate_hand(&cards);

    writeln!(out, "Hand: {}", format_board(&cards))?;
    writeln!(out, "Category: {}", format_strength(&strength))?;
    writeln!(out, "Score: {}", value)?;
    Ok(())
}
