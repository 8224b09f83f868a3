//! Card, hand and equity formatters for terminal display.
//!
//! Pure functions turning engine values into terminal text. Suits use
//! Unicode symbols where the terminal supports them and fall back to the
//! engine's letter form otherwise.
//!
//! ## Example
//!
//! ```rust
//! use showdown_engine::cards::{Card, Rank, Suit};
//! use showdown_cli::formatters::{format_board, format_card, format_equity};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "AS");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! assert_eq!(format_equity(0.5), "50.00%");
//! ```

use showdown_engine::cards::{Card, Suit, all_ranks};
use showdown_engine::hand::HandStrength;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit using ♥ ♦ ♣ ♠, or the letters H D C S as fallback.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.symbol().to_string()
    }
}

/// Format a Card as rank followed by suit, e.g. "A♠" or "AS".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(&card.suit))
}

/// Format a list of cards as `[A♠ K♥ ...]`.
pub fn format_board(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", inner.join(" "))
}

/// Format an equity in `[0, 1]` as a percentage with two decimals.
pub fn format_equity(equity: f64) -> String {
    format!("{:.2}%", equity * 100.0)
}

/// Format a hand strength as its category followed by the meaningful kickers,
/// e.g. `Two Pair (K Q 9)`.
pub fn format_strength(strength: &HandStrength) -> String {
    let kickers: Vec<String> = strength
        .kickers
        .iter()
        .take_while(|&&k| k != 0)
        .map(|&k| rank_symbol(k))
        .collect();
    format!("{} ({})", strength.category, kickers.join(" "))
}

fn rank_symbol(value: u8) -> String {
    all_ranks()
        .iter()
        .find(|r| r.value() == value)
        .map(|r| r.symbol().to_string())
        .unwrap_or_else(|| value.to_string())
}
