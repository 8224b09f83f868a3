//! # showdown-engine: Exact Texas Hold'em Equity
//!
//! Computes a player's probability of winning a Texas Hold'em hand by
//! enumerating every completion of the board and every assignment of
//! opponent hands consistent with the known cards. No sampling is involved:
//! identical inputs always produce identical results.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the two-character text form
//! - [`deck`] - Remaining-deck construction and card bitmasks
//! - [`hand`] - Hand scoring for 5 to 7 cards into a totally ordered [`hand::Score`]
//! - [`equity`] - The enumeration engine and its report
//! - [`errors`] - Error types for invalid input and degenerate enumerations
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::cards::parse_cards;
//! use showdown_engine::hand::{evaluate_hand, Category};
//!
//! let cards = parse_cards(&["TH", "JH", "QH", "KH", "AH", "2C", "3D"]).unwrap();
//! let strength = evaluate_hand(&cards);
//! assert_eq!(strength.category, Category::StraightFlush);
//! ```
//!
//! ## Equity
//!
//! ```rust
//! use showdown_engine::equity::{evaluate_equity, GameState, TiePolicy};
//!
//! let state = GameState::parse(
//!     1,
//!     &["AS", "KS"],
//!     Some(&["QS", "JS", "TS"]),
//!     Some(&["2D"]),
//!     None,
//! )
//! .unwrap();
//! let report = evaluate_equity(&state, TiePolicy::HalfCredit).unwrap();
//! assert_eq!(report.boards, 46);
//! assert_eq!(report.equity, 1.0);
//! ```

pub mod cards;
pub mod deck;
pub mod equity;
pub mod errors;
pub mod hand;

pub use equity::compute_equity;
pub use errors::EquityError;
