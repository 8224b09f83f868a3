use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::{has_duplicates, parse_cards, Card};
use crate::deck::{card_mask, Deck};
use crate::errors::EquityError;
use crate::hand::{evaluate_hand, Score};

/// How much of the board is already known.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// No community cards yet
    Preflop,
    /// Three community cards
    Flop,
    /// Four community cards
    Turn,
    /// All five community cards
    River,
}

impl Street {
    fn from_known(known: usize) -> Street {
        match known {
            0 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }

    /// Community cards still to come on this street.
    pub fn unknown_board_cards(self) -> usize {
        match self {
            Street::Preflop => 5,
            Street::Flop => 2,
            Street::Turn => 1,
            Street::River => 0,
        }
    }
}

/// Credit given to the player when nobody beats them but someone ties.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum TiePolicy {
    /// Any tie without a better hand is worth half a win, however many
    /// opponents tie.
    #[default]
    #[serde(rename = "half")]
    HalfCredit,
    /// The pot is split evenly between the player and every tying opponent.
    #[serde(rename = "split")]
    SplitPot,
}

impl TiePolicy {
    pub fn tie_credit(self, tying_opponents: usize) -> f64 {
        match self {
            TiePolicy::HalfCredit => 0.5,
            TiePolicy::SplitPot => 1.0 / (tying_opponents as f64 + 1.0),
        }
    }
}

impl fmt::Display for TiePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiePolicy::HalfCredit => f.write_str("half"),
            TiePolicy::SplitPot => f.write_str("split"),
        }
    }
}

impl FromStr for TiePolicy {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "half" => Ok(TiePolicy::HalfCredit),
            "split" => Ok(TiePolicy::SplitPot),
            other => Err(EquityError::invalid(format!(
                "unknown tie policy '{}' (expected half or split)",
                other
            ))),
        }
    }
}

/// Validated equity question: the player's hole cards, the known board and
/// how many opponents are still in the hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    opponents: usize,
    hole: [Card; 2],
    board: Vec<Card>,
}

impl GameState {
    /// Build a state from parsed cards.
    ///
    /// Streets are nested: `turn` requires `flop` and `river` requires
    /// `turn`. Every card across hole, flop, turn and river must be distinct.
    pub fn new(
        opponents: usize,
        hole: &[Card],
        flop: Option<&[Card]>,
        turn: Option<&[Card]>,
        river: Option<&[Card]>,
    ) -> Result<Self, EquityError> {
        if opponents < 1 {
            return Err(EquityError::invalid("at least one opponent is required"));
        }
        let hole: [Card; 2] = hole.try_into().map_err(|_| {
            EquityError::invalid(format!("expected 2 hole cards, got {}", hole.len()))
        })?;

        let mut board = Vec::with_capacity(5);
        match (flop, turn, river) {
            (None, Some(_), _) => return Err(EquityError::invalid("turn given without a flop")),
            (_, None, Some(_)) => return Err(EquityError::invalid("river given without a turn")),
            _ => {}
        }
        for (name, cards, expected) in [("flop", flop, 3), ("turn", turn, 1), ("river", river, 1)] {
            let Some(cards) = cards else { break };
            if cards.len() != expected {
                return Err(EquityError::invalid(format!(
                    "expected {} {} card(s), got {}",
                    expected,
                    name,
                    cards.len()
                )));
            }
            board.extend_from_slice(cards);
        }

        let mut known = hole.to_vec();
        known.extend_from_slice(&board);
        if has_duplicates(&known) {
            return Err(EquityError::invalid(
                "the same card appears more than once across hole cards and board",
            ));
        }

        Ok(Self {
            opponents,
            hole,
            board,
        })
    }

    /// Build a state from the two-character textual card form.
    pub fn parse<S: AsRef<str>>(
        opponents: usize,
        hole: &[S],
        flop: Option<&[S]>,
        turn: Option<&[S]>,
        river: Option<&[S]>,
    ) -> Result<Self, EquityError> {
        let hole = parse_cards(hole)?;
        let flop = flop.map(parse_cards).transpose()?;
        let turn = turn.map(parse_cards).transpose()?;
        let river = river.map(parse_cards).transpose()?;
        Self::new(
            opponents,
            &hole,
            flop.as_deref(),
            turn.as_deref(),
            river.as_deref(),
        )
    }

    pub fn opponents(&self) -> usize {
        self.opponents
    }

    pub fn hole(&self) -> &[Card; 2] {
        &self.hole
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn street(&self) -> Street {
        Street::from_known(self.board.len())
    }
}

/// Aggregate of one exact enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityReport {
    pub opponents: usize,
    pub street: Street,
    pub tie_policy: TiePolicy,
    /// Board completions enumerated
    pub boards: u64,
    /// Disjoint opponent assignments counted over all boards
    pub scenarios: u64,
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
    /// Sum of credits: 1 per win, the tie credit per tie
    pub credit: f64,
    pub equity: f64,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Verdict {
    Beats,
    Ties,
    Loses,
}

#[derive(Debug, Copy, Clone)]
struct Candidate {
    mask: u64,
    verdict: Verdict,
}

#[derive(Debug, Default)]
struct Tally {
    boards: u64,
    scenarios: u64,
    wins: u64,
    ties: u64,
    losses: u64,
    credit: f64,
}

impl Tally {
    fn record(&mut self, beaten: bool, tying: usize, policy: TiePolicy) {
        self.scenarios += 1;
        if beaten {
            self.losses += 1;
        } else if tying > 0 {
            self.ties += 1;
            self.credit += policy.tie_credit(tying);
        } else {
            self.wins += 1;
            self.credit += 1.0;
        }
    }
}

/// Exact equity of the player against `opponents` random hands, enumerating
/// every completion of the board and every disjoint opponent assignment.
///
/// Uses the half-credit tie policy.
///
/// ```
/// use showdown_engine::equity::compute_equity;
///
/// let board_nuts = compute_equity(
///     1,
///     &["AS", "KS"],
///     Some(&["QS", "JS", "TS"]),
///     Some(&["2D"]),
///     Some(&["3C"]),
/// )
/// .unwrap();
/// assert_eq!(board_nuts, 1.0);
/// ```
pub fn compute_equity<S: AsRef<str>>(
    opponents: usize,
    hole: &[S],
    flop: Option<&[S]>,
    turn: Option<&[S]>,
    river: Option<&[S]>,
) -> Result<f64, EquityError> {
    let state = GameState::parse(opponents, hole, flop, turn, river)?;
    Ok(evaluate_equity(&state, TiePolicy::HalfCredit)?.equity)
}

/// Run the full enumeration for `state` and return the aggregate report.
pub fn evaluate_equity(state: &GameState, policy: TiePolicy) -> Result<EquityReport, EquityError> {
    let mut dead = state.hole.to_vec();
    dead.extend_from_slice(&state.board);
    let deck = Deck::remaining(&dead);
    let street = state.street();
    let unknown = street.unknown_board_cards();

    // each opponent needs two of the cards the board leaves behind
    if state.opponents > deck.len().saturating_sub(unknown) / 2 {
        return Err(EquityError::ArithmeticDegenerate {
            opponents: state.opponents,
            remaining: deck.len(),
        });
    }

    debug!(
        opponents = state.opponents,
        ?street,
        unknown,
        remaining = deck.len(),
        %policy,
        "enumerating board completions"
    );

    let mut tally = Tally::default();
    let mut board = state.board.clone();
    let mut rest: Vec<Card> = Vec::with_capacity(deck.len());
    let mut candidates: Vec<Candidate> = Vec::new();
    let known = board.len();

    for completion in deck.cards().iter().copied().combinations(unknown) {
        board.truncate(known);
        board.extend_from_slice(&completion);
        let board_mask = card_mask(&board);
        rest.clear();
        rest.extend(deck.cards().iter().filter(|c| c.bit() & board_mask == 0));

        tally.boards += 1;
        let before = tally.scenarios;
        showdown(
            &board,
            &state.hole,
            &rest,
            state.opponents,
            policy,
            &mut candidates,
            &mut tally,
        );
        trace!(board = ?board, scenarios = tally.scenarios - before, "board settled");
    }

    if tally.scenarios == 0 {
        return Err(EquityError::ArithmeticDegenerate {
            opponents: state.opponents,
            remaining: deck.len(),
        });
    }

    let equity = tally.credit / tally.scenarios as f64;
    debug!(
        boards = tally.boards,
        scenarios = tally.scenarios,
        equity,
        "equity computed"
    );

    Ok(EquityReport {
        opponents: state.opponents,
        street,
        tie_policy: policy,
        boards: tally.boards,
        scenarios: tally.scenarios,
        wins: tally.wins,
        ties: tally.ties,
        losses: tally.losses,
        credit: tally.credit,
        equity,
    })
}

/// Settle one fully specified board.
///
/// Phase 1 scores every possible opponent hand once and keeps only its
/// verdict against the player. Phase 2 composes verdicts over every disjoint
/// assignment of `opponents` hands without rescoring.
fn showdown(
    board: &[Card],
    hole: &[Card; 2],
    rest: &[Card],
    opponents: usize,
    policy: TiePolicy,
    candidates: &mut Vec<Candidate>,
    tally: &mut Tally,
) {
    let player = score_with(board, hole[0], hole[1]);

    candidates.clear();
    for (a, b) in rest.iter().copied().tuple_combinations() {
        let verdict = match score_with(board, a, b).cmp(&player) {
            std::cmp::Ordering::Greater => Verdict::Beats,
            std::cmp::Ordering::Equal => Verdict::Ties,
            std::cmp::Ordering::Less => Verdict::Loses,
        };
        candidates.push(Candidate {
            mask: a.bit() | b.bit(),
            verdict,
        });
    }

    assign(candidates, 0, opponents, 0, false, 0, policy, tally);
}

/// Walk every combination of `left` more candidates drawn from
/// `candidates[start..]`. Combinations that reuse a card are never counted,
/// so a branch is cut as soon as it overlaps.
#[allow(clippy::too_many_arguments)]
fn assign(
    candidates: &[Candidate],
    start: usize,
    left: usize,
    used: u64,
    beaten: bool,
    tying: usize,
    policy: TiePolicy,
    tally: &mut Tally,
) {
    if left == 0 {
        tally.record(beaten, tying, policy);
        return;
    }
    if candidates.len() < start + left {
        return;
    }
    for i in start..=candidates.len() - left {
        let cand = candidates[i];
        if cand.mask & used != 0 {
            continue;
        }
        assign(
            candidates,
            i + 1,
            left - 1,
            used | cand.mask,
            beaten || cand.verdict == Verdict::Beats,
            tying + usize::from(cand.verdict == Verdict::Ties),
            policy,
            tally,
        );
    }
}

fn score_with(board: &[Card], a: Card, b: Card) -> Score {
    let mut hand = [a; 7];
    hand[1] = b;
    hand[2..2 + board.len()].copy_from_slice(board);
    evaluate_hand(&hand[..2 + board.len()]).score()
}
