use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{has_duplicates, Card};
use crate::errors::EquityError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        };
        f.write_str(name)
    }
}

/// Totally ordered hand value. Numeric comparison reproduces poker ranking:
/// higher is strictly stronger, equal is a split.
///
/// Layout: category in bits 20..24, then five kicker ranks as 4-bit nibbles
/// from most to least significant. Ranks never exceed 14, so any category
/// outweighs every kicker combination below it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Score(u64);

impl Score {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks, unused slots are 0
    pub kickers: [u8; 5],
}

impl HandStrength {
    pub fn score(&self) -> Score {
        let packed = self
            .kickers
            .iter()
            .fold(self.category as u64, |acc, &k| (acc << 4) | k as u64);
        Score(packed)
    }
}

/// Rank occurrence table, built once per hand and read-only afterwards.
#[derive(Debug, Clone)]
struct RankCounts {
    counts: [u8; 15], // 2..14 used
    mask: u16,        // bit r set when rank r is present
}

impl RankCounts {
    fn new(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        let mut mask = 0u16;
        for c in cards {
            let r = c.rank.value();
            counts[r as usize] += 1;
            mask |= 1 << r;
        }
        Self { counts, mask }
    }

    /// Ranks occurring exactly `n` times, highest first.
    fn ranks_with(&self, n: u8) -> impl Iterator<Item = u8> + '_ {
        (2..=14u8).rev().filter(move |&r| self.counts[r as usize] == n)
    }

    fn count(&self, rank: u8) -> u8 {
        self.counts[rank as usize]
    }
}

/// Score a hand of 5 to 7 distinct cards.
///
/// Categories are tested in strict precedence order and the first match
/// wins, so a 7-card hand always reports its best category and, within it,
/// its best kickers.
pub fn evaluate_hand(cards: &[Card]) -> HandStrength {
    debug_assert!((5..=7).contains(&cards.len()));

    let counts = RankCounts::new(cards);
    let mut suit_counts = [0u8; 4];
    let mut suit_masks = [0u16; 4];
    for c in cards {
        let s = c.suit.index();
        suit_counts[s] += 1;
        suit_masks[s] |= 1 << c.rank.value();
    }
    // at most seven cards, so at most one suit can reach five
    let flush_mask = (0..4)
        .find(|&s| suit_counts[s] >= 5)
        .map(|s| suit_masks[s]);

    // Straight flush
    if let Some(high) = flush_mask.and_then(straight_high_from_mask) {
        return HandStrength {
            category: Category::StraightFlush,
            kickers: [high, 0, 0, 0, 0],
        };
    }

    // Four of a kind
    if let Some(quad) = counts.ranks_with(4).next() {
        let mut k = [quad, 0, 0, 0, 0];
        fill_kickers(&mut k, 1, counts.mask & !(1 << quad));
        return HandStrength {
            category: Category::FourOfAKind,
            kickers: k,
        };
    }

    // Full house
    if let Some(trip) = counts.ranks_with(3).next() {
        let pair = (2..=14u8)
            .rev()
            .find(|&r| r != trip && counts.count(r) >= 2);
        if let Some(pair) = pair {
            return HandStrength {
                category: Category::FullHouse,
                kickers: [trip, pair, 0, 0, 0],
            };
        }
    }

    // Flush
    if let Some(mask) = flush_mask {
        let mut k = [0u8; 5];
        fill_kickers(&mut k, 0, mask);
        return HandStrength {
            category: Category::Flush,
            kickers: k,
        };
    }

    // Straight
    if let Some(high) = straight_high_from_mask(counts.mask) {
        return HandStrength {
            category: Category::Straight,
            kickers: [high, 0, 0, 0, 0],
        };
    }

    // Three of a kind: full house is already ruled out
    if let Some(trip) = counts.ranks_with(3).next() {
        let mut k = [trip, 0, 0, 0, 0];
        fill_kickers(&mut k[..3], 1, counts.mask & !(1 << trip));
        return HandStrength {
            category: Category::ThreeOfAKind,
            kickers: k,
        };
    }

    let mut pairs = counts.ranks_with(2);
    match (pairs.next(), pairs.next()) {
        (Some(high), Some(low)) => {
            // a third pair stays eligible as the side kicker
            let mut k = [high, low, 0, 0, 0];
            fill_kickers(&mut k[..3], 2, counts.mask & !(1 << high) & !(1 << low));
            HandStrength {
                category: Category::TwoPair,
                kickers: k,
            }
        }
        (Some(pair), None) => {
            let mut k = [pair, 0, 0, 0, 0];
            fill_kickers(&mut k[..4], 1, counts.mask & !(1 << pair));
            HandStrength {
                category: Category::OnePair,
                kickers: k,
            }
        }
        _ => {
            let mut k = [0u8; 5];
            fill_kickers(&mut k, 0, counts.mask);
            HandStrength {
                category: Category::HighCard,
                kickers: k,
            }
        }
    }
}

/// Checked scoring entry point: rejects anything but 5..=7 distinct cards.
pub fn score(cards: &[Card]) -> Result<Score, EquityError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EquityError::invalid(format!(
            "a scored hand needs 5 to 7 cards, got {}",
            cards.len()
        )));
    }
    if has_duplicates(cards) {
        return Err(EquityError::invalid("a scored hand contains a duplicate card"));
    }
    Ok(evaluate_hand(cards).score())
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

/// Write ranks present in `mask` into `slots[from..]`, highest first.
fn fill_kickers(slots: &mut [u8], from: usize, mask: u16) {
    let mut ranks = (2..=14u8).rev().filter(|&r| mask & (1 << r) != 0);
    for slot in slots.iter_mut().skip(from) {
        match ranks.next() {
            Some(r) => *slot = r,
            None => break,
        }
    }
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    let mut m = mask;
    // Ace also plays low for the wheel
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    // Sliding 5-bit window from Ace(14) down to 5
    for high in (5..=14u8).rev() {
        let window = 0b11111u16 << (high - 4);
        if (m & window) == window {
            return Some(high);
        }
    }
    None
}
