use crate::cards::{full_deck, Card};

/// Fold a set of cards into a 64-bit mask.
pub fn card_mask(cards: &[Card]) -> u64 {
    cards.iter().fold(0u64, |m, c| m | c.bit())
}

/// The undealt part of the deck: all 52 cards minus the dead ones, kept in
/// canonical [`full_deck`] order so enumeration is reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    mask: u64,
}

impl Deck {
    pub fn remaining(dead: &[Card]) -> Self {
        let dead = card_mask(dead);
        let cards: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| dead & c.bit() == 0)
            .collect();
        let mask = card_mask(&cards);
        Self { cards, mask }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.mask & card.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
