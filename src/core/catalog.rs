//! Fixed 78-card tarot catalog.
//!
//! The catalog is compiled in and never changes: 22 major arcana followed by
//! the fourteen cards of each suit in [`Suit::ALL`] order.

use crate::core::catalog_data::{CardEntry, CUPS, MAJOR_ARCANA, PENTACLES, SWORDS, WANDS};
use crate::domain::model::{Arcana, Card, Suit};

pub const MAJOR_ARCANA_COUNT: usize = 22;
pub const CARDS_PER_SUIT: usize = 14;
pub const DECK_SIZE: usize = MAJOR_ARCANA_COUNT + CARDS_PER_SUIT * 4;

#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// Builds the standard Rider-Waite ordering, every card upright.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.extend(MAJOR_ARCANA.iter().map(|e| build_card(e, Arcana::Major)));
        for suit in Suit::ALL {
            cards.extend(
                suit_entries(suit)
                    .iter()
                    .map(|e| build_card(e, Arcana::Minor(suit))),
            );
        }
        Self { cards }
    }

    pub fn all(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn major(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|card| card.is_major())
    }

    pub fn minor_by_suit(&self, suit: Suit) -> impl Iterator<Item = &Card> {
        self.cards
            .iter()
            .filter(move |card| card.suit() == Some(suit))
    }

    pub fn find(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn suit_entries(suit: Suit) -> &'static [CardEntry] {
    match suit {
        Suit::Wands => &WANDS,
        Suit::Cups => &CUPS,
        Suit::Swords => &SWORDS,
        Suit::Pentacles => &PENTACLES,
    }
}

fn build_card(entry: &CardEntry, arcana: Arcana) -> Card {
    Card {
        id: entry.id.to_string(),
        name: entry.name.to_string(),
        english_name: entry.name.to_string(),
        upright_meaning: entry.upright.to_string(),
        reversed_meaning: entry.reversed.to_string(),
        description: entry.description.to_string(),
        arcana,
        reversed: false,
    }
}
