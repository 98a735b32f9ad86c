//! Deck construction, shuffling, and drawing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};

/// An ordered sequence of cards consumed from the top.
///
/// A freshly built deck is in canonical order: suits in [`Suit::ALL`] order,
/// ranks ascending within each suit. Drawing never reorders the remaining
/// cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in draw order.
    cards: Vec<Card>,
    /// Index of the next card to draw.
    next: usize,
}

impl Deck {
    /// Builds the 52-card deck in canonical order.
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards, next: 0 }
    }

    /// Creates a deck that yields `draws` in order.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        Self {
            cards: draws.to_vec(),
            next: 0,
        }
    }

    /// Returns a shuffled copy of the remaining cards.
    ///
    /// The receiver is left untouched. The copy is permuted in place with a
    /// Fisher-Yates shuffle, so every ordering is equally likely for a
    /// uniform `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.order().to_vec();
        cards.shuffle(rng);
        log::debug!("shuffled {} cards", cards.len());
        Self { cards, next: 0 }
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.next).copied()?;
        self.next += 1;
        Some(card)
    }

    /// Returns the remaining cards in draw order.
    #[must_use]
    pub fn order(&self) -> &[Card] {
        &self.cards[self.next..]
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::build()
    }
}
