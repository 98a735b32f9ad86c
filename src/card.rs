//! Card types and rank labels.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the display symbol for the suit.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Spades => "♠",
            Self::Hearts => "♥",
            Self::Diamonds => "♦",
            Self::Clubs => "♣",
        }
    }
}

/// Lowest rank (Ace).
pub const MIN_RANK: u8 = 1;

/// Highest rank (King).
pub const MAX_RANK: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * MAX_RANK as usize;

/// A playing card.
///
/// Ranks compare numerically with Ace low; the suit never takes part in a
/// high-low comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted and rendered by their number.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the short rank label (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub fn rank_label(&self) -> RankLabel {
        RankLabel(self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank_label())
    }
}

/// Display adapter for a card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankLabel(u8);

impl fmt::Display for RankLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("A"),
            11 => f.write_str("J"),
            12 => f.write_str("Q"),
            13 => f.write_str("K"),
            rank => write!(f, "{rank}"),
        }
    }
}
