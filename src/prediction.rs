//! Player predictions and the high-low resolution rule.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::error::PredictionParseError;

/// What the player expects the next card's rank to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prediction {
    /// Next rank is strictly higher.
    Higher,
    /// Next rank is strictly lower.
    Lower,
    /// Next rank is the same.
    Equal,
}

impl Prediction {
    /// Returns whether this prediction holds for `next` drawn after `current`.
    ///
    /// Only ranks are compared; suits never matter.
    #[must_use]
    pub fn is_correct(self, current: Card, next: Card) -> bool {
        self == Self::actual(current, next)
    }

    /// Returns the prediction that is correct for this pair of cards.
    #[must_use]
    pub fn actual(current: Card, next: Card) -> Self {
        match next.rank.cmp(&current.rank) {
            Ordering::Greater => Self::Higher,
            Ordering::Less => Self::Lower,
            Ordering::Equal => Self::Equal,
        }
    }

    /// Parses raw player input and resolves it against the two cards.
    ///
    /// Unrecognized input is never correct.
    #[must_use]
    pub fn resolve(input: &str, current: Card, next: Card) -> bool {
        input
            .parse::<Self>()
            .is_ok_and(|prediction| prediction.is_correct(current, next))
    }

    /// Returns the short input key for this prediction.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Higher => "h",
            Self::Lower => "l",
            Self::Equal => "s",
        }
    }
}

impl FromStr for Prediction {
    type Err = PredictionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "h" | "higher" => Ok(Self::Higher),
            "l" | "lower" => Ok(Self::Lower),
            "s" | "same" | "equal" => Ok(Self::Equal),
            _ => Err(PredictionParseError),
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Higher => "higher",
            Self::Lower => "lower",
            Self::Equal => "equal",
        })
    }
}
