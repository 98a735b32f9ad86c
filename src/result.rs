//! Round and session result types.

use crate::card::Card;
use crate::options::{MID_TIER_MIN, TOP_TIER_MIN};
use crate::prediction::Prediction;

/// Result of a single resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// The round number, starting at 1.
    pub round: u8,
    /// The card shown before the prediction.
    pub current: Card,
    /// The card drawn after the prediction.
    pub next: Card,
    /// The parsed prediction, or `None` if the input was unrecognized.
    pub prediction: Option<Prediction>,
    /// Whether the prediction was correct.
    pub correct: bool,
    /// Running score after this round.
    pub score: u8,
}

/// Performance tier for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// 8 or more correct.
    Excellent,
    /// 5 to 7 correct.
    Decent,
    /// Fewer than 5 correct.
    TryAgain,
}

impl Tier {
    /// Classifies a final score.
    #[must_use]
    pub const fn classify(score: u8) -> Self {
        if score >= TOP_TIER_MIN {
            Self::Excellent
        } else if score >= MID_TIER_MIN {
            Self::Decent
        } else {
            Self::TryAgain
        }
    }

    /// Returns the message shown at the end of a session.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::Decent => "Not bad!",
            Self::TryAgain => "Give it another try!",
        }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// All rounds were played.
    RoundsComplete,
    /// Fewer than two cards were left for the next round.
    DeckExhausted,
    /// The player's input stream closed mid-session.
    InputClosed,
}

/// Final result of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Number of correct predictions.
    pub score: u8,
    /// Number of rounds that were resolved.
    pub rounds_played: u8,
    /// Why the session ended.
    pub reason: EndReason,
    /// Performance tier for `score`.
    pub tier: Tier,
}
