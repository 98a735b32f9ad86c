//! Game configuration options.

/// Number of rounds in a session.
pub const ROUNDS: u8 = 10;

/// Lowest score that earns [`Tier::Excellent`](crate::Tier::Excellent).
pub const TOP_TIER_MIN: u8 = 8;

/// Lowest score that earns [`Tier::Decent`](crate::Tier::Decent).
pub const MID_TIER_MIN: u8 = 5;

/// How the game treats input that is not a recognized prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum InvalidPredictionPolicy {
    /// Resolve the round as an incorrect guess.
    #[default]
    CountAsIncorrect,
    /// Reject the input and keep waiting for a prediction. No card is drawn
    /// and the round is not consumed.
    Reprompt,
}

/// Configuration options for a high-low game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hilo::{GameOptions, InvalidPredictionPolicy};
///
/// let options = GameOptions::default()
///     .with_invalid_prediction(InvalidPredictionPolicy::Reprompt);
/// assert_eq!(options.invalid_prediction, InvalidPredictionPolicy::Reprompt);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Handling of unrecognized prediction input.
    pub invalid_prediction: InvalidPredictionPolicy,
}

impl GameOptions {
    /// Sets how unrecognized predictions are handled.
    #[must_use]
    pub const fn with_invalid_prediction(mut self, policy: InvalidPredictionPolicy) -> Self {
        self.invalid_prediction = policy;
        self
    }
}
