//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Invalid game state for drawing.
    #[error("invalid game state for drawing")]
    InvalidState,
    /// Fewer than two cards remain, so no round can be played.
    #[error("not enough cards left for another round")]
    DeckExhausted,
}

/// Errors that can occur when submitting a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PredictError {
    /// Invalid game state for predicting.
    #[error("invalid game state for predicting")]
    InvalidState,
    /// Input was not a recognized prediction and the game asks for another.
    #[error("unrecognized prediction")]
    Unrecognized,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur when moving on to the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvanceError {
    /// Invalid game state for advancing.
    #[error("invalid game state for advancing")]
    InvalidState,
}

/// Input was not one of the recognized prediction keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected one of h, l, s (or higher, lower, equal)")]
pub struct PredictionParseError;
