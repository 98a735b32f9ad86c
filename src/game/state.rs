//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting to draw the current card for the next round.
    AwaitingDraw,
    /// The current card is shown and a prediction is expected.
    AwaitingPrediction,
    /// The round has been scored.
    Resolved,
    /// No more rounds will be played.
    SessionEnded,
}
