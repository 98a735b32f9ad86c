use crate::card::Card;
use crate::error::{AdvanceError, DrawError, PredictError};
use crate::options::{InvalidPredictionPolicy, ROUNDS};
use crate::prediction::Prediction;
use crate::result::{EndReason, RoundOutcome};

use super::{Game, GameState};

/// Cards consumed by one round.
const CARDS_PER_ROUND: usize = 2;

impl Game {
    /// Draws the current card for the round.
    ///
    /// If fewer than two cards remain the session ends instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a draw, or if the deck
    /// cannot supply a full round.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        if self.state != GameState::AwaitingDraw {
            return Err(DrawError::InvalidState);
        }

        if self.deck.remaining() < CARDS_PER_ROUND {
            self.end(EndReason::DeckExhausted);
            return Err(DrawError::DeckExhausted);
        }

        let card = self.deck.draw().ok_or(DrawError::DeckExhausted)?;
        log::debug!("round {}: current card {card}", self.round);

        self.current = Some(card);
        self.state = GameState::AwaitingPrediction;
        Ok(card)
    }

    /// Submits the player's prediction and scores the round.
    ///
    /// Unrecognized input is scored as incorrect, unless the options ask for
    /// [`InvalidPredictionPolicy::Reprompt`], in which case nothing changes
    /// and [`PredictError::Unrecognized`] is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a prediction, if the
    /// input is rejected, or if the next card is missing.
    pub fn predict(&mut self, input: &str) -> Result<RoundOutcome, PredictError> {
        if self.state != GameState::AwaitingPrediction {
            return Err(PredictError::InvalidState);
        }
        let current = self.current.ok_or(PredictError::InvalidState)?;

        let prediction = input.parse::<Prediction>().ok();
        if prediction.is_none()
            && self.options.invalid_prediction == InvalidPredictionPolicy::Reprompt
        {
            log::debug!("rejected prediction input {input:?}");
            return Err(PredictError::Unrecognized);
        }

        let next = self.deck.draw().ok_or(PredictError::NoCards)?;
        let correct = prediction.is_some_and(|p| p.is_correct(current, next));
        if correct {
            self.score += 1;
        }
        self.rounds_played += 1;
        log::debug!(
            "round {}: {current} -> {next}, predicted {prediction:?}, actual {}, correct {correct}",
            self.round,
            Prediction::actual(current, next)
        );

        self.current = None;
        self.state = GameState::Resolved;

        Ok(RoundOutcome {
            round: self.round,
            current,
            next,
            prediction,
            correct,
            score: self.score,
        })
    }

    /// Moves on from a resolved round.
    ///
    /// Returns the new state: [`GameState::AwaitingDraw`] for another round,
    /// or [`GameState::SessionEnded`] once every round has been played.
    ///
    /// # Errors
    ///
    /// Returns an error if the current round has not been resolved.
    pub fn advance(&mut self) -> Result<GameState, AdvanceError> {
        if self.state != GameState::Resolved {
            return Err(AdvanceError::InvalidState);
        }

        if self.round >= ROUNDS {
            self.end(EndReason::RoundsComplete);
        } else {
            self.round += 1;
            self.state = GameState::AwaitingDraw;
        }

        Ok(self.state)
    }
}
