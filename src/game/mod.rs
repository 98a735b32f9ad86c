//! Game engine and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::options::GameOptions;
use crate::result::{EndReason, SessionSummary, Tier};

mod round;
pub mod state;

pub use state::GameState;

/// A high-low session that owns the deck, the score, and the round flow.
///
/// Each round draws a current card, takes a prediction, and draws the next
/// card to score it. The session ends after [`ROUNDS`](crate::ROUNDS) rounds
/// or as soon as fewer than two cards remain.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Cards left to draw.
    deck: Deck,
    /// Current game state.
    state: GameState,
    /// Current round number, starting at 1.
    round: u8,
    /// Number of correct predictions.
    score: u8,
    /// Number of resolved rounds.
    rounds_played: u8,
    /// Card shown for the round in progress.
    current: Option<Card>,
    /// Set once the session ends.
    end_reason: Option<EndReason>,
}

impl Game {
    /// Creates a new game with a deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::AwaitingDraw);
    /// assert_eq!(game.cards_remaining(), hilo::DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(options, &mut rng)
    }

    /// Creates a new game with a deck shuffled by the provided random source.
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(options: GameOptions, rng: &mut R) -> Self {
        Self::with_deck(options, Deck::build().shuffled(rng))
    }

    /// Creates a new game that draws from `deck` as given.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            options,
            deck,
            state: GameState::AwaitingDraw,
            round: 1,
            score: 0,
            rounds_played: 0,
            current: None,
            end_reason: None,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current round number.
    #[must_use]
    pub const fn round(&self) -> u8 {
        self.round
    }

    /// Returns the number of correct predictions so far.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Returns the number of rounds resolved so far.
    #[must_use]
    pub const fn rounds_played(&self) -> u8 {
        self.rounds_played
    }

    /// Returns the card shown for the round in progress.
    #[must_use]
    pub const fn current_card(&self) -> Option<Card> {
        self.current
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Ends the session because the player's input closed.
    ///
    /// A round in progress is dropped without scoring. Does nothing if the
    /// session has already ended.
    pub fn abandon(&mut self) -> SessionSummary {
        if self.state != GameState::SessionEnded {
            self.current = None;
            self.end(EndReason::InputClosed);
        }
        self.build_summary(self.end_reason.unwrap_or(EndReason::InputClosed))
    }

    /// Returns the final result once the session has ended.
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        self.end_reason.map(|reason| self.build_summary(reason))
    }

    fn build_summary(&self, reason: EndReason) -> SessionSummary {
        SessionSummary {
            score: self.score,
            rounds_played: self.rounds_played,
            reason,
            tier: Tier::classify(self.score),
        }
    }

    fn end(&mut self, reason: EndReason) {
        log::info!(
            "session ended ({reason:?}): {}/{} correct",
            self.score,
            self.rounds_played
        );
        self.state = GameState::SessionEnded;
        self.end_reason = Some(reason);
    }
}
