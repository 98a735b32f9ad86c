//! A high-low card guessing game engine with optional `no_std` support.
//!
//! The crate provides a [`Deck`] builder with an injectable shuffle and a
//! [`Game`] type that runs the round flow: show a card, take a prediction,
//! draw the next card, and score it.
//!
//! # Example
//!
//! ```
//! use hilo::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let current = game.draw().unwrap();
//! let outcome = game.predict("h").unwrap();
//! assert_eq!(outcome.current, current);
//! assert_eq!(game.advance(), Ok(GameState::AwaitingDraw));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod prediction;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, RankLabel, Suit};
#[cfg(feature = "std")]
pub use console::Console;
pub use deck::Deck;
pub use error::{AdvanceError, DrawError, PredictError, PredictionParseError};
pub use game::{Game, GameState};
pub use options::{GameOptions, InvalidPredictionPolicy, MID_TIER_MIN, ROUNDS, TOP_TIER_MIN};
pub use prediction::Prediction;
pub use result::{EndReason, RoundOutcome, SessionSummary, Tier};
