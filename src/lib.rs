//! A single-player blackjack environment for reinforcement-learning agents.
//!
//! The crate provides a [`Game`] type that deals from a shuffled 52-card
//! deck, defers the player's first Ace so its value can be chosen at scoring
//! time, and resolves hit/stand actions against a dealer who draws to 17.
//!
//! # Example
//!
//! ```no_run
//! use bjenv::{Game, GameOptions, LogOption, StepResult};
//!
//! let options = GameOptions::default().with_log_option(LogOption::Muted);
//! let mut game = Game::new(options, 42)?;
//! game.reset()?;
//!
//! let state = game.observe_state().expect("round was dealt");
//! let step = if state.player_count < 12 { game.hit()? } else { game.stand()? };
//! if let StepResult::Finished(outcome) = step {
//!     println!("{outcome}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod action;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod logger;
pub mod options;
pub mod result;

// Re-export main types
pub use action::Action;
pub use card::{Card, DECK_SIZE};
pub use error::{CountError, GameError, LogError, ParseActionError, ParseCardError};
pub use game::{DEALER_STANDS_ON, Game, Observation, StateObservation};
pub use hand::{DealerHand, PlayerHand, card_value, count_hand, count_labels};
pub use logger::{LogSink, Logger};
pub use options::{GameOptions, LogOption};
pub use result::{Outcome, StepResult};
