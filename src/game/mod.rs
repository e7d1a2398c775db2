//! Game engine and state management.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::action::Action;
use crate::card::{COPIES_PER_RANK, Card, DECK_SIZE};
use crate::error::{GameError, LogError};
use crate::hand::{DealerHand, PlayerHand};
use crate::logger::Logger;
use crate::options::GameOptions;
use crate::result::StepResult;

mod actions;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use state::{Observation, StateObservation};

/// Name the game logger reports itself under.
const LOGGER_NAME: &str = "BlackJack Game Simulator";

/// A single-player blackjack game against a fixed-policy dealer.
///
/// The game owns the deck, both hands, the random number generator and the
/// log sink. Every method runs to completion on the caller's thread. A new
/// game has no cards dealt; call [`Game::reset`] to start the first round.
/// Until then `hit` and `stand` fail with [`GameError::NotStarted`].
pub struct Game<R = ChaCha8Rng> {
    /// Cards left in the deck. Cards are drawn from the end.
    pub piles: Vec<Card>,
    /// Game options.
    pub options: GameOptions,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    /// Player's hand, holding the deferred Ace separately.
    player_hand: PlayerHand,
    /// Log sink.
    logger: Logger,
    /// Random number generator used for shuffling.
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured log file cannot be created.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bjenv::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42)?;
    /// game.reset()?;
    /// let step = game.hit()?;
    /// println!("reward {}", step.reward());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, LogError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game seeded from operating system entropy.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured log file cannot be created.
    pub fn from_entropy(options: GameOptions) -> Result<Self, LogError> {
        Self::with_rng(options, ChaCha8Rng::from_os_rng())
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new game drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured log file cannot be created.
    pub fn with_rng(options: GameOptions, rng: R) -> Result<Self, LogError> {
        let logger = Logger::from_option(LOGGER_NAME, &options.log_option)?;
        Ok(Self::with_logger(options, rng, logger))
    }

    /// Creates a new game with an explicit logger.
    ///
    /// `options.log_option` is ignored in favor of `logger`.
    #[must_use]
    pub fn with_logger(options: GameOptions, rng: R, logger: Logger) -> Self {
        Self {
            piles: Vec::new(),
            options,
            dealer_hand: DealerHand::new(),
            player_hand: PlayerHand::new(),
            logger,
            rng,
        }
    }

    /// Builds and shuffles a full deck.
    fn create_deck(rng: &mut R) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for card in Card::RANKS {
            cards.extend([card; COPIES_PER_RANK]);
        }

        cards.shuffle(rng);
        cards
    }

    /// Starts a new round with a freshly shuffled deck.
    ///
    /// The dealer gets two cards, then the player gets two. If the player is
    /// dealt a natural (the deferred Ace plus ten points), the round is
    /// thrown away and dealt again from a new deck; no outcome is reported
    /// for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out while dealing.
    pub fn reset(&mut self) -> Result<(), GameError> {
        loop {
            self.piles = Self::create_deck(&mut self.rng);
            if !self.deal_hands()? {
                return Ok(());
            }
        }
    }

    /// Starts a new round from the current deck without reshuffling.
    ///
    /// This replays a prepared deck (the last card is dealt first). A natural
    /// dealt this way is discarded with a [`Game::reset`].
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out while dealing.
    pub fn deal(&mut self) -> Result<(), GameError> {
        if self.deal_hands()? {
            self.reset()?;
        }
        Ok(())
    }

    /// Deals both hands and reports whether the player got a natural.
    fn deal_hands(&mut self) -> Result<bool, GameError> {
        self.dealer_hand.clear();
        self.player_hand.clear();
        self.logger.log("Game Reset");

        for _ in 0..2 {
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
        }
        for _ in 0..2 {
            let card = self.draw()?;
            self.player_hand.add_card(card);
        }

        self.log_observation("Observation:", false);

        let natural = self.player_hand.is_natural();
        if natural {
            self.logger.log("Lucky Player Win! Next round!");
        }
        Ok(natural)
    }

    /// Draws a card from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyDeck`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.piles.pop().ok_or(GameError::EmptyDeck)
    }

    /// Runs a driver action.
    ///
    /// Returns the step result for `Hit` and `Stand`, and `None` otherwise.
    /// `Observe` logs the current observation; `Exit` does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has been dealt or the deck runs out.
    pub fn dispatch(&mut self, action: Action) -> Result<Option<StepResult>, GameError> {
        match action {
            Action::Hit => self.hit().map(Some),
            Action::Stand => self.stand().map(Some),
            Action::Reset => self.reset().map(|()| None),
            Action::Observe => {
                if let Some(observation) = self.observe(false) {
                    self.logger.log(format_args!("Observation: {observation}"));
                }
                Ok(None)
            }
            Action::Exit => Ok(None),
        }
    }

    /// Logs a message through the game's logger.
    pub fn log(&mut self, message: impl core::fmt::Display) {
        self.logger.log(message);
    }
}

impl<R> Game<R> {
    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.piles.len()
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &PlayerHand {
        &self.player_hand
    }

    /// Returns whether the player holds a deferred Ace.
    pub const fn player_has_ace(&self) -> bool {
        self.player_hand.has_ace()
    }

    /// Returns whether a round has been dealt.
    pub fn is_started(&self) -> bool {
        !self.dealer_hand.is_empty()
    }

    fn log_observation(&mut self, label: &str, end_mode: bool) {
        if let Some(observation) = self.view(end_mode) {
            self.logger.log(format_args!("{label} {observation}"));
        }
    }
}
