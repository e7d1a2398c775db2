use rand::Rng;

use crate::error::GameError;
use crate::result::{Outcome, StepResult};

use super::Game;

impl<R: Rng> Game<R> {
    /// Player action: Hit (draw a card).
    ///
    /// The first Ace the player draws is deferred. A hand over 21 (deferred
    /// Ace counted as 1) loses immediately. A hand that reaches exactly 21,
    /// with the deferred Ace as either 1 or 11, stands automatically with
    /// its total fixed at 21.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has been dealt or the deck runs out.
    pub fn hit(&mut self) -> Result<StepResult, GameError> {
        if !self.is_started() {
            return Err(GameError::NotStarted);
        }
        self.logger.log("Player hits");

        let card = self.draw()?;
        self.player_hand.add_card(card);
        self.log_observation("Observation:", false);

        if self.player_hand.is_bust() {
            return self.end_round(Outcome::DealerWin);
        }

        if self.player_hand.has_21() {
            return self.resolve_stand(true);
        }

        Ok(StepResult::Continue)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer then draws until reaching 17 and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has been dealt or the deck runs out while
    /// the dealer must draw.
    pub fn stand(&mut self) -> Result<StepResult, GameError> {
        if !self.is_started() {
            return Err(GameError::NotStarted);
        }
        self.resolve_stand(false)
    }
}
