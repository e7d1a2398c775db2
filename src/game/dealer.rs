use rand::Rng;

use crate::error::GameError;
use crate::result::{Outcome, StepResult};

use super::Game;

/// The dealer stops drawing at this total.
pub const DEALER_STANDS_ON: u16 = 17;

impl<R: Rng> Game<R> {
    /// Dealer draws until reaching [`DEALER_STANDS_ON`], counting Aces as 1.
    ///
    /// Returns the dealer's final total.
    fn dealer_play(&mut self) -> Result<u16, GameError> {
        let mut value = self.dealer_hand.value();
        while value < DEALER_STANDS_ON {
            self.log_observation("Observation:", true);
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
            value = self.dealer_hand.value();
        }
        Ok(value)
    }

    /// Lets the dealer play and settles the round.
    ///
    /// With `player_has_21` the player total is 21 without recounting.
    pub(super) fn resolve_stand(&mut self, player_has_21: bool) -> Result<StepResult, GameError> {
        self.logger.log("Player stands. Dealer start action.");

        let dealer_count = self.dealer_play()?;
        self.log_observation("Final Observation:", true);

        let player_count = if player_has_21 {
            21
        } else {
            self.player_hand.value()
        };
        self.logger.log(format_args!(
            "Final Count: {{dealer: {dealer_count}, player: {player_count}}}"
        ));

        // Only reachable by standing on a bust hand when auto-reset is off.
        if player_count > 21 {
            self.logger
                .log("DEBUG - 'player_count > 21' should be handled in hit()");
            self.logger.log(format_args!("RESULT: {}", Outcome::DealerWin));
            return Ok(StepResult::Finished(Outcome::DealerWin));
        }

        let outcome = Outcome::from_totals(dealer_count, player_count);
        if dealer_count > 21 {
            // A dealer bust is announced here and again by end_round.
            self.logger.log(format_args!("RESULT: {outcome}"));
        }
        self.end_round(outcome)
    }

    /// Logs the outcome and starts a new round if auto-reset is on.
    pub(super) fn end_round(&mut self, outcome: Outcome) -> Result<StepResult, GameError> {
        self.logger.log(format_args!("RESULT: {outcome}"));

        if self.options.auto_reset {
            self.reset()?;
        }

        Ok(StepResult::Finished(outcome))
    }
}
