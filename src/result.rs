//! Round outcomes.

use core::fmt;

/// Final result of a round, seen from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWin,
    /// Equal totals.
    Tie,
}

impl Outcome {
    /// Returns the signed reward: +1 player win, -1 dealer win, 0 tie.
    #[must_use]
    pub const fn reward(self) -> i8 {
        match self {
            Self::PlayerWin => 1,
            Self::DealerWin => -1,
            Self::Tie => 0,
        }
    }

    /// Picks the outcome from final totals.
    ///
    /// A dealer over 21 loses; otherwise the higher total wins.
    #[must_use]
    pub const fn from_totals(dealer: u16, player: u16) -> Self {
        if dealer > 21 || player > dealer {
            Self::PlayerWin
        } else if dealer > player {
            Self::DealerWin
        } else {
            Self::Tie
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerWin => "Player wins",
            Self::DealerWin => "Dealer wins",
            Self::Tie => "Tie",
        })
    }
}

/// Result of a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepResult {
    /// The round is still open.
    Continue,
    /// The round ended with the given outcome.
    Finished(Outcome),
}

impl StepResult {
    /// Returns the signed reward of the step. An open round yields 0.
    #[must_use]
    pub const fn reward(self) -> i8 {
        match self {
            Self::Continue => 0,
            Self::Finished(outcome) => outcome.reward(),
        }
    }

    /// Returns the outcome if the round ended.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Continue => None,
            Self::Finished(outcome) => Some(outcome),
        }
    }

    /// Returns whether the round ended.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}
