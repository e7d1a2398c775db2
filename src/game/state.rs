//! Observation types.

use core::fmt;

use crate::card::Card;

use super::Game;

/// What the player can see of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// Dealer cards: only the up card during play, the full hand at the end.
    pub dealer: Vec<Card>,
    /// Player cards, with the deferred Ace (if any) shown first.
    pub player: Vec<Card>,
}

impl Observation {
    /// Returns the dealer cards as rank labels.
    #[must_use]
    pub fn dealer_labels(&self) -> Vec<&'static str> {
        self.dealer.iter().map(|card| card.label()).collect()
    }

    /// Returns the player cards as rank labels.
    #[must_use]
    pub fn player_labels(&self) -> Vec<&'static str> {
        self.player.iter().map(|card| card.label()).collect()
    }
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    f.write_str("[")?;
    for (index, card) in cards.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{card}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{dealer: ")?;
        write_cards(f, &self.dealer)?;
        f.write_str(", player: ")?;
        write_cards(f, &self.player)?;
        f.write_str("}")
    }
}

/// Compact state features for a learning agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateObservation {
    /// The dealer's up card.
    pub dealer_up_card: Card,
    /// Player total excluding the deferred Ace.
    pub player_count: u16,
    /// Whether the player holds a deferred Ace.
    pub has_ace: bool,
}

impl StateObservation {
    /// Encodes the state as `[dealer up card value, player count, has ace]`.
    #[must_use]
    pub fn encode(self) -> [u16; 3] {
        [
            self.dealer_up_card.value(),
            self.player_count,
            u16::from(self.has_ace),
        ]
    }
}

impl<R> Game<R> {
    /// Returns the current observation without logging anything.
    ///
    /// Returns `None` before the first deal.
    pub fn view(&self, end_mode: bool) -> Option<Observation> {
        let up_card = self.dealer_hand.up_card()?;
        let dealer = if end_mode {
            self.dealer_hand.cards().to_vec()
        } else {
            vec![up_card]
        };

        Some(Observation {
            dealer,
            player: self.player_hand.display_cards(),
        })
    }

    /// Returns the current observation.
    ///
    /// During play only the dealer's up card is shown; with `end_mode` the
    /// full dealer hand is revealed. Before the first deal this logs
    /// `Game not started` and returns `None`.
    pub fn observe(&mut self, end_mode: bool) -> Option<Observation> {
        let observation = self.view(end_mode);
        if observation.is_none() {
            self.logger.log("Game not started");
        }
        observation
    }

    /// Returns the compact state features, or `None` before the first deal.
    pub fn observe_state(&self) -> Option<StateObservation> {
        Some(StateObservation {
            dealer_up_card: self.dealer_hand.up_card()?,
            player_count: self.player_hand.count_excluding_ace(),
            has_ace: self.player_hand.has_ace(),
        })
    }
}
