//! Player and dealer hand representations.

use crate::card::Card;
use crate::error::CountError;

/// Returns the base value of a card (Ace counts 1, face cards 10).
#[must_use]
pub const fn card_value(card: Card) -> u16 {
    card.value()
}

/// Sums the base values of the cards, counting every Ace as 1.
#[must_use]
pub fn count_hand(cards: &[Card]) -> u16 {
    cards.iter().map(|&card| card_value(card)).sum()
}

/// Counts a hand given as rank labels, as exposed by observations.
///
/// # Errors
///
/// Returns [`CountError::InvalidCountInput`] if any label is not a rank, or
/// [`CountError::Overflow`] if the total exceeds `u16::MAX`.
pub fn count_labels<S: AsRef<str>>(labels: &[S]) -> Result<u16, CountError> {
    labels.iter().try_fold(0u16, |total, label| -> Result<u16, CountError> {
        let card: Card = label
            .as_ref()
            .parse()
            .map_err(|_| CountError::InvalidCountInput(label.as_ref().to_owned()))?;
        total
            .checked_add(card_value(card))
            .ok_or(CountError::Overflow)
    })
}

/// The player's hand.
///
/// The first Ace the player receives is held aside so that its value (1 or
/// 11) can be chosen when the hand is scored. Any later Ace is stored with
/// the other cards and counts 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerHand {
    /// Cards in the hand, excluding the deferred Ace.
    cards: Vec<Card>,
    /// Whether a deferred Ace is held.
    has_ace: bool,
}

impl PlayerHand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            has_ace: false,
        }
    }

    /// Adds a card, deferring the first Ace.
    pub fn add_card(&mut self, card: Card) {
        if card.is_ace() && !self.has_ace {
            self.has_ace = true;
        } else {
            self.cards.push(card);
        }
    }

    /// Returns the cards excluding the deferred Ace.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether a deferred Ace is held.
    #[must_use]
    pub const fn has_ace(&self) -> bool {
        self.has_ace
    }

    /// Sum of the cards excluding the deferred Ace.
    #[must_use]
    pub fn count_excluding_ace(&self) -> u16 {
        count_hand(&self.cards)
    }

    /// Total with the deferred Ace counted as 1.
    #[must_use]
    pub fn hard_total(&self) -> u16 {
        self.count_excluding_ace() + u16::from(self.has_ace)
    }

    /// Total with the deferred Ace counted as 11.
    #[must_use]
    pub fn soft_total(&self) -> u16 {
        self.count_excluding_ace() + if self.has_ace { 11 } else { 0 }
    }

    /// Best total: the deferred Ace is 11 when that does not exceed 21.
    #[must_use]
    pub fn value(&self) -> u16 {
        let count = self.count_excluding_ace();
        match (self.has_ace, count <= 10) {
            (false, _) => count,
            (true, true) => count + 11,
            (true, false) => count + 1,
        }
    }

    /// Returns whether the hard total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hard_total() > 21
    }

    /// Returns whether the hand reaches exactly 21 either way.
    #[must_use]
    pub fn has_21(&self) -> bool {
        self.hard_total() == 21 || self.soft_total() == 21
    }

    /// Returns whether the hand is a natural: the deferred Ace plus exactly
    /// ten points in the other cards.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.has_ace && self.count_excluding_ace() == 10
    }

    /// Returns the cards for display, with the deferred Ace in front.
    #[must_use]
    pub fn display_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.cards.len() + 1);
        if self.has_ace {
            cards.push(Card::Ace);
        }
        cards.extend_from_slice(&self.cards);
        cards
    }

    /// Returns the number of cards, including the deferred Ace.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len() + usize::from(self.has_ace)
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.has_ace = false;
    }
}

/// The dealer's hand.
///
/// The dealer plays a fixed policy and always counts Aces as 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        count_hand(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
