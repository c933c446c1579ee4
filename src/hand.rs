//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest score that is not a bust.
pub const BUST_LIMIT: u16 = 21;

/// Scores a sequence of cards.
///
/// Aces always count as 11 and face cards as 10, so two aces score 22.
///
/// ```
/// use simplejack::{Card, Suit, hand::score};
///
/// let cards = [Card::new(Suit::Hearts, 2), Card::new(Suit::Spades, 1)];
/// assert_eq!(score(&cards), 13);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u16 {
    cards.iter().map(Card::points).sum()
}

/// An ordered hand of cards. Cards are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in the order they were received.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the most recently received card.
    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Calculates the score of the hand.
    #[must_use]
    pub fn score(&self) -> u16 {
        score(&self.cards)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BUST_LIMIT
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
