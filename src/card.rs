//! Card types and deck utilities.

use core::fmt;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::error::CardError;

/// Suit names indexed by [`Suit::index`].
const SUIT_NAMES: [&str; 4] = ["Clubs", "Diamonds", "Hearts", "Spades"];

/// Rank names indexed by rank. Index 0 is unused.
const RANK_NAMES: [&str; 14] = [
    "", "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King",
];

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in selector order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit for a selector in `0..=3`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Clubs),
            1 => Some(Self::Diamonds),
            2 => Some(Self::Hearts),
            3 => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the selector of this suit.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the display name of this suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        SUIT_NAMES[self as usize]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// ```
/// use simplejack::{Card, Suit};
///
/// let card = Card::new(Suit::Hearts, 12);
/// assert_eq!(card.to_string(), "Queen of Hearts");
/// assert_eq!(card.points(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but render with an empty rank name and score as their
    /// face value.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Creates a card from a suit selector (`0..=3`) and a rank (`1..=13`).
    ///
    /// # Errors
    ///
    /// Returns an error if either selector is out of range.
    pub fn from_indices(suit: u8, rank: u8) -> Result<Self, CardError> {
        let suit = Suit::from_index(suit).ok_or(CardError::InvalidSuit(suit))?;
        if !(1..=RANKS).contains(&rank) {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self::new(suit, rank))
    }

    /// Returns the point value of this card.
    ///
    /// Aces are always worth 11 and face cards 10. There is no soft ace.
    #[must_use]
    pub const fn points(&self) -> u16 {
        match self.rank {
            1 => 11,
            11.. => 10,
            rank => rank as u16,
        }
    }

    /// Returns the display name of the rank.
    #[must_use]
    pub fn rank_name(&self) -> &'static str {
        RANK_NAMES.get(self.rank as usize).copied().unwrap_or_default()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_name(), self.suit)
    }
}

/// Number of ranks per suit.
pub const RANKS: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns the 52 standard cards, suit-major with ranks ascending.
///
/// The deck is not shuffled.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in 1..=RANKS {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Returns a full deck shuffled with a generator seeded from `seed`.
///
/// The same seed always yields the same order.
#[must_use]
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cards = full_deck();
    cards.shuffle(&mut rng);
    cards
}
