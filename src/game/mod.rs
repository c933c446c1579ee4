//! Game engine and state management.

use core::fmt;

use alloc::collections::VecDeque;

use crate::card::{Card, shuffled_deck};
use crate::error::DealError;
use crate::hand::Hand;

mod actions;
mod dealer;
pub mod state;

pub use dealer::DEALER_STAND;
pub use state::GameState;

/// Cards moved out of the deck by the initial deal.
pub const INITIAL_DEAL: usize = 3;

/// A single-player blackjack game.
///
/// The game owns the player hand, the dealer hand, and the remaining deck.
/// Every card in the three sequences comes from the deck handed to
/// [`Game::new`], and no card is held twice.
///
/// ```
/// use simplejack::{Card, Game, GameState, Suit};
///
/// let deck = (2..=11).map(|rank| Card::new(Suit::Clubs, rank));
/// let game = Game::new(deck).unwrap();
///
/// assert_eq!(game.player_score(), 5);
/// assert_eq!(game.dealer_score(), 4);
/// assert_eq!(game.state(), GameState::PlayerTurn);
/// assert_eq!(game.to_string(), "player: 5; dealer: 4");
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// The player's hand.
    player_hand: Hand,
    /// The dealer's hand.
    dealer_hand: Hand,
    /// Remaining cards, drawn from the front.
    deck: VecDeque<Card>,
    /// Whether the player has stood.
    player_stood: bool,
}

impl Game {
    /// Deals a new game from `deck`.
    ///
    /// The first two cards go to the player and the third to the dealer. The
    /// rest stay in the deck in their original order. The deck is used as
    /// given, so callers may stack it.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than three cards.
    pub fn new(deck: impl IntoIterator<Item = Card>) -> Result<Self, DealError> {
        let deck: VecDeque<Card> = deck.into_iter().collect();
        if deck.len() < INITIAL_DEAL {
            return Err(DealError::NotEnoughCards);
        }
        Ok(Self::deal(deck))
    }

    /// Deals a new game from a full deck shuffled with the given seed.
    ///
    /// ```
    /// use simplejack::{DECK_SIZE, Game};
    ///
    /// let game = Game::with_seed(42);
    /// assert_eq!(game.cards_remaining(), DECK_SIZE - 3);
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::deal(shuffled_deck(seed).into())
    }

    /// Moves the initial deal out of a deck holding at least three cards.
    fn deal(mut deck: VecDeque<Card>) -> Self {
        let player_hand: Hand = deck.drain(..2).collect();
        let dealer_hand: Hand = deck.drain(..1).collect();

        log::debug!(
            "dealt player {:?}, dealer {:?}, {} cards left",
            player_hand.cards(),
            dealer_hand.cards(),
            deck.len()
        );

        Self {
            player_hand,
            dealer_hand,
            deck,
            player_stood: false,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the remaining deck. The front card is drawn next.
    #[must_use]
    pub const fn deck(&self) -> &VecDeque<Card> {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the player's score.
    #[must_use]
    pub fn player_score(&self) -> u16 {
        self.player_hand.score()
    }

    /// Returns the dealer's score.
    #[must_use]
    pub fn dealer_score(&self) -> u16 {
        self.dealer_hand.score()
    }

    /// Returns whether the player is bust.
    #[must_use]
    pub fn player_bust(&self) -> bool {
        self.player_hand.is_bust()
    }

    /// Returns whether the dealer is bust.
    #[must_use]
    pub fn dealer_bust(&self) -> bool {
        self.dealer_hand.is_bust()
    }

    /// Returns whether the player has stood.
    #[must_use]
    pub const fn player_stood(&self) -> bool {
        self.player_stood
    }

    /// Returns the current game state.
    ///
    /// The state is derived from the hands: a bust player ends the game at
    /// once, a standing player hands over to the dealer, and the game is
    /// finished when the dealer policy stops drawing.
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.player_bust() {
            GameState::Finished
        } else if !self.player_stood {
            GameState::PlayerTurn
        } else if self.dealer_must_draw() {
            GameState::DealerTurn
        } else {
            GameState::Finished
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "player: {}; dealer: {}",
            self.player_score(),
            self.dealer_score()
        )
    }
}
