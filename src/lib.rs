//! A simplified single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that holds the player hand, the dealer
//! hand, and the remaining deck, and drives the round from the player turn
//! through the dealer turn to the outcome.
//!
//! Scoring is simplified: aces are always worth 11 and face cards 10, so a
//! hand holding two aces is already bust.
//!
//! # Example
//!
//! ```
//! use simplejack::{Card, Game, GameState, Outcome, Suit};
//!
//! let deck = [10, 9, 7, 13].map(|rank| Card::new(Suit::Spades, rank));
//! let mut game = Game::new(deck).unwrap();
//!
//! game.stand().unwrap();
//! let drawn = game.dealer_play().unwrap();
//!
//! assert_eq!(drawn, [Card::new(Suit::Spades, 13)]);
//! assert_eq!(game.state(), GameState::Finished);
//! assert_eq!(game.showdown().unwrap().outcome, Outcome::PlayerWins);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod prompt;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, full_deck, shuffled_deck};
pub use error::{ActionError, CardError, DealError, ShowdownError};
pub use game::{DEALER_STAND, Game, GameState};
pub use hand::{BUST_LIMIT, Hand};
pub use result::{Outcome, RoundResult};
