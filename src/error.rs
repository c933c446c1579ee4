//! Error types for card and game operations.

use thiserror::Error;

/// Errors that can occur when building a card from selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit selector outside `0..=3`.
    #[error("invalid suit selector {0}")]
    InvalidSuit(u8),
    /// Rank outside `1..=13`.
    #[error("invalid rank {0}")]
    InvalidRank(u8),
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck holds fewer than the three cards needed for the deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during draws and player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during the dealer turn and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<ActionError> for ShowdownError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::InvalidState => Self::InvalidState,
            ActionError::NoCards => Self::NoCards,
        }
    }
}
