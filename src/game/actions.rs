use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

impl Game {
    /// Removes the front card of the deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.pop_front()
    }

    /// Moves the front card of the deck to the end of the player's hand.
    ///
    /// This only moves the card. It does not check whose turn it is; use
    /// [`Game::hit`] for a turn-checked draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn draw_for_player(&mut self) -> Result<Card, ActionError> {
        let card = self.draw().ok_or(ActionError::NoCards)?;
        self.player_hand.add_card(card);
        log::debug!("player drew {card}, score {}", self.player_score());
        Ok(card)
    }

    /// Moves the front card of the deck to the end of the dealer's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn draw_for_dealer(&mut self) -> Result<Card, ActionError> {
        let card = self.draw().ok_or(ActionError::NoCards)?;
        self.dealer_hand.add_card(card);
        log::debug!("dealer drew {card}, score {}", self.dealer_score());
        Ok(card)
    }

    /// Player draws a card.
    ///
    /// Returns the drawn card. If it takes the player over 21 the game is
    /// finished and the dealer turn is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.state() != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.draw_for_player()?;
        if self.player_bust() {
            log::debug!("player bust with {}", self.player_score());
        }
        Ok(card)
    }

    /// Player stands, handing the turn to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.state() != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.player_stood = true;
        log::debug!("player stands on {}", self.player_score());
        Ok(())
    }
}
