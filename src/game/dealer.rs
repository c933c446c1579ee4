use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

/// The dealer draws while under this score.
pub const DEALER_STAND: u16 = 17;

impl Game {
    /// Returns whether the dealer policy calls for another card.
    pub(super) fn dealer_must_draw(&self) -> bool {
        self.dealer_score() < DEALER_STAND && !self.dealer_bust()
    }

    /// Dealer plays their hand according to the fixed policy.
    ///
    /// The dealer draws while their score is under 17 and they are not bust.
    /// Calling this again once the dealer has stopped draws nothing. If the
    /// player is bust the dealer does not play.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has not finished their turn or the deck
    /// is empty while the dealer must draw. Cards drawn before the deck ran
    /// out stay in [`Game::dealer_hand`].
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state() == GameState::PlayerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        if self.player_bust() {
            log::trace!("player bust, dealer does not play");
            return Ok(drawn_cards);
        }

        while self.dealer_must_draw() {
            log::trace!("dealer hits on {}", self.dealer_score());
            drawn_cards.push(self.draw_for_dealer()?);
        }

        log::trace!(
            "dealer stops on {} after {} card(s)",
            self.dealer_score(),
            drawn_cards.len()
        );

        Ok(drawn_cards)
    }

    /// Returns the outcome once the game is finished.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.state().is_finished().then(|| {
            Outcome::from_scores(
                self.player_score(),
                self.dealer_score(),
                self.player_bust(),
                self.dealer_bust(),
            )
        })
    }

    /// Reads the final result.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not finished.
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        let outcome = self.outcome().ok_or(ShowdownError::InvalidState)?;
        log::info!("game over: {outcome} ({self})");

        Ok(RoundResult {
            outcome,
            player_score: self.player_score(),
            dealer_score: self.dealer_score(),
        })
    }
}
