//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player to draw or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Game has ended and the outcome can be read.
    Finished,
}

impl GameState {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}
