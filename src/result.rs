//! Round result types for showdown.

use core::fmt;

/// Terminal outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21. The dealer never plays.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Dealer has the higher score.
    DealerWins,
    /// Player has the higher score.
    PlayerWins,
    /// Both scores are equal.
    Tie,
}

impl Outcome {
    /// Decides the outcome from both final scores.
    ///
    /// A player bust takes precedence over everything else.
    #[must_use]
    pub const fn from_scores(
        player: u16,
        dealer: u16,
        player_bust: bool,
        dealer_bust: bool,
    ) -> Self {
        if player_bust {
            Self::PlayerBust
        } else if dealer_bust {
            Self::DealerBust
        } else if dealer > player {
            Self::DealerWins
        } else if player > dealer {
            Self::PlayerWins
        } else {
            Self::Tie
        }
    }

    /// Returns whether the player won.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerBust => "player bust",
            Self::DealerBust => "dealer bust",
            Self::DealerWins => "dealer wins",
            Self::PlayerWins => "player wins",
            Self::Tie => "tie",
        })
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the game ended.
    pub outcome: Outcome,
    /// The player's final score.
    pub player_score: u16,
    /// The dealer's final score.
    pub dealer_score: u16,
}
