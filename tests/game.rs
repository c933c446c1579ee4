//! Game integration tests.

use std::collections::HashSet;

use simplejack::{
    ActionError, Card, DECK_SIZE, DealError, Game, GameState, Outcome, ShowdownError, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn clubs(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(Suit::Clubs, rank)).collect()
}

#[test]
fn deal_takes_first_three_cards() {
    let deck = clubs(&[2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    let game = Game::new(deck.clone()).unwrap();

    assert_eq!(game.player_hand().cards(), &deck[..2]);
    assert_eq!(game.dealer_hand().cards(), &deck[2..3]);
    assert_eq!(game.cards_remaining(), 7);
    assert_eq!(game.deck().front(), Some(&card(Suit::Clubs, 5)));
    assert!(game.deck().iter().eq(deck[3..].iter()));

    assert_eq!(game.player_score(), 5);
    assert_eq!(game.dealer_score(), 4);
    assert_eq!(game.to_string(), "player: 5; dealer: 4");
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.outcome(), None);
}

#[test]
fn deal_partitions_the_deck() {
    let deck: Vec<Card> = [
        card(Suit::Hearts, 1),
        card(Suit::Spades, 12),
        card(Suit::Diamonds, 7),
        card(Suit::Clubs, 4),
        card(Suit::Hearts, 9),
        card(Suit::Spades, 2),
        card(Suit::Diamonds, 13),
        card(Suit::Clubs, 10),
        card(Suit::Hearts, 6),
        card(Suit::Spades, 3),
    ]
    .to_vec();
    let game = Game::new(deck.clone()).unwrap();

    let player: HashSet<Card> = game.player_hand().cards().iter().copied().collect();
    let dealer: HashSet<Card> = game.dealer_hand().cards().iter().copied().collect();
    let rest: HashSet<Card> = game.deck().iter().copied().collect();

    assert!(player.is_disjoint(&dealer));
    assert!(player.is_disjoint(&rest));
    assert!(dealer.is_disjoint(&rest));
    assert_eq!(player.len() + dealer.len() + rest.len(), deck.len());
}

#[test]
fn deal_needs_three_cards() {
    assert_eq!(Game::new(clubs(&[2, 3])).unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(Game::new(Vec::<Card>::new()).unwrap_err(), DealError::NotEnoughCards);

    let game = Game::new(clubs(&[2, 3, 4])).unwrap();
    assert_eq!(game.cards_remaining(), 0);
}

#[test]
fn seeded_game_uses_a_full_deck() {
    let game = Game::with_seed(99);
    let mut seen: HashSet<Card> = game.deck().iter().copied().collect();
    seen.extend(game.player_hand().cards());
    seen.extend(game.dealer_hand().cards());

    assert_eq!(seen.len(), DECK_SIZE);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 1);
    assert_eq!(Game::with_seed(99).player_hand(), Game::with_seed(99).player_hand());
}

#[test]
fn draws_move_front_card_only() {
    let mut game = Game::new(clubs(&[2, 3, 4, 5, 6, 7])).unwrap();

    assert_eq!(game.draw_for_player().unwrap(), card(Suit::Clubs, 5));
    assert_eq!(game.player_hand().last(), Some(&card(Suit::Clubs, 5)));
    assert_eq!(game.player_hand().len(), 3);
    assert_eq!(game.dealer_hand().len(), 1);
    assert_eq!(game.cards_remaining(), 2);

    assert_eq!(game.draw_for_dealer().unwrap(), card(Suit::Clubs, 6));
    assert_eq!(game.dealer_hand().cards(), &clubs(&[4, 6])[..]);
    assert_eq!(game.player_hand().len(), 3);
    assert_eq!(game.cards_remaining(), 1);
    assert!(!game.player_stood());
}

#[test]
fn draw_from_empty_deck_fails() {
    let mut game = Game::new(clubs(&[2, 3, 4])).unwrap();
    assert_eq!(game.draw_for_player().unwrap_err(), ActionError::NoCards);
    assert_eq!(game.draw_for_dealer().unwrap_err(), ActionError::NoCards);
    assert_eq!(game.hit().unwrap_err(), ActionError::NoCards);
    assert_eq!(game.player_hand().len(), 2);
}

#[test]
fn bust_only_above_21() {
    // 10 + Ace = 21, dealer 2, next card King takes the player to 31.
    let mut game = Game::new(clubs(&[10, 1, 2, 13])).unwrap();
    assert_eq!(game.player_score(), 21);
    assert!(!game.player_bust());

    game.hit().unwrap();
    assert!(game.player_bust());
    assert!(!game.dealer_bust());
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut game = Game::new(clubs(&[10, 9, 2, 5, 10, 10])).unwrap();

    game.hit().unwrap();
    assert_eq!(game.player_score(), 24);
    assert_eq!(game.state(), GameState::Finished);

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);

    let drawn = game.dealer_play().unwrap();
    assert!(drawn.is_empty());
    assert_eq!(game.dealer_hand().len(), 1);
    assert_eq!(game.outcome(), Some(Outcome::PlayerBust));
}

#[test]
fn stand_hands_turn_to_dealer() {
    let mut game = Game::new(clubs(&[10, 8, 6, 5, 10])).unwrap();

    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);

    game.stand().unwrap();
    assert!(game.player_stood());
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.outcome(), None);

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, clubs(&[5, 10]));
    assert_eq!(game.dealer_score(), 21);
    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.outcome(), Some(Outcome::DealerWins));
}

#[test]
fn dealer_play_is_idempotent() {
    let mut game = Game::new(clubs(&[10, 8, 9, 9, 5, 5, 5])).unwrap();
    game.stand().unwrap();

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, clubs(&[9]));
    assert_eq!(game.dealer_score(), 18);

    let remaining = game.cards_remaining();
    assert!(game.dealer_play().unwrap().is_empty());
    assert!(game.dealer_play().unwrap().is_empty());
    assert_eq!(game.cards_remaining(), remaining);
    assert_eq!(game.dealer_hand().len(), 2);
}

#[test]
fn dealer_stands_on_17() {
    let mut game = Game::new(clubs(&[10, 10, 7, 10, 2])).unwrap();
    game.stand().unwrap();

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, clubs(&[10]));
    assert_eq!(game.dealer_score(), 17);
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.outcome(), Some(Outcome::PlayerWins));
}

#[test]
fn dealer_bust() {
    let mut game = Game::new(clubs(&[10, 7, 6, 10, 13])).unwrap();
    game.stand().unwrap();

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, clubs(&[10, 13]));
    assert_eq!(game.dealer_score(), 26);
    assert!(game.dealer_bust());
    assert_eq!(game.outcome(), Some(Outcome::DealerBust));
    assert!(Outcome::DealerBust.is_player_win());
}

#[test]
fn dealer_runs_out_of_cards() {
    let mut game = Game::new(clubs(&[10, 9, 2, 3])).unwrap();
    game.stand().unwrap();

    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::NoCards);
    assert_eq!(game.dealer_hand().cards(), &clubs(&[2, 3])[..]);
    assert_eq!(game.state(), GameState::DealerTurn);
}

#[test]
fn equal_scores_tie() {
    // Player 20 against dealer drawing 10 + Queen to 20.
    let mut game = Game::new(clubs(&[10, 13, 10, 12])).unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::Tie);
    assert_eq!(result.player_score, 20);
    assert_eq!(result.dealer_score, 20);
    assert_eq!(game.to_string(), "player: 20; dealer: 20");
}

#[test]
fn outcome_precedence() {
    assert_eq!(Outcome::from_scores(25, 26, true, true), Outcome::PlayerBust);
    assert_eq!(Outcome::from_scores(18, 26, false, true), Outcome::DealerBust);
    assert_eq!(Outcome::from_scores(18, 19, false, false), Outcome::DealerWins);
    assert_eq!(Outcome::from_scores(20, 19, false, false), Outcome::PlayerWins);
    assert_eq!(Outcome::from_scores(19, 19, false, false), Outcome::Tie);
    assert!(!Outcome::Tie.is_player_win());
}
