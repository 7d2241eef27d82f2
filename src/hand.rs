use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::str::FromStr;

/// Hole cards each player receives per round.
pub const HOLE_CARDS: usize = 2;
/// Community cards on a complete board (flop, turn, river).
pub const BOARD_CARDS: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A seat at the table: a name and the cards dealt to it this round.
///
/// ```
/// use poker_showdown::cards::{Card, Rank, Suit};
/// use poker_showdown::hand::Player;
///
/// let mut p = Player::new("Alice");
/// p.add_card(Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(p.cards().len(), 1);
/// p.clear_hand();
/// assert!(p.cards().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    cards: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), cards: Vec::with_capacity(HOLE_CARDS) }
    }

    /// A player already holding `cards`; handy for fixed scenarios.
    pub fn with_cards(name: impl Into<String>, cards: &[Card]) -> Self {
        Self { name: name.into(), cards: cards.to_vec() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear_hand(&mut self) {
        self.cards.clear();
    }
}

/// Community cards on the board (flop, turn, river).
///
/// ```
/// use poker_showdown::hand::Board;
///
/// let board: Board = "2c 3c 4c".parse().unwrap();
/// assert_eq!(board.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(BOARD_CARDS) }
    }

    /// Build a board, rejecting more than five cards or repeated cards.
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > BOARD_CARDS {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateBoardCards);
        }
        Ok(Self { cards })
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear_cards(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Everything a player can build a hand from: their own cards, then the board.
pub fn candidates(player: &Player, board: &Board) -> Vec<Card> {
    player.cards().iter().chain(board.as_slice()).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn board_add_and_clear() {
        let mut b = Board::new();
        assert!(b.is_empty());
        b.add_card(Card::new(Rank::Ace, Suit::Spades));
        b.add_card(Card::new(Rank::Two, Suit::Clubs));
        assert_eq!(b.len(), 2);
        b.clear_cards();
        assert!(b.is_empty());
    }

    #[test]
    fn board_try_new_checks_limits_and_dupes() {
        let six = parse_cards("2c 3c 4c 5c 6c 7c").unwrap();
        assert_eq!(Board::try_new(six), Err(HandError::TooManyBoardCards(6)));

        let dupes = parse_cards("2c 2c").unwrap();
        assert_eq!(Board::try_new(dupes), Err(HandError::DuplicateBoardCards));

        assert!(matches!("2c zz".parse::<Board>(), Err(HandError::CardParse(_))));
    }

    #[test]
    fn candidates_put_player_cards_first() {
        let p = Player::with_cards("P1", &parse_cards("As Kd").unwrap());
        let board: Board = "2c 3c 4c 5h 9s".parse().unwrap();
        let all = candidates(&p, &board);
        assert_eq!(all.len(), 7);
        assert_eq!(all[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(all[6], Card::new(Rank::Nine, Suit::Spades));
    }

    #[test]
    fn player_keeps_deal_order() {
        let mut p = Player::new("Bob");
        p.add_card(Card::new(Rank::Two, Suit::Hearts));
        p.add_card(Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(p.name(), "Bob");
        assert_eq!(p.cards()[0].rank(), Rank::Two);
        assert_eq!(p.cards()[1].rank(), Rank::Ace);
    }
}
