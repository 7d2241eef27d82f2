use crate::comparator::best_indices;
use crate::config::MIN_PLAYERS;
use crate::deck::{Deck, DeckError};
use crate::evaluator::{evaluate_holdem, EvalError, EvaluatedHand};
use crate::hand::{Board, Player, HOLE_CARDS};

/// Which cards are being dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealPhase {
    HoleCards,
    Board,
}

/// Round lifecycle: `Idle -> Dealing(HoleCards) -> Dealing(Board) -> Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundState {
    Idle,
    Dealing(DealPhase),
    Complete,
}

/// Board streets, in dealing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Street {
    Flop,
    Turn,
    River,
}

impl Street {
    pub const ALL: [Street; 3] = [Street::Flop, Street::Turn, Street::River];

    /// Cards dealt on this street.
    pub const fn cards(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("a round needs at least 2 players, got {0}")]
    NotEnoughPlayers(usize),
    #[error("dealing failed: {0}")]
    Deck(#[from] DeckError),
    #[error("hand evaluation failed: {0}")]
    Eval(#[from] EvalError),
}

/// Result of a completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown {
    hands: Vec<EvaluatedHand>,
    winners: Vec<usize>,
}

impl Showdown {
    /// Best hand of every player, in seat order.
    pub fn hands(&self) -> &[EvaluatedHand] {
        &self.hands
    }

    /// Seats whose hands tie for the best, in seat order. Never empty.
    pub fn winners(&self) -> &[usize] {
        &self.winners
    }

    /// A single declared winner: the first seat among [`Showdown::winners`].
    ///
    /// With a true tie this picks by seat order instead of splitting; callers
    /// that care should check [`Showdown::is_tie`].
    pub fn winner(&self) -> usize {
        self.winners[0]
    }

    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Drives one deal-then-showdown sequence.
#[derive(Debug, Clone)]
pub struct Round {
    state: RoundState,
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

impl Round {
    pub fn new() -> Self {
        Self { state: RoundState::Idle }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Reset the table, deal hole cards and the board, then settle the showdown.
    ///
    /// Players and board are cleared and the deck is refilled and shuffled
    /// first. On error the state stays at the phase that failed.
    pub fn run(
        &mut self,
        players: &mut [Player],
        deck: &mut Deck,
        board: &mut Board,
    ) -> Result<Showdown, RoundError> {
        if players.len() < MIN_PLAYERS {
            return Err(RoundError::NotEnoughPlayers(players.len()));
        }
        self.state = RoundState::Idle;
        for p in players.iter_mut() {
            p.clear_hand();
        }
        board.clear_cards();
        deck.reset();
        deck.shuffle();

        self.enter(RoundState::Dealing(DealPhase::HoleCards));
        deal_hole_cards(players, deck)?;

        self.enter(RoundState::Dealing(DealPhase::Board));
        for street in Street::ALL {
            deal_street(street, deck, board)?;
        }

        let hands = players
            .iter()
            .map(|p| evaluate_holdem(p, board))
            .collect::<Result<Vec<_>, _>>()?;
        let winners = best_indices(&hands);
        self.enter(RoundState::Complete);

        let showdown = Showdown { hands, winners };
        let w = showdown.winner();
        log::info!(
            "{} wins with {}{}",
            players[w].name(),
            showdown.hands[w],
            if showdown.is_tie() { " (tied)" } else { "" }
        );
        Ok(showdown)
    }

    fn enter(&mut self, next: RoundState) {
        log::debug!("round state {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// One card per player per pass, two passes.
fn deal_hole_cards(players: &mut [Player], deck: &mut Deck) -> Result<(), DeckError> {
    for _ in 0..HOLE_CARDS {
        for p in players.iter_mut() {
            let card = deck.deal()?;
            log::debug!("{} receives {}", p.name(), card);
            p.add_card(card);
        }
    }
    Ok(())
}

fn deal_street(street: Street, deck: &mut Deck, board: &mut Board) -> Result<(), DeckError> {
    for _ in 0..street.cards() {
        let card = deck.deal()?;
        log::debug!("{}: {}", street.label(), card);
        board.add_card(card);
    }
    Ok(())
}

/// Run a single round with a fresh [`Round`].
pub fn run_round(
    players: &mut [Player],
    deck: &mut Deck,
    board: &mut Board,
) -> Result<Showdown, RoundError> {
    Round::new().run(players, deck, board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DECK_SIZE;
    use crate::hand::BOARD_CARDS;
    use std::collections::HashSet;

    fn seats(n: usize) -> Vec<Player> {
        (1..=n).map(|i| Player::new(format!("P{i}"))).collect()
    }

    #[test]
    fn heads_up_round_completes() {
        let mut players = seats(2);
        let mut deck = Deck::seeded(1);
        let mut board = Board::new();
        let mut round = Round::new();
        assert_eq!(round.state(), RoundState::Idle);

        let showdown = round.run(&mut players, &mut deck, &mut board).unwrap();
        assert_eq!(round.state(), RoundState::Complete);
        assert!(players.iter().all(|p| p.cards().len() == HOLE_CARDS));
        assert_eq!(board.len(), BOARD_CARDS);
        assert_eq!(deck.len(), DECK_SIZE - 4 - 5);
        assert_eq!(showdown.hands().len(), 2);
        assert!(!showdown.winners().is_empty());
    }

    #[test]
    fn hole_cards_are_dealt_round_robin() {
        let mut players = seats(3);
        let mut deck = Deck::seeded(2);
        deck.shuffle();
        // the deal order is the reverse of the remaining stack
        let mut expected: Vec<_> = deck.cards().to_vec();
        expected.reverse();

        deal_hole_cards(&mut players, &mut deck).unwrap();
        assert_eq!(players[0].cards(), &[expected[0], expected[3]]);
        assert_eq!(players[1].cards(), &[expected[1], expected[4]]);
        assert_eq!(players[2].cards(), &[expected[2], expected[5]]);
    }

    #[test]
    fn every_dealt_card_is_unique() {
        let mut players = seats(6);
        let mut deck = Deck::seeded(3);
        let mut board = Board::new();
        run_round(&mut players, &mut deck, &mut board).unwrap();

        let dealt: HashSet<_> =
            players.iter().flat_map(|p| p.cards()).chain(board.as_slice()).copied().collect();
        assert_eq!(dealt.len(), 6 * HOLE_CARDS + BOARD_CARDS);
        assert!(deck.cards().iter().all(|c| !dealt.contains(c)));
    }

    #[test]
    fn rounds_clear_previous_cards() {
        let mut players = seats(2);
        let mut deck = Deck::seeded(4);
        let mut board = Board::new();
        let mut round = Round::new();
        round.run(&mut players, &mut deck, &mut board).unwrap();
        round.run(&mut players, &mut deck, &mut board).unwrap();
        assert_eq!(players[0].cards().len(), HOLE_CARDS);
        assert_eq!(board.len(), BOARD_CARDS);
        assert_eq!(deck.len(), DECK_SIZE - 9);
    }

    #[test]
    fn one_player_is_rejected() {
        let mut players = seats(1);
        let err = run_round(&mut players, &mut Deck::seeded(5), &mut Board::new()).unwrap_err();
        assert_eq!(err, RoundError::NotEnoughPlayers(1));
    }

    #[test]
    fn running_out_of_cards_surfaces_empty_deck() {
        // 24 seats need 48 hole cards + 5 board cards > 52
        let mut players = seats(24);
        let mut deck = Deck::seeded(6);
        let mut board = Board::new();
        let mut round = Round::new();
        let err = round.run(&mut players, &mut deck, &mut board).unwrap_err();
        assert_eq!(err, RoundError::Deck(DeckError::EmptyDeck));
        assert_eq!(round.state(), RoundState::Dealing(DealPhase::Board));
        assert!(deck.is_empty());
    }

    #[test]
    fn showdown_reports_ties() {
        let showdown = Showdown {
            hands: Vec::new(),
            winners: vec![1, 2],
        };
        assert!(showdown.is_tie());
        assert_eq!(showdown.winner(), 1);
    }
}
