pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight;
pub(crate) mod suit_groups;

use crate::cards::{Card, Rank};
use crate::hand::{candidates, Board, Player};
use core::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Fewest cards a hand can be built from.
pub const MIN_CANDIDATES: usize = 5;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The best five cards found in a pool, tagged with their category.
///
/// Cards are stored by decreasing significance: the matched group(s) first,
/// then kickers high to low. Straights run from the top card down, so the
/// wheel is stored as 5-4-3-2-A. Ordering and equality go through
/// [`crate::comparator::compare`], so two hands are equal when they are
/// equally strong, whatever their suits.
#[derive(Debug, Clone, Copy)]
pub struct EvaluatedHand {
    category: Category,
    cards: [Card; 5],
}

impl EvaluatedHand {
    pub(crate) const fn new(category: Category, cards: [Card; 5]) -> Self {
        Self { category, cards }
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    pub const fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// Ranks of [`EvaluatedHand::cards`], in the same order.
    pub fn ranks(&self) -> [Rank; 5] {
        self.cards.map(Card::rank)
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.category)?;
        for c in &self.cards {
            write!(f, " {c}")?;
        }
        Ok(())
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        crate::comparator::compare(self, other)
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EvaluatedHand {}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("need at least 5 cards to evaluate, got {0}")]
    InsufficientCards(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Find the best five-card hand in `cards`.
///
/// Detectors run strongest first and the first one that matches wins; a pool
/// no detector claims is a High Card of its five highest cards.
///
/// ```
/// use poker_showdown::cards::{parse_cards, Rank};
/// use poker_showdown::evaluator::{evaluate, Category};
///
/// // Ace plays low: the wheel.
/// let cards = parse_cards("Ad 2h 3s 4c 5d Kh 9c").unwrap();
/// let hand = evaluate(&cards).unwrap();
/// assert_eq!(hand.category(), Category::Straight);
/// assert_eq!(hand.ranks()[0], Rank::Five);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards).ok_or(EvalError::InsufficientCards(cards.len()))?;
    let mut seen = HashSet::with_capacity(cards.len());
    if let Some(&dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(EvalError::DuplicateCard(dup));
    }

    let hand = DETECTORS
        .iter()
        .find_map(|d| d.detect(&analysis).map(|five| EvaluatedHand::new(d.category(), five)))
        .unwrap_or_else(|| EvaluatedHand::new(Category::HighCard, analysis.high_card()));
    Ok(hand)
}

/// Evaluate a player's cards together with the board.
pub fn evaluate_holdem(player: &Player, board: &Board) -> Result<EvaluatedHand, EvalError> {
    evaluate(&candidates(player, board))
}
