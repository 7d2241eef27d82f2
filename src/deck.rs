use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("cannot deal from an empty deck")]
    EmptyDeck,
    #[error("asked for {wanted} cards but only {remaining} remain")]
    NotEnoughCards { wanted: usize, remaining: usize },
}

/// A standard 52-card deck that owns its random source.
///
/// Every call to [`Deck::shuffle`] advances the same ChaCha8 stream, so two
/// consecutive rounds never replay the same order, while a deck built with
/// [`Deck::seeded`] is fully reproducible.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Full deck, RNG seeded from the thread-local generator.
    ///
    /// ```
    /// use poker_showdown::deck::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// Full deck with a reproducible shuffle sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        let mut deck = Self { cards: Vec::with_capacity(DECK_SIZE), rng };
        deck.reset();
        deck
    }

    /// Put all 52 cards back in canonical order (suit-major, Two..Ace).
    pub fn reset(&mut self) {
        self.cards.clear();
        for s in Suit::ALL {
            for r in Rank::ALL {
                self.cards.push(Card::new(r, s));
            }
        }
    }

    /// Fisher–Yates shuffle of the remaining cards using the deck's own RNG.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Remove and return the top card.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::EmptyDeck)
    }

    /// Deal `n` cards from the top. Nothing is removed when fewer than `n` remain.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::NotEnoughCards { wanted: n, remaining: self.cards.len() });
        }
        (0..n).map(|_| self.deal()).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first; the last element is dealt next.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
