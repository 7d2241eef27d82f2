//! poker-showdown: deal Hold'em rounds and settle them at showdown
//!
//! Goals:
//! - Deterministic evaluation of the best five cards out of any pool of five or more
//! - Explicit, reproducible randomness (each deck owns its RNG)
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use poker_showdown::cards::parse_cards;
//! use poker_showdown::evaluator::{evaluate, Category};
//!
//! let cards = parse_cards("As Ah Kc Qd Jh 3s 2c").unwrap();
//! let hand = evaluate(&cards).unwrap();
//! assert_eq!(hand.category(), Category::Pair);
//! ```
//!
//! ## Quick start: play a round
//! ```
//! use poker_showdown::deck::Deck;
//! use poker_showdown::hand::{Board, Player};
//! use poker_showdown::round::run_round;
//!
//! let mut players = vec![Player::new("P1"), Player::new("P2")];
//! let mut deck = Deck::seeded(7);
//! let mut board = Board::new();
//!
//! let showdown = run_round(&mut players, &mut deck, &mut board).unwrap();
//! assert_eq!(showdown.hands().len(), 2);
//! assert_eq!(deck.len(), 43);
//! ```

pub mod cards;
pub mod comparator;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod round;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
