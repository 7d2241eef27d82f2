use crate::deck::{Deck, DECK_SIZE};
use crate::hand::{Player, BOARD_CARDS, HOLE_CARDS};

/// Fewest players a round can be dealt to.
pub const MIN_PLAYERS: usize = 2;
/// Most players one deck can serve: every seat's hole cards plus the board.
pub const MAX_PLAYERS: usize = (DECK_SIZE - BOARD_CARDS) / HOLE_CARDS;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("player count must be between {min} and {max}, got {got}")]
    PlayerCount { min: usize, max: usize, got: usize },
    #[error("round count must be at least 1")]
    NoRounds,
}

/// Table settings for a session of rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub players: usize,
    pub rounds: usize,
    /// Fixed seed for a reproducible session; `None` draws one from the OS-backed thread RNG.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { players: MIN_PLAYERS, rounds: 1, seed: None }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(ConfigError::PlayerCount {
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
                got: self.players,
            });
        }
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        Ok(())
    }

    /// Seats named `P1..Pn`.
    pub fn seat_players(&self) -> Vec<Player> {
        (1..=self.players).map(|i| Player::new(format!("P{i}"))).collect()
    }

    pub fn deck(&self) -> Deck {
        match self.seed {
            Some(seed) => Deck::seeded(seed),
            None => Deck::new(),
        }
    }
}
