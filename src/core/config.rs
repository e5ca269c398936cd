//! Game configuration.
//!
//! - `GameConfig`: table-level rules fixed for the lifetime of a `GameState`
//!   (player bounds, hand sizes, penalties, RNG seed).
//! - `GameModes`: per-game options chosen when a game is started or reset.

use serde::{Deserialize, Serialize};

/// Table-level configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fewest players a game can start with.
    pub min_players: usize,

    /// Most players the roster may hold.
    pub max_players: usize,

    /// Cards dealt to each player at game start.
    pub starting_hand_size: usize,

    /// Hand size at which a player may yell uno.
    pub uno_hand_size: usize,

    /// Cards drawn by a player who let their uno window pass without yelling.
    pub missed_yell_penalty: usize,

    /// Seed for shuffling and random targeting.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 10,
            starting_hand_size: 7,
            uno_hand_size: 1,
            missed_yell_penalty: 2,
            seed: 42,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the player-count bounds.
    #[must_use]
    pub fn with_player_bounds(mut self, min: usize, max: usize) -> Self {
        assert!(min > 0, "Must allow at least 1 player");
        assert!(min <= max, "Minimum players must not exceed maximum");
        self.min_players = min;
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Starting hand must hold at least 1 card");
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_uno_hand_size(mut self, size: usize) -> Self {
        self.uno_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_missed_yell_penalty(mut self, cards: usize) -> Self {
        self.missed_yell_penalty = cards;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Options for a single game, passed to start/reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameModes {
    /// Pick the first player uniformly at random instead of roster order.
    pub random_first_player: bool,

    /// Overrides `GameConfig::starting_hand_size` for this game.
    pub starting_hand_size: Option<usize>,
}

impl GameModes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_random_first_player(mut self) -> Self {
        self.random_first_player = true;
        self
    }

    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = Some(size);
        self
    }

    /// Hand size to deal under these modes.
    #[must_use]
    pub fn hand_size(&self, config: &GameConfig) -> usize {
        self.starting_hand_size.unwrap_or(config.starting_hand_size)
    }
}
