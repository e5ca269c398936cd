//! Core game types: players, cards, deck, turn, RNG, configuration, state.
//!
//! These are the data the commands operate on. None of them know about
//! commands or batches.

pub mod card;
pub mod config;
pub mod deck;
pub mod player;
pub mod rng;
pub mod state;
pub mod turn;

pub use card::{Card, CardColor, CardId, CardValue};
pub use config::{GameConfig, GameModes};
pub use deck::{Deck, STANDARD_DECK_SIZE};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, GameStatus};
pub use turn::{Direction, Turn};
