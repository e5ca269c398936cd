//! # uno-engine
//!
//! The rules core of a shedding-type card game: players take turns
//! matching the top of a discard pile by color or value, draw when they
//! cannot, and race to empty their hand.
//!
//! ## Architecture
//!
//! Every rule that touches the game is a **command**: a small value holding
//! its parameters, executed against a borrowed [`GameState`]. A
//! player-facing action is a fixed, ordered **batch** of commands run by a
//! single-use [`CommandsInvoker`], which stops at the first failure.
//! [`CommandService`] holds the action-to-batch recipes.
//!
//! - **Persistent Data Structures**: hands, piles and the roster are
//!   `im-rs` collections, so snapshotting a state for rollback is O(1).
//! - **Deterministic**: all shuffling and random choices go through the
//!   seeded [`GameRng`].
//!
//! ## Modules
//!
//! - `core`: cards, deck, players, turn, configuration, RNG and state
//! - `commands`: the command contract and every game command
//! - `invoker`: batch sequencing, status and failure policy
//! - `service`: action recipes
//! - `session`: a state bundled with its service

pub mod commands;
pub mod core;
pub mod invoker;
pub mod service;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Card, CardColor, CardId, CardValue,
    Deck, Direction, GameConfig, GameModes,
    GameRng, GameRngState, GameState, GameStatus,
    Player, PlayerId, Turn,
};

pub use crate::commands::{Command, CommandError, GameCommand};

pub use crate::invoker::{CommandBatch, CommandsInvoker, FailurePolicy, InvokeError, InvokerStatus};

pub use crate::service::{CommandService, Intent};

pub use crate::session::GameSession;
