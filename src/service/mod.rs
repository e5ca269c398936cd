//! Command composition: player-facing actions to command batches.
//!
//! Each action maps to a fixed, ordered recipe:
//!
//! | Action | Commands |
//! |---|---|
//! | start / reset game | `BuildDeck`, `StartGame(modes)` |
//! | add players | `AddPlayers(players)` |
//! | remove player | `RemovePlayer(player)` |
//! | play card | `PlayCard(player, card, to_player)`, `FinalizeTurn` |
//! | take card | `TakeDeckCard`, `FinalizeTurn` |
//! | take card to random player | `TakeCardRandomPlayer` |
//! | yell uno | `YellUno(yeller)` |
//! | switch hands | `SwitchHands(first, second)` |
//!
//! [`CommandService`] builds the recipe for an [`Intent`] and runs it through
//! a fresh [`CommandsInvoker`].

mod intent;

pub use intent::Intent;

use tracing::debug;

use crate::core::{Card, GameModes, GameState, Player, PlayerId};
use crate::invoker::{CommandsInvoker, FailurePolicy, InvokeError};

/// Entry point for invoking game actions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommandService {
    policy: FailurePolicy,
}

impl CommandService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `policy` for every batch this service runs.
    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Run the recipe for `intent` against `state`.
    pub fn dispatch(&self, state: &mut GameState, intent: Intent) -> Result<(), InvokeError> {
        let action = intent.name();
        debug!(action, "Dispatching action");
        CommandsInvoker::new(intent.into_commands())
            .with_policy(self.policy)
            .run(state)
    }

    pub fn start_game(&self, state: &mut GameState, modes: Option<GameModes>) -> Result<(), InvokeError> {
        self.dispatch(state, Intent::StartGame { modes })
    }

    pub fn reset_game(&self, state: &mut GameState, modes: Option<GameModes>) -> Result<(), InvokeError> {
        self.dispatch(state, Intent::ResetGame { modes })
    }

    pub fn add_players(&self, state: &mut GameState, players: Vec<Player>) -> Result<(), InvokeError> {
        self.dispatch(state, Intent::AddPlayers { players })
    }

    pub fn remove_player(&self, state: &mut GameState, player: PlayerId) -> Result<(), InvokeError> {
        self.dispatch(state, Intent::RemovePlayer { player })
    }

    pub fn play_card(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card: Card,
        to_player: Option<PlayerId>,
    ) -> Result<(), InvokeError> {
        self.dispatch(state, Intent::PlayCard { player, card, to_player })
    }

    pub fn take_card(&self, state: &mut GameState) -> Result<(), InvokeError> {
        self.dispatch(state, Intent::TakeCard)
    }

    pub fn take_card_to_random_player(&self, state: &mut GameState) -> Result<(), InvokeError> {
        self.dispatch(state, Intent::TakeCardToRandomPlayer)
    }

    pub fn yell_uno(&self, state: &mut GameState, yeller: Option<PlayerId>) -> Result<(), InvokeError> {
        self.dispatch(state, Intent::YellUno { yeller })
    }

    pub fn switch_hands(
        &self,
        state: &mut GameState,
        first: PlayerId,
        second: PlayerId,
    ) -> Result<(), InvokeError> {
        self.dispatch(state, Intent::SwitchHands { first, second })
    }
}
