//! Commands: atomic, parameterized units of state mutation.
//!
//! Every command implements [`GameCommand`]: one `execute` operation that
//! applies the command to a borrowed [`GameState`] and reports success or a
//! [`CommandError`]. Commands hold only their own parameters, never the
//! state, and a failing command leaves the state as it found it.
//!
//! [`Command`] is the closed set of game commands as a tagged enum. The
//! invoker is generic over `GameCommand`, so tests and embedders can drive
//! their own command types through the same pipeline.
//!
//! ```
//! use uno_engine::commands::{AddPlayers, GameCommand};
//! use uno_engine::core::{GameConfig, GameState, Player};
//!
//! let mut state = GameState::new(GameConfig::default());
//! let add = AddPlayers::new(vec![Player::new("p1", "Ana", "fox")]);
//!
//! add.execute(&mut state).unwrap();
//! assert_eq!(state.player_count(), 1);
//! ```

mod draw;
mod error;
mod play;
mod roster;
mod setup;
mod turn;

pub use draw::{TakeCardRandomPlayer, TakeDeckCard};
pub use error::CommandError;
pub use play::{PlayCard, YellUno};
pub use roster::{AddPlayers, RemovePlayer, SwitchHands};
pub use setup::{BuildDeck, StartGame};
pub use turn::FinalizeTurn;

use crate::core::GameState;

/// The command contract.
pub trait GameCommand {
    /// Stable command name, used in logs and batch errors.
    fn name(&self) -> &'static str;

    /// Apply this command to `state`.
    ///
    /// On `Err` the state must be unchanged.
    fn execute(&self, state: &mut GameState) -> Result<(), CommandError>;
}

/// Every game command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    BuildDeck(BuildDeck),
    StartGame(StartGame),
    AddPlayers(AddPlayers),
    RemovePlayer(RemovePlayer),
    PlayCard(PlayCard),
    TakeDeckCard(TakeDeckCard),
    FinalizeTurn(FinalizeTurn),
    YellUno(YellUno),
    SwitchHands(SwitchHands),
    TakeCardRandomPlayer(TakeCardRandomPlayer),
}

macro_rules! impl_from_command {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Command {
                fn from(command: $variant) -> Self {
                    Command::$variant(command)
                }
            }
        )*
    };
}

impl_from_command!(
    BuildDeck,
    StartGame,
    AddPlayers,
    RemovePlayer,
    PlayCard,
    TakeDeckCard,
    FinalizeTurn,
    YellUno,
    SwitchHands,
    TakeCardRandomPlayer,
);

impl Command {
    fn inner(&self) -> &dyn GameCommand {
        match self {
            Command::BuildDeck(c) => c,
            Command::StartGame(c) => c,
            Command::AddPlayers(c) => c,
            Command::RemovePlayer(c) => c,
            Command::PlayCard(c) => c,
            Command::TakeDeckCard(c) => c,
            Command::FinalizeTurn(c) => c,
            Command::YellUno(c) => c,
            Command::SwitchHands(c) => c,
            Command::TakeCardRandomPlayer(c) => c,
        }
    }
}

impl GameCommand for Command {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn execute(&self, state: &mut GameState) -> Result<(), CommandError> {
        self.inner().execute(state)
    }
}
