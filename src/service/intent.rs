//! Player-facing actions and their command recipes.

use serde::{Deserialize, Serialize};

use crate::commands::{
    AddPlayers, BuildDeck, FinalizeTurn, PlayCard, RemovePlayer, StartGame, SwitchHands,
    TakeCardRandomPlayer, TakeDeckCard, YellUno,
};
use crate::core::{Card, GameModes, Player, PlayerId};
use crate::invoker::CommandBatch;

/// A logical action with its typed parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    StartGame { modes: Option<GameModes> },
    ResetGame { modes: Option<GameModes> },
    AddPlayers { players: Vec<Player> },
    RemovePlayer { player: PlayerId },
    PlayCard { player: PlayerId, card: Card, to_player: Option<PlayerId> },
    TakeCard,
    TakeCardToRandomPlayer,
    YellUno { yeller: Option<PlayerId> },
    SwitchHands { first: PlayerId, second: PlayerId },
}

impl Intent {
    /// Stable action name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Intent::StartGame { .. } => "start_game",
            Intent::ResetGame { .. } => "reset_game",
            Intent::AddPlayers { .. } => "add_players",
            Intent::RemovePlayer { .. } => "remove_player",
            Intent::PlayCard { .. } => "play_card",
            Intent::TakeCard => "take_card",
            Intent::TakeCardToRandomPlayer => "take_card_to_random_player",
            Intent::YellUno { .. } => "yell_uno",
            Intent::SwitchHands { .. } => "switch_hands",
        }
    }

    /// The ordered command batch for this action.
    #[must_use]
    pub fn into_commands(self) -> CommandBatch {
        let mut batch = CommandBatch::new();
        match self {
            Intent::StartGame { modes } | Intent::ResetGame { modes } => {
                batch.push(BuildDeck.into());
                batch.push(StartGame::new(modes).into());
            }
            Intent::AddPlayers { players } => batch.push(AddPlayers::new(players).into()),
            Intent::RemovePlayer { player } => batch.push(RemovePlayer::new(player).into()),
            Intent::PlayCard { player, card, to_player } => {
                batch.push(PlayCard::new(player, card, to_player).into());
                batch.push(FinalizeTurn.into());
            }
            Intent::TakeCard => {
                batch.push(TakeDeckCard.into());
                batch.push(FinalizeTurn.into());
            }
            Intent::TakeCardToRandomPlayer => batch.push(TakeCardRandomPlayer.into()),
            Intent::YellUno { yeller } => batch.push(YellUno::new(yeller).into()),
            Intent::SwitchHands { first, second } => {
                batch.push(SwitchHands::new(first, second).into());
            }
        }
        batch
    }
}
