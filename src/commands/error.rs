//! Command failure reasons.

use thiserror::Error;

use crate::core::{CardId, PlayerId};

/// Why a command refused to run.
///
/// A command that returns one of these has left the game state unchanged.
/// `code()` gives a stable identifier callers can branch on; `Display`
/// gives a human-readable reason.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    // === Preconditions ===
    #[error("need at least {min} players to start, have {have}")]
    NotEnoughPlayers { min: usize, have: usize },

    #[error("adding {adding} players to {have} would exceed the maximum of {max}")]
    TooManyPlayers { max: usize, have: usize, adding: usize },

    #[error("player {0} is already seated")]
    DuplicatePlayer(PlayerId),

    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("no game in progress")]
    GameNotStarted,

    #[error("player {0} cannot target themselves")]
    InvalidTarget(PlayerId),

    #[error("starting hand size must be at least 1, got {0}")]
    InvalidHandSize(usize),

    // === Rule violations ===
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("{card} is not in {player}'s hand")]
    CardNotInHand { player: PlayerId, card: CardId },

    #[error("{0} cannot be played on the current discard")]
    IllegalCard(CardId),

    #[error("wild {0} was played without choosing a color")]
    MissingColor(CardId),

    #[error("{player} cannot yell uno holding {hand_size} cards")]
    CannotYell { player: PlayerId, hand_size: usize },

    #[error("{0} has already yelled uno")]
    AlreadyYelled(PlayerId),

    #[error("no other player can receive the card")]
    NoEligibleTarget,

    #[error("no player to pass the turn to")]
    NoNextPlayer,

    // === Resources ===
    #[error("draw pile and discard pile are both exhausted")]
    EmptyDeck,
}

impl CommandError {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            CommandError::NotEnoughPlayers { .. } => "not_enough_players",
            CommandError::TooManyPlayers { .. } => "too_many_players",
            CommandError::DuplicatePlayer(_) => "duplicate_player",
            CommandError::PlayerNotFound(_) => "player_not_found",
            CommandError::GameNotStarted => "game_not_started",
            CommandError::InvalidTarget(_) => "invalid_target",
            CommandError::InvalidHandSize(_) => "invalid_hand_size",
            CommandError::NotYourTurn(_) => "not_your_turn",
            CommandError::CardNotInHand { .. } => "card_not_in_hand",
            CommandError::IllegalCard(_) => "illegal_card",
            CommandError::MissingColor(_) => "missing_color",
            CommandError::CannotYell { .. } => "cannot_yell",
            CommandError::AlreadyYelled(_) => "already_yelled",
            CommandError::NoEligibleTarget => "no_eligible_target",
            CommandError::NoNextPlayer => "no_next_player",
            CommandError::EmptyDeck => "empty_deck",
        }
    }
}
