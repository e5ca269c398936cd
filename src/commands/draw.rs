//! Drawing from the deck.

use tracing::debug;

use super::{CommandError, GameCommand};
use crate::core::{GameState, GameStatus};

/// The current player draws the top card.
///
/// Replenishes from the discard pile when the draw pile is empty; fails
/// only when both are exhausted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TakeDeckCard;

impl GameCommand for TakeDeckCard {
    fn name(&self) -> &'static str {
        "take_deck_card"
    }

    fn execute(&self, state: &mut GameState) -> Result<(), CommandError> {
        if state.status != GameStatus::Playing {
            return Err(CommandError::GameNotStarted);
        }
        let index = state.current_player_index().ok_or(CommandError::GameNotStarted)?;
        if state.drawable_cards() == 0 {
            return Err(CommandError::EmptyDeck);
        }

        state.deal_to(index, 1);
        debug!(player = %state.players()[index].id, "Took deck card");
        Ok(())
    }
}

/// Draw a card and hand it to a uniformly chosen player other than the
/// current one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TakeCardRandomPlayer;

impl GameCommand for TakeCardRandomPlayer {
    fn name(&self) -> &'static str {
        "take_card_random_player"
    }

    fn execute(&self, state: &mut GameState) -> Result<(), CommandError> {
        if state.status != GameStatus::Playing {
            return Err(CommandError::GameNotStarted);
        }
        let actor = state.current_player_index().ok_or(CommandError::GameNotStarted)?;

        let candidates: Vec<usize> = (0..state.player_count()).filter(|&i| i != actor).collect();
        if candidates.is_empty() {
            return Err(CommandError::NoEligibleTarget);
        }
        if state.drawable_cards() == 0 {
            return Err(CommandError::EmptyDeck);
        }

        let recipient = *state
            .rng
            .choose(&candidates)
            .ok_or(CommandError::NoEligibleTarget)?;
        state.deal_to(recipient, 1);

        debug!(recipient = %state.players()[recipient].id, "Gave deck card to random player");
        Ok(())
    }
}
