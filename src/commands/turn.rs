//! Turn advancement.

use tracing::debug;

use super::{CommandError, GameCommand};
use crate::core::{GameState, GameStatus};

/// Pass the turn to the next eligible seat.
///
/// Honors a pending skip and the play direction. Before passing, every
/// other player sitting on `uno_hand_size` cards without having yelled
/// draws `missed_yell_penalty` cards, or as many as the piles still hold:
/// a short penalty never blocks the turn from passing. On a finished game
/// this succeeds without advancing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FinalizeTurn;

impl FinalizeTurn {
    fn penalize_missed_yells(state: &mut GameState, current: usize) {
        let uno_hand_size = state.config.uno_hand_size;
        let penalty = state.config.missed_yell_penalty;
        if penalty == 0 {
            return;
        }

        let silent: Vec<usize> = state
            .players()
            .iter()
            .enumerate()
            .filter(|&(i, p)| i != current && p.hand_size() == uno_hand_size && !p.yelled_uno())
            .map(|(i, _)| i)
            .collect();

        for index in silent {
            let drawn = state.deal_to(index, penalty);
            debug!(player = %state.players()[index].id, drawn, "Missed uno yell");
        }
    }
}

impl GameCommand for FinalizeTurn {
    fn name(&self) -> &'static str {
        "finalize_turn"
    }

    fn execute(&self, state: &mut GameState) -> Result<(), CommandError> {
        if state.status == GameStatus::Finished {
            return Ok(());
        }
        if state.status != GameStatus::Playing || state.player_count() < 2 {
            return Err(CommandError::NoNextPlayer);
        }
        let current = state.current_player_index().ok_or(CommandError::NoNextPlayer)?;

        let steps = if state.skip_next { 2 } else { 1 };
        let next = state.seat_after(current, steps).ok_or(CommandError::NoNextPlayer)?;

        Self::penalize_missed_yells(state, current);

        state.skip_next = false;
        let next_id = state.players()[next].id.clone();
        state.turn.set_player_turn(next_id.clone());

        debug!(next = %next_id, round = state.turn.round(), "Turn finalized");
        Ok(())
    }
}
