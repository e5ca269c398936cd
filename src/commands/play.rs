//! Playing cards and yelling uno.

use tracing::debug;

use super::{CommandError, GameCommand};
use crate::core::{Card, CardValue, GameState, GameStatus, PlayerId};

/// Play a card from the current player's hand onto the discard pile.
///
/// The card is looked up in the hand by id; for wild cards the color on
/// `card` is the chosen color and is required. Effects:
///
/// - `Skip`: the next player loses their turn
/// - `Reverse`: direction flips (a skip when only two are seated)
/// - `DrawTwo` / `WildDrawFour`: `target` (or the next player when absent)
///   draws the penalty; if that is the next player they also lose their turn.
///   The play is refused with `EmptyDeck` when the piles cannot cover the
///   whole penalty.
///
/// Emptying the hand wins the game. The turn itself is not advanced here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayCard {
    pub player: PlayerId,
    pub card: Card,
    pub target: Option<PlayerId>,
}

impl PlayCard {
    pub fn new(player: PlayerId, card: Card, target: Option<PlayerId>) -> Self {
        Self { player, card, target }
    }

    /// The card as it will land on the discard pile.
    fn resolve_card(&self, state: &GameState, index: usize) -> Result<Card, CommandError> {
        let held = state.players()[index]
            .card(self.card.id)
            .copied()
            .ok_or_else(|| CommandError::CardNotInHand {
                player: self.player.clone(),
                card: self.card.id,
            })?;

        let played = if held.is_wild() {
            let color = self.card.color.ok_or(CommandError::MissingColor(held.id))?;
            held.with_color(color)
        } else {
            held
        };

        match state.top_card() {
            Some(top) if !played.matches(top) => Err(CommandError::IllegalCard(played.id)),
            _ => Ok(played),
        }
    }

    fn resolve_target(&self, state: &GameState) -> Result<Option<usize>, CommandError> {
        let Some(target) = &self.target else {
            return Ok(None);
        };
        if target == &self.player {
            return Err(CommandError::InvalidTarget(target.clone()));
        }
        state
            .player_index(target)
            .map(Some)
            .ok_or_else(|| CommandError::PlayerNotFound(target.clone()))
    }
}

impl GameCommand for PlayCard {
    fn name(&self) -> &'static str {
        "play_card"
    }

    fn execute(&self, state: &mut GameState) -> Result<(), CommandError> {
        if state.status != GameStatus::Playing {
            return Err(CommandError::GameNotStarted);
        }
        let index = state
            .player_index(&self.player)
            .ok_or_else(|| CommandError::PlayerNotFound(self.player.clone()))?;
        if !state.turn.is_turn_of(&self.player) {
            return Err(CommandError::NotYourTurn(self.player.clone()));
        }
        let played = self.resolve_card(state, index)?;
        let target = self.resolve_target(state)?;

        // The played card lands on the discard pile, so every card under it
        // becomes drawable.
        let penalty = played.value.draw_penalty();
        if state.deck.len() + state.discard().len() < penalty {
            return Err(CommandError::EmptyDeck);
        }

        if let Some(player) = state.player_mut(&self.player) {
            player.take_card(played.id);
        }
        state.push_discard(played);

        let next = state.seat_after(index, 1);
        match played.value {
            CardValue::Skip => state.skip_next = true,
            CardValue::Reverse => {
                state.direction = state.direction.reversed();
                if state.player_count() == 2 {
                    state.skip_next = true;
                }
            }
            CardValue::DrawTwo | CardValue::WildDrawFour => {
                if let Some(victim) = target.or(next) {
                    let drawn = state.deal_to(victim, played.value.draw_penalty());
                    if Some(victim) == next {
                        state.skip_next = true;
                    }
                    debug!(victim, drawn, "Applied draw penalty");
                }
            }
            CardValue::Number(_) | CardValue::Wild => {}
        }

        debug!(player = %self.player, card = %played.id, "Played card");

        let emptied = state.player(&self.player).is_some_and(|p| p.hand_size() == 0);
        if emptied {
            debug!(winner = %self.player, "Player emptied their hand");
            state.finish(Some(self.player.clone()));
        }
        Ok(())
    }
}

/// Declare uno.
///
/// The yeller (the current player when `None`) must hold exactly
/// `uno_hand_size` cards and not have yelled already. Players who reach
/// that size and stay silent are penalized when the turn next passes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct YellUno {
    pub yeller: Option<PlayerId>,
}

impl YellUno {
    pub fn new(yeller: Option<PlayerId>) -> Self {
        Self { yeller }
    }
}

impl GameCommand for YellUno {
    fn name(&self) -> &'static str {
        "yell_uno"
    }

    fn execute(&self, state: &mut GameState) -> Result<(), CommandError> {
        if state.status != GameStatus::Playing {
            return Err(CommandError::GameNotStarted);
        }
        let yeller = match &self.yeller {
            Some(id) => id.clone(),
            None => state
                .current_player_id()
                .cloned()
                .ok_or(CommandError::GameNotStarted)?,
        };

        let uno_hand_size = state.config.uno_hand_size;
        let player = state
            .player_mut(&yeller)
            .ok_or_else(|| CommandError::PlayerNotFound(yeller.clone()))?;
        if player.yelled_uno() {
            return Err(CommandError::AlreadyYelled(yeller));
        }
        if player.hand_size() != uno_hand_size {
            return Err(CommandError::CannotYell {
                player: yeller,
                hand_size: player.hand_size(),
            });
        }

        player.mark_yelled();
        debug!(player = %yeller, "Yelled uno");
        Ok(())
    }
}
