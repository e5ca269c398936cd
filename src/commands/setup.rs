//! Game setup: building the deck and dealing.

use tracing::debug;

use super::{CommandError, GameCommand};
use crate::core::{CardValue, Deck, GameModes, GameState, GameStatus};

/// Collect every card back and rebuild a freshly shuffled draw pile.
///
/// Hands and the discard pile are emptied. Always succeeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildDeck;

impl GameCommand for BuildDeck {
    fn name(&self) -> &'static str {
        "build_deck"
    }

    fn execute(&self, state: &mut GameState) -> Result<(), CommandError> {
        for index in 0..state.player_count() {
            if let Some(player) = state.player_at_mut(index) {
                player.clear_hand();
            }
        }
        state.clear_discard();

        let mut deck = Deck::standard();
        deck.shuffle(&mut state.rng);
        state.deck = deck;

        debug!(cards = state.deck.len(), "Built deck");
        Ok(())
    }
}

/// Deal a new game under the given modes.
///
/// Requires at least `min_players` seated, a hand size of at least one and
/// enough cards for every hand plus the opening discard. On success the
/// status is `Playing` and the first player holds a fresh turn (round 1).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartGame {
    pub modes: GameModes,
}

impl StartGame {
    pub fn new(modes: Option<GameModes>) -> Self {
        Self {
            modes: modes.unwrap_or_default(),
        }
    }

    /// Put any held or discarded cards back under the draw pile.
    fn gather_cards(state: &mut GameState) {
        let mut gathered = false;
        for index in 0..state.player_count() {
            if let Some(player) = state.player_at_mut(index) {
                let hand = player.clear_hand();
                gathered |= !hand.is_empty();
                state.deck.push_bottom(hand);
            }
        }
        let discard = state.clear_discard();
        gathered |= !discard.is_empty();
        state.deck.push_bottom(discard);

        if gathered {
            state.deck.shuffle(&mut state.rng);
        }
    }

    /// Move the first numbered card onto the discard pile.
    ///
    /// Action cards drawn on the way go under the pile. With no numbered
    /// card anywhere, the top card is flipped as-is.
    fn flip_opening_card(state: &mut GameState) {
        for _ in 0..state.deck.len() {
            let Some(card) = state.deck.draw() else {
                return;
            };
            if matches!(card.value, CardValue::Number(_)) {
                state.push_discard(card);
                return;
            }
            state.deck.push_bottom([card]);
        }
        if let Some(card) = state.deck.draw() {
            state.push_discard(card);
        }
    }
}

impl GameCommand for StartGame {
    fn name(&self) -> &'static str {
        "start_game"
    }

    fn execute(&self, state: &mut GameState) -> Result<(), CommandError> {
        let player_count = state.player_count();
        if player_count == 0 || player_count < state.config.min_players {
            return Err(CommandError::NotEnoughPlayers {
                min: state.config.min_players.max(1),
                have: player_count,
            });
        }

        let hand_size = self.modes.hand_size(&state.config);
        if hand_size == 0 {
            return Err(CommandError::InvalidHandSize(hand_size));
        }
        let needed = hand_size
            .checked_mul(player_count)
            .and_then(|cards| cards.checked_add(1))
            .ok_or(CommandError::EmptyDeck)?;
        let in_hands: usize = state.players().iter().map(|p| p.hand_size()).sum();
        let available = state.deck.len() + state.discard().len() + in_hands;
        if available < needed {
            return Err(CommandError::EmptyDeck);
        }

        Self::gather_cards(state);
        state.reset_round_state();
        state.modes = self.modes.clone();

        for _ in 0..hand_size {
            for index in 0..player_count {
                state.deal_to(index, 1);
            }
        }
        Self::flip_opening_card(state);

        let first = if self.modes.random_first_player {
            state.rng.seat(player_count).unwrap_or(0)
        } else {
            0
        };
        let first_id = state.players()[first].id.clone();
        state.turn.set_player_turn(first_id.clone());
        state.status = GameStatus::Playing;

        debug!(players = player_count, hand_size, first = %first_id, "Game started");
        Ok(())
    }
}
