//! Game state: the single mutable aggregate every command reads and writes.
//!
//! ## GameState
//!
//! - Roster (ordered players with their hands)
//! - Draw pile and discard pile
//! - Turn marker, play direction, pending skip
//! - Active game modes and status
//! - RNG
//!
//! Collections use `im` persistent structures, so `clone()` is O(1). The
//! invoker relies on that to snapshot state before a batch when rollback is
//! requested.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::config::{GameConfig, GameModes};
use super::deck::Deck;
use super::player::{Player, PlayerId};
use super::rng::GameRng;
use super::turn::{Direction, Turn};

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Roster is being assembled; no cards dealt.
    #[default]
    Waiting,
    /// Cards dealt, turns being taken.
    Playing,
    /// A player emptied their hand or the table emptied.
    Finished,
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Table configuration.
    pub config: GameConfig,

    /// Modes of the current (or last) game.
    pub modes: GameModes,

    pub status: GameStatus,

    /// Whose turn it is.
    pub turn: Turn,

    pub direction: Direction,

    /// Set by a skip effect; consumed by the next turn advancement.
    pub skip_next: bool,

    /// Draw pile.
    pub deck: Deck,

    /// Deterministic RNG.
    pub rng: GameRng,

    /// Roster in seating order.
    players: Vector<Player>,

    /// Discard pile (top = back).
    discard: Vector<Card>,

    winner: Option<PlayerId>,
}

impl GameState {
    /// Create an empty table.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            modes: GameModes::default(),
            status: GameStatus::Waiting,
            turn: Turn::new(),
            direction: Direction::default(),
            skip_next: false,
            deck: Deck::new(),
            rng,
            players: Vector::new(),
            discard: Vector::new(),
            winner: None,
        }
    }

    // === Roster ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| &p.id == id)
    }

    /// Seat index of a player.
    #[must_use]
    pub fn player_index(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }

    /// Seat a player at the end of the roster.
    pub fn push_player(&mut self, player: Player) {
        self.players.push_back(player);
    }

    /// Unseat the player at `index`.
    pub fn remove_player_at(&mut self, index: usize) -> Player {
        self.players.remove(index)
    }

    pub(crate) fn player_at_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    // === Turn ===

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player_id(&self) -> Option<&PlayerId> {
        self.turn.player()
    }

    /// Seat index of the player whose turn it is.
    #[must_use]
    pub fn current_player_index(&self) -> Option<usize> {
        self.current_player_id().and_then(|id| self.player_index(id))
    }

    /// Seat index `steps` seats after `from` in the current direction.
    #[must_use]
    pub fn seat_after(&self, from: usize, steps: usize) -> Option<usize> {
        if self.players.is_empty() {
            return None;
        }
        Some(self.direction.step(from, steps, self.players.len()))
    }

    // === Piles ===

    /// Top of the discard pile.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.discard.back()
    }

    #[must_use]
    pub fn discard(&self) -> &Vector<Card> {
        &self.discard
    }

    pub fn push_discard(&mut self, card: Card) {
        self.discard.push_back(card);
    }

    pub fn clear_discard(&mut self) -> Vector<Card> {
        std::mem::take(&mut self.discard)
    }

    /// Cards that can still be drawn, counting the reshufflable discard pile.
    #[must_use]
    pub fn drawable_cards(&self) -> usize {
        self.deck.len() + self.discard.len().saturating_sub(1)
    }

    /// Draw the top card, reshuffling the discard pile (all but its top card)
    /// into the draw pile when it has run dry.
    ///
    /// Returns `None` only when both piles are exhausted.
    pub fn draw_card(&mut self) -> Option<Card> {
        if self.deck.is_empty() {
            self.replenish_deck();
        }
        self.deck.draw()
    }

    fn replenish_deck(&mut self) {
        if self.discard.len() <= 1 {
            return;
        }
        let top = self.discard.pop_back();
        let rest = std::mem::take(&mut self.discard);
        self.deck.push_bottom(rest);
        self.deck.shuffle(&mut self.rng);
        self.discard.extend(top);
        tracing::debug!(deck = self.deck.len(), "Replenished draw pile from discard");
    }

    /// Draw up to `count` cards into the hand of the player at `index`.
    ///
    /// Returns the number of cards actually drawn.
    pub fn deal_to(&mut self, index: usize, count: usize) -> usize {
        let mut dealt = 0;
        for _ in 0..count {
            let Some(card) = self.draw_card() else {
                break;
            };
            match self.players.get_mut(index) {
                Some(player) => player.receive(card),
                None => {
                    self.deck.push_top(card);
                    break;
                }
            }
            dealt += 1;
        }
        dealt
    }

    // === Outcome ===

    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        self.winner.as_ref()
    }

    /// End the game, optionally naming a winner.
    pub fn finish(&mut self, winner: Option<PlayerId>) {
        self.status = GameStatus::Finished;
        self.winner = winner;
    }

    /// Clear per-game bookkeeping before a new deal.
    pub(crate) fn reset_round_state(&mut self) {
        self.winner = None;
        self.skip_next = false;
        self.direction = Direction::default();
        self.turn = Turn::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{CardColor, CardId, CardValue};

    fn card(id: u32, n: u8) -> Card {
        Card::new(CardId::new(id), CardValue::Number(n), Some(CardColor::Red))
    }

    fn two_player_state() -> GameState {
        let mut state = GameState::new(GameConfig::default());
        state.push_player(Player::new("p1", "player 1", "a1"));
        state.push_player(Player::new("p2", "player 2", "a2"));
        state
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameConfig::default());

        assert_eq!(state.player_count(), 0);
        assert_eq!(state.status, GameStatus::Waiting);
        assert!(state.current_player_id().is_none());
        assert!(state.top_card().is_none());
        assert!(state.deck.is_empty());
    }

    #[test]
    fn test_roster_lookup() {
        let state = two_player_state();

        assert_eq!(state.player_index(&PlayerId::new("p2")), Some(1));
        assert!(state.player(&PlayerId::new("p3")).is_none());
    }

    #[test]
    fn test_seat_after_follows_direction() {
        let mut state = two_player_state();
        state.push_player(Player::new("p3", "player 3", "a3"));

        assert_eq!(state.seat_after(0, 1), Some(1));
        state.direction = Direction::CounterClockwise;
        assert_eq!(state.seat_after(0, 1), Some(2));
    }

    #[test]
    fn test_draw_replenishes_from_discard() {
        let mut state = two_player_state();
        state.push_discard(card(1, 1));
        state.push_discard(card(2, 2));
        state.push_discard(card(3, 3));

        assert_eq!(state.drawable_cards(), 2);

        let drawn = state.draw_card().unwrap();
        assert!(drawn.id == CardId::new(1) || drawn.id == CardId::new(2));
        assert_eq!(state.top_card(), Some(&card(3, 3)));
        assert_eq!(state.discard().len(), 1);
        assert_eq!(state.deck.len(), 1);
    }

    #[test]
    fn test_draw_exhausted() {
        let mut state = two_player_state();
        state.push_discard(card(1, 1));

        assert_eq!(state.drawable_cards(), 0);
        assert!(state.draw_card().is_none());
        assert_eq!(state.top_card(), Some(&card(1, 1)));
    }

    #[test]
    fn test_deal_to() {
        let mut state = two_player_state();
        state.deck = Deck::from_cards([card(1, 1), card(2, 2), card(3, 3)]);

        assert_eq!(state.deal_to(0, 2), 2);
        assert_eq!(state.players()[0].hand_size(), 2);
        assert_eq!(state.deal_to(1, 5), 1);
        assert_eq!(state.deck.len(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = two_player_state();
        let snapshot = state.clone();

        state.remove_player_at(0);

        assert_eq!(state.player_count(), 1);
        assert_eq!(snapshot.player_count(), 2);
    }
}
