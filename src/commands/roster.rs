//! Roster commands: seating, unseating and hand swaps.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::{CommandError, GameCommand};
use crate::core::{GameState, GameStatus, Player, PlayerId};

/// Seat new players at the end of the roster.
///
/// Players join with empty hands. Fails without seating anyone if the
/// roster would exceed `max_players` or an id is already taken.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddPlayers {
    pub players: Vec<Player>,
}

impl AddPlayers {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }
}

impl GameCommand for AddPlayers {
    fn name(&self) -> &'static str {
        "add_players"
    }

    fn execute(&self, state: &mut GameState) -> Result<(), CommandError> {
        let have = state.player_count();
        let adding = self.players.len();
        if have + adding > state.config.max_players {
            return Err(CommandError::TooManyPlayers {
                max: state.config.max_players,
                have,
                adding,
            });
        }

        let mut seen: FxHashSet<&PlayerId> = state.players().iter().map(|p| &p.id).collect();
        for player in &self.players {
            if !seen.insert(&player.id) {
                return Err(CommandError::DuplicatePlayer(player.id.clone()));
            }
        }

        for player in &self.players {
            let mut player = player.clone();
            player.clear_hand();
            debug!(player = %player.id, "Seating player");
            state.push_player(player);
        }
        Ok(())
    }
}

/// Unseat a player.
///
/// Their cards go under the draw pile. If it was their turn, the turn
/// passes to the next seat. A game in progress ends when fewer than two
/// players remain, the last one standing winning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovePlayer {
    pub player: PlayerId,
}

impl RemovePlayer {
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }
}

impl GameCommand for RemovePlayer {
    fn name(&self) -> &'static str {
        "remove_player"
    }

    fn execute(&self, state: &mut GameState) -> Result<(), CommandError> {
        let index = state
            .player_index(&self.player)
            .ok_or_else(|| CommandError::PlayerNotFound(self.player.clone()))?;

        let held_turn = state.turn.is_turn_of(&self.player);
        let successor = if held_turn {
            state
                .seat_after(index, 1)
                .filter(|&next| next != index)
                .map(|next| state.players()[next].id.clone())
        } else {
            None
        };

        let mut removed = state.remove_player_at(index);
        state.deck.push_bottom(removed.clear_hand());

        if held_turn {
            state.skip_next = false;
            match successor {
                Some(next) => state.turn.set_player_turn(next),
                None => state.turn.release(),
            }
        }

        if state.status == GameStatus::Playing && state.player_count() < 2 {
            let last = state.players().front().map(|p| p.id.clone());
            debug!(winner = ?last, "Game ended by removal");
            state.finish(last);
        }

        debug!(player = %self.player, remaining = state.player_count(), "Removed player");
        Ok(())
    }
}

/// Exchange two players' hands.
///
/// Applying the same swap twice restores both hands. Swapping a player
/// with themselves is a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitchHands {
    pub first: PlayerId,
    pub second: PlayerId,
}

impl SwitchHands {
    pub fn new(first: PlayerId, second: PlayerId) -> Self {
        Self { first, second }
    }
}

impl GameCommand for SwitchHands {
    fn name(&self) -> &'static str {
        "switch_hands"
    }

    fn execute(&self, state: &mut GameState) -> Result<(), CommandError> {
        let first = state
            .player_index(&self.first)
            .ok_or_else(|| CommandError::PlayerNotFound(self.first.clone()))?;
        let second = state
            .player_index(&self.second)
            .ok_or_else(|| CommandError::PlayerNotFound(self.second.clone()))?;

        if first == second {
            return Ok(());
        }

        let first_hand = state.players()[first].hand().clone();
        let second_hand = match state.player_at_mut(second) {
            Some(player) => player.replace_hand(first_hand),
            None => return Err(CommandError::PlayerNotFound(self.second.clone())),
        };
        if let Some(player) = state.player_at_mut(first) {
            player.replace_hand(second_hand);
        }

        debug!(first = %self.first, second = %self.second, "Switched hands");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{blue, pid, playing_state, red};
    use crate::core::{Direction, GameConfig};

    fn player(id: &str) -> Player {
        Player::new(id, format!("player {id}"), "avatar")
    }

    #[test]
    fn test_add_players() {
        let mut state = GameState::new(GameConfig::default());

        AddPlayers::new(vec![player("p1"), player("p2")])
            .execute(&mut state)
            .unwrap();

        assert_eq!(state.player_count(), 2);
        assert_eq!(state.players()[1].id, pid("p2"));
    }

    #[test]
    fn test_add_players_strips_hands() {
        let mut state = GameState::new(GameConfig::default());
        let mut incoming = player("p1");
        incoming.receive(red(1, 1));

        AddPlayers::new(vec![incoming]).execute(&mut state).unwrap();

        assert_eq!(state.players()[0].hand_size(), 0);
    }

    #[test]
    fn test_add_players_over_limit() {
        let config = GameConfig::new().with_player_bounds(2, 3);
        let mut state = GameState::new(config);
        AddPlayers::new(vec![player("p1"), player("p2")])
            .execute(&mut state)
            .unwrap();

        let err = AddPlayers::new(vec![player("p3"), player("p4")])
            .execute(&mut state)
            .unwrap_err();

        assert_eq!(err, CommandError::TooManyPlayers { max: 3, have: 2, adding: 2 });
        assert_eq!(state.player_count(), 2);
    }

    #[test]
    fn test_add_players_duplicate() {
        let mut state = GameState::new(GameConfig::default());
        AddPlayers::new(vec![player("p1")]).execute(&mut state).unwrap();

        let err = AddPlayers::new(vec![player("p2"), player("p1")])
            .execute(&mut state)
            .unwrap_err();
        assert_eq!(err, CommandError::DuplicatePlayer(pid("p1")));
        assert_eq!(state.player_count(), 1);

        let err = AddPlayers::new(vec![player("p3"), player("p3")])
            .execute(&mut state)
            .unwrap_err();
        assert_eq!(err.code(), "duplicate_player");
        assert_eq!(state.player_count(), 1);
    }

    #[test]
    fn test_remove_unknown_player() {
        let mut state = playing_state(vec![vec![red(1, 1)], vec![red(2, 2)]], red(3, 3), vec![]);
        let before = state.players().clone();

        let err = RemovePlayer::new(pid("ghost")).execute(&mut state).unwrap_err();

        assert_eq!(err, CommandError::PlayerNotFound(pid("ghost")));
        assert_eq!(state.players(), &before);
    }

    #[test]
    fn test_remove_player_returns_cards_to_deck() {
        let mut state = playing_state(
            vec![vec![red(1, 1)], vec![red(2, 2), red(4, 4)], vec![red(5, 5)]],
            red(3, 3),
            vec![],
        );

        RemovePlayer::new(pid("p2")).execute(&mut state).unwrap();

        assert_eq!(state.player_count(), 2);
        assert_eq!(state.deck.len(), 2);
        assert_eq!(state.current_player_id(), Some(&pid("p1")));
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn test_remove_current_player_passes_turn() {
        let mut state = playing_state(
            vec![vec![red(1, 1)], vec![red(2, 2)], vec![red(5, 5)]],
            red(3, 3),
            vec![],
        );
        let round = state.turn.round();

        RemovePlayer::new(pid("p1")).execute(&mut state).unwrap();

        assert_eq!(state.current_player_id(), Some(&pid("p2")));
        assert!(state.turn.round() > round);
    }

    #[test]
    fn test_remove_current_player_counter_clockwise() {
        let mut state = playing_state(
            vec![vec![red(1, 1)], vec![red(2, 2)], vec![red(5, 5)]],
            red(3, 3),
            vec![],
        );
        state.direction = Direction::CounterClockwise;

        RemovePlayer::new(pid("p1")).execute(&mut state).unwrap();

        assert_eq!(state.current_player_id(), Some(&pid("p3")));
    }

    #[test]
    fn test_remove_leaving_one_player_ends_game() {
        let mut state = playing_state(vec![vec![red(1, 1)], vec![red(2, 2)]], red(3, 3), vec![]);

        RemovePlayer::new(pid("p1")).execute(&mut state).unwrap();

        assert_eq!(state.status, GameStatus::Finished);
        assert_eq!(state.winner(), Some(&pid("p2")));
    }

    #[test]
    fn test_remove_last_player_releases_turn() {
        let mut state = playing_state(vec![vec![red(1, 1)]], red(3, 3), vec![]);

        RemovePlayer::new(pid("p1")).execute(&mut state).unwrap();

        assert!(state.current_player_id().is_none());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_switch_hands() {
        let mut state = playing_state(
            vec![vec![red(1, 1), red(2, 2)], vec![blue(3, 3)]],
            red(9, 9),
            vec![],
        );

        SwitchHands::new(pid("p1"), pid("p2")).execute(&mut state).unwrap();

        assert_eq!(state.players()[0].hand().iter().map(|c| c.id.raw()).collect::<Vec<_>>(), vec![3]);
        assert_eq!(state.players()[1].hand_size(), 2);
    }

    #[test]
    fn test_switch_hands_twice_restores() {
        let mut state = playing_state(
            vec![vec![red(1, 1), red(2, 2)], vec![blue(3, 3)]],
            red(9, 9),
            vec![],
        );
        let before: Vec<_> = state.players().iter().map(|p| p.hand().clone()).collect();

        let swap = SwitchHands::new(pid("p1"), pid("p2"));
        swap.execute(&mut state).unwrap();
        swap.execute(&mut state).unwrap();

        let after: Vec<_> = state.players().iter().map(|p| p.hand().clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_switch_hands_unknown_player() {
        let mut state = playing_state(vec![vec![red(1, 1)], vec![blue(3, 3)]], red(9, 9), vec![]);
        let before = state.players().clone();

        let err = SwitchHands::new(pid("p1"), pid("ghost")).execute(&mut state).unwrap_err();

        assert_eq!(err, CommandError::PlayerNotFound(pid("ghost")));
        assert_eq!(state.players(), &before);
    }
}
