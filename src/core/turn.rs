//! Turn tracking: whose move it is and the round counter.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Direction of play around the roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Roster order.
    #[default]
    Clockwise,
    /// Reverse roster order.
    CounterClockwise,
}

impl Direction {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Roster index `steps` seats away from `from` in this direction.
    #[must_use]
    pub const fn step(self, from: usize, steps: usize, player_count: usize) -> usize {
        let steps = steps % player_count;
        match self {
            Direction::Clockwise => (from + steps) % player_count,
            Direction::CounterClockwise => (from + player_count - steps) % player_count,
        }
    }
}

/// Whose turn it is, and how many turns have been handed out.
///
/// A fresh turn has no player and round 0. Every assignment increments the
/// round, so the first assignment yields round 1. Reading never changes it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    player: Option<PlayerId>,
    round: u32,
}

impl Turn {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn player(&self) -> Option<&PlayerId> {
        self.player.as_ref()
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn is_turn_of(&self, player: &PlayerId) -> bool {
        self.player.as_ref() == Some(player)
    }

    /// Hand the turn to `player`, advancing the round.
    pub fn set_player_turn(&mut self, player: PlayerId) {
        self.player = Some(player);
        self.round += 1;
    }

    /// Drop the current holder without touching the round (roster emptied).
    pub fn release(&mut self) {
        self.player = None;
    }
}
