//! Shared fixtures for integration tests.

#![allow(dead_code)]

pub mod logging;

use uno_engine::core::{Card, CardColor, CardValue, GameConfig, Player, PlayerId};
use uno_engine::session::GameSession;

pub fn players(count: usize) -> Vec<Player> {
    (1..=count)
        .map(|i| Player::new(format!("p{i}"), format!("player {i}"), "avatar"))
        .collect()
}

pub fn pid(id: &str) -> PlayerId {
    PlayerId::new(id)
}

/// A started game with `count` players, shuffled with `seed`.
pub fn started_session(seed: u64, count: usize) -> GameSession {
    logging::init();
    let mut session = GameSession::new(GameConfig::default().with_seed(seed));
    session.add_players(players(count)).expect("seat players");
    session.start_game(None).expect("start game");
    session
}

/// A card the current player can legally play without side effects on the
/// turn order: a matching number card, or a plain wild with a color chosen.
pub fn quiet_playable_card(session: &GameSession) -> Option<Card> {
    let state = session.state();
    let top = *state.top_card()?;
    let current = state.player(state.current_player_id()?)?;

    let number = current
        .hand()
        .iter()
        .find(|card| matches!(card.value, CardValue::Number(_)) && card.matches(&top))
        .copied();
    number.or_else(|| {
        current
            .hand()
            .iter()
            .find(|card| card.value == CardValue::Wild)
            .map(|card| card.with_color(top.color.unwrap_or(CardColor::Red)))
    })
}
