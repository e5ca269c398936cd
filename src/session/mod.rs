//! A game and the service that drives it.

use tracing::info;

use crate::core::{Card, GameConfig, GameModes, GameState, Player, PlayerId};
use crate::invoker::{FailurePolicy, InvokeError};
use crate::service::{CommandService, Intent};

/// Owns one game state and dispatches actions against it.
///
/// Actions take `&mut self`, so a session is driven by one caller at a
/// time. Share it across threads behind a `Mutex` if needed.
///
/// ```
/// use uno_engine::core::{GameConfig, GameStatus, Player};
/// use uno_engine::session::GameSession;
///
/// let mut session = GameSession::new(GameConfig::default());
/// session
///     .add_players(vec![Player::new("p1", "Ana", "fox"), Player::new("p2", "Bo", "owl")])
///     .unwrap();
/// session.start_game(None).unwrap();
///
/// assert_eq!(session.state().status, GameStatus::Playing);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    state: GameState,
    service: CommandService,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::from_state(GameState::new(config))
    }

    /// Resume from an existing state.
    pub fn from_state(state: GameState) -> Self {
        info!(players = state.player_count(), seed = state.config.seed, "Session opened");
        Self {
            state,
            service: CommandService::new(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.service = self.service.with_policy(policy);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn service(&self) -> &CommandService {
        &self.service
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn dispatch(&mut self, intent: Intent) -> Result<(), InvokeError> {
        self.service.dispatch(&mut self.state, intent)
    }

    pub fn start_game(&mut self, modes: Option<GameModes>) -> Result<(), InvokeError> {
        self.service.start_game(&mut self.state, modes)
    }

    pub fn reset_game(&mut self, modes: Option<GameModes>) -> Result<(), InvokeError> {
        self.service.reset_game(&mut self.state, modes)
    }

    pub fn add_players(&mut self, players: Vec<Player>) -> Result<(), InvokeError> {
        self.service.add_players(&mut self.state, players)
    }

    pub fn remove_player(&mut self, player: PlayerId) -> Result<(), InvokeError> {
        self.service.remove_player(&mut self.state, player)
    }

    pub fn play_card(
        &mut self,
        player: PlayerId,
        card: Card,
        to_player: Option<PlayerId>,
    ) -> Result<(), InvokeError> {
        self.service.play_card(&mut self.state, player, card, to_player)
    }

    pub fn take_card(&mut self) -> Result<(), InvokeError> {
        self.service.take_card(&mut self.state)
    }

    pub fn take_card_to_random_player(&mut self) -> Result<(), InvokeError> {
        self.service.take_card_to_random_player(&mut self.state)
    }

    pub fn yell_uno(&mut self, yeller: Option<PlayerId>) -> Result<(), InvokeError> {
        self.service.yell_uno(&mut self.state, yeller)
    }

    pub fn switch_hands(&mut self, first: PlayerId, second: PlayerId) -> Result<(), InvokeError> {
        self.service.switch_hands(&mut self.state, first, second)
    }
}
