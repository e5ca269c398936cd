//! The command sequencer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::InvokeError;
use crate::commands::{Command, GameCommand};
use crate::core::GameState;

/// An ordered list of commands run as one logical action.
///
/// Every recipe is at most two commands long, so batches stay inline.
pub type CommandBatch<C = Command> = SmallVec<[C; 2]>;

/// Lifecycle of an invoker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvokerStatus {
    /// Holding the batch; state untouched.
    Idle,
    /// Executing commands.
    Running,
    /// Every command succeeded.
    Completed,
    /// A command failed; the rest were not run.
    Failed,
}

/// What happens to earlier commands' effects when a later one fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Effects of commands that succeeded before the failure stay applied.
    /// Callers inspect the state to reconcile.
    #[default]
    KeepApplied,
    /// The state is restored to how it was before the batch started.
    Rollback,
}

/// Runs one batch of commands, in order, against one game state.
///
/// Commands run strictly one after another. The first failure stops the
/// batch: no later command executes. An invoker runs exactly once;
/// invoking it again yields [`InvokeError::AlreadyInvoked`].
///
/// ```
/// use uno_engine::commands::{AddPlayers, BuildDeck, Command, StartGame};
/// use uno_engine::core::{GameConfig, GameState, Player};
/// use uno_engine::invoker::{CommandsInvoker, InvokerStatus};
///
/// let mut state = GameState::new(GameConfig::default());
/// let mut invoker = CommandsInvoker::new([
///     Command::from(AddPlayers::new(vec![
///         Player::new("p1", "Ana", "fox"),
///         Player::new("p2", "Bo", "owl"),
///     ])),
///     Command::from(BuildDeck),
///     Command::from(StartGame::default()),
/// ]);
///
/// invoker.invoke(&mut state).unwrap();
/// assert_eq!(invoker.status(), InvokerStatus::Completed);
/// assert!(invoker.invoke(&mut state).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct CommandsInvoker<C = Command> {
    commands: CommandBatch<C>,
    policy: FailurePolicy,
    status: InvokerStatus,
    executed: usize,
}

impl<C: GameCommand> CommandsInvoker<C> {
    /// Create an idle invoker holding `commands`.
    pub fn new(commands: impl IntoIterator<Item = C>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            policy: FailurePolicy::default(),
            status: InvokerStatus::Idle,
            executed: 0,
        }
    }

    /// Set the failure policy.
    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn status(&self) -> InvokerStatus {
        self.status
    }

    #[must_use]
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// The batch, in execution order.
    #[must_use]
    pub fn commands(&self) -> &[C] {
        &self.commands
    }

    /// Number of commands that ran to success.
    #[must_use]
    pub fn executed(&self) -> usize {
        self.executed
    }

    /// Run the batch against `state`.
    ///
    /// Returns `Ok(())` once every command has succeeded, or the first
    /// failure. Under [`FailurePolicy::Rollback`] a failure also restores
    /// `state` to its pre-batch snapshot.
    pub fn invoke(&mut self, state: &mut GameState) -> Result<(), InvokeError> {
        if self.status != InvokerStatus::Idle {
            return Err(InvokeError::AlreadyInvoked);
        }
        self.status = InvokerStatus::Running;

        let snapshot = match self.policy {
            FailurePolicy::Rollback => Some(state.clone()),
            FailurePolicy::KeepApplied => None,
        };

        for (index, command) in self.commands.iter().enumerate() {
            let name = command.name();
            debug!(index, command = name, "Executing command");

            if let Err(source) = command.execute(state) {
                self.status = InvokerStatus::Failed;
                let rolled_back = snapshot.is_some();
                if let Some(snapshot) = snapshot {
                    *state = snapshot;
                }
                warn!(
                    index,
                    command = name,
                    code = source.code(),
                    rolled_back,
                    "Batch failed: {source}"
                );
                return Err(InvokeError::CommandFailed {
                    index,
                    command: name,
                    source,
                });
            }

            self.executed += 1;
        }

        self.status = InvokerStatus::Completed;
        info!(commands = self.executed, "Batch completed");
        Ok(())
    }

    /// Run the batch once, consuming the invoker.
    pub fn run(mut self, state: &mut GameState) -> Result<(), InvokeError> {
        self.invoke(state)
    }
}
