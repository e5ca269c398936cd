//! Batch sequencing with instrumented and real commands.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{logging, pid, players};
use uno_engine::commands::{AddPlayers, Command, CommandError, GameCommand, RemovePlayer};
use uno_engine::core::{GameConfig, GameState};
use uno_engine::invoker::{CommandsInvoker, FailurePolicy, InvokeError, InvokerStatus};

/// Appends its label to a shared log when executed.
struct Recorded {
    label: &'static str,
    outcome: Result<(), CommandError>,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl GameCommand for Recorded {
    fn name(&self) -> &'static str {
        self.label
    }

    fn execute(&self, _state: &mut GameState) -> Result<(), CommandError> {
        self.log.borrow_mut().push(self.label);
        self.outcome.clone()
    }
}

fn recorded(
    log: &Rc<RefCell<Vec<&'static str>>>,
    label: &'static str,
    outcome: Result<(), CommandError>,
) -> Recorded {
    Recorded {
        label,
        outcome,
        log: Rc::clone(log),
    }
}

#[test]
fn test_second_failure_stops_third() {
    logging::init();
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut state = GameState::new(GameConfig::default());
    let mut invoker = CommandsInvoker::new([
        recorded(&log, "a", Ok(())),
        recorded(&log, "b", Err(CommandError::EmptyDeck)),
        recorded(&log, "c", Ok(())),
    ]);

    let err = invoker.invoke(&mut state).unwrap_err();

    assert_eq!(*log.borrow(), ["a", "b"]);
    assert_eq!(
        err,
        InvokeError::CommandFailed {
            index: 1,
            command: "b",
            source: CommandError::EmptyDeck,
        }
    );
    assert_eq!(invoker.status(), InvokerStatus::Failed);
    assert_eq!(invoker.executed(), 1);
}

#[test]
fn test_all_succeed_in_order() {
    logging::init();
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut state = GameState::new(GameConfig::default());
    let mut invoker = CommandsInvoker::new([
        recorded(&log, "a", Ok(())),
        recorded(&log, "b", Ok(())),
        recorded(&log, "c", Ok(())),
    ]);

    invoker.invoke(&mut state).unwrap();

    assert_eq!(*log.borrow(), ["a", "b", "c"]);
    assert_eq!(invoker.status(), InvokerStatus::Completed);
}

#[test]
fn test_keep_applied_with_real_commands() {
    logging::init();
    let mut state = GameState::new(GameConfig::default());
    let invoker = CommandsInvoker::new([
        Command::from(AddPlayers::new(players(2))),
        Command::from(RemovePlayer::new(pid("ghost"))),
    ]);

    let err = invoker.run(&mut state).unwrap_err();

    assert_eq!(err.code(), "player_not_found");
    assert_eq!(state.player_count(), 2);
}

#[test]
fn test_rollback_with_real_commands() {
    logging::init();
    let mut state = GameState::new(GameConfig::default());
    let invoker = CommandsInvoker::new([
        Command::from(AddPlayers::new(players(2))),
        Command::from(RemovePlayer::new(pid("ghost"))),
    ])
    .with_policy(FailurePolicy::Rollback);

    let err = invoker.run(&mut state).unwrap_err();

    assert_eq!(err.command_error(), Some(&CommandError::PlayerNotFound(pid("ghost"))));
    assert_eq!(state.player_count(), 0);
}
