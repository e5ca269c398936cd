//! Batch execution.
//!
//! A [`CommandsInvoker`] takes an ordered batch of commands and one game
//! state, runs the commands strictly in sequence and yields a single
//! terminal result for the whole batch.
//!
//! ## State machine
//!
//! `Idle -> Running -> Completed`, or `Running -> Failed` on the first
//! command error. Commands after the failing one never execute.
//!
//! ## Partial failure
//!
//! What survives a failure is an explicit [`FailurePolicy`]:
//! - `KeepApplied` (default): earlier commands' effects remain; the caller
//!   reconciles by inspecting the state.
//! - `Rollback`: the state is restored to its pre-batch snapshot. Snapshots
//!   are cheap because `GameState` is built on persistent collections.

mod batch;
mod error;

pub use batch::{CommandBatch, CommandsInvoker, FailurePolicy, InvokerStatus};
pub use error::InvokeError;
