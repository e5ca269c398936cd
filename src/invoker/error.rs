//! Batch-level failures.

use thiserror::Error;

use crate::commands::CommandError;

/// Why a batch did not complete.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvokeError {
    /// The command at `index` failed; nothing after it ran.
    #[error("command {index} ({command}) failed: {source}")]
    CommandFailed {
        index: usize,
        command: &'static str,
        #[source]
        source: CommandError,
    },

    /// The invoker already ran its batch.
    #[error("invoker has already run its batch")]
    AlreadyInvoked,
}

impl InvokeError {
    /// Stable machine-readable code. For command failures this is the
    /// failing command's code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            InvokeError::CommandFailed { source, .. } => source.code(),
            InvokeError::AlreadyInvoked => "already_invoked",
        }
    }

    /// The failing command's error, if a command failed.
    #[must_use]
    pub fn command_error(&self) -> Option<&CommandError> {
        match self {
            InvokeError::CommandFailed { source, .. } => Some(source),
            InvokeError::AlreadyInvoked => None,
        }
    }
}
