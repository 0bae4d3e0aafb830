use thiserror::Error;

use crate::session::status::StatusKey;

/// Misuse of [`crate::session::SessionState`]. The mutation is rejected and
/// previously committed state is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("target '{0}' has already been discovered")]
    DuplicateTarget(String),

    #[error("target name must not be blank")]
    InvalidName,

    #[error("unknown status key '{0}'")]
    UnknownStatusKey(String),

    #[error("status field '{key}' expects {expected}")]
    TypeMismatch { key: StatusKey, expected: &'static str },

    #[error("status field '{0}' is missing a value")]
    MissingKey(StatusKey),
}

/// User-facing command failures. The Display text is what gets printed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Target required. Usage: {usage}")]
    MissingArgument { usage: &'static str },

    #[error("Target not found. Run 'scan' first.")]
    TargetNotFound(String),

    #[error("Command not recognized. Type 'help' for available commands.")]
    UnrecognizedCommand(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
