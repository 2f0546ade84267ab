//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed command input.
/// These are independent of storage concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("no arguments provided")]
    NoArguments,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid arguments for {command}: {reason}")]
    InvalidArguments {
        command: &'static str,
        reason: String,
    },
}
