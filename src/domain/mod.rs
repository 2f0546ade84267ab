//! Domain layer: entities and command parsing
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod command;
pub mod entities;
pub mod error;

pub use command::{Command, CommandKind};
pub use entities::*;
pub use error::DomainError;

/// Expand `~` and `$VAR` / `${VAR}` in a path-like string.
///
/// Returns the input unchanged if a variable cannot be resolved.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
