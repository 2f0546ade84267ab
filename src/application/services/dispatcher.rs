//! Command dispatch
//!
//! Parses one raw token list and runs the matching store operation.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::application::services::{EmployeeStore, RecordStore};
use crate::application::ApplicationResult;
use crate::domain::{Command, Employee};
use crate::infrastructure::traits::FileSystem;

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Added(Employee),
    Updated(Employee),
    Found(Employee),
    Deleted(Employee),
    Listed(Vec<Employee>),
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added(e) => write!(
                f,
                "Employee {} was added with Id {}",
                e.full_name(),
                e.id
            ),
            Self::Updated(e) => write!(f, "Employee updated: {}", e),
            Self::Found(e) => write!(f, "{}", e),
            Self::Deleted(e) => write!(f, "Employee with Id {} was deleted", e.id),
            Self::Listed(employees) if employees.is_empty() => f.write_str("No employees"),
            Self::Listed(employees) => {
                let lines: Vec<String> = employees.iter().map(|e| e.to_string()).collect();
                f.write_str(&lines.join("\n"))
            }
        }
    }
}

/// Translates token lists into store calls.
pub struct CommandDispatcher<S = RecordStore> {
    store: S,
}

impl CommandDispatcher<RecordStore> {
    /// Create a dispatcher over a JSON record store at `path`.
    ///
    /// The store loads the file eagerly.
    pub fn new(path: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self::with_store(RecordStore::open(path, fs))
    }
}

impl<S: EmployeeStore> CommandDispatcher<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parse `tokens` and execute the command they name.
    ///
    /// Parsing errors are returned before the store is touched.
    pub fn execute<T: AsRef<str>>(&mut self, tokens: &[T]) -> ApplicationResult<CommandOutcome> {
        let command = Command::parse(tokens)?;
        debug!("execute: command={}", command.kind());

        let outcome = match command {
            Command::Add {
                first_name,
                last_name,
                salary,
            } => CommandOutcome::Added(self.store.add(first_name, last_name, salary)?),
            Command::Update { id, changes } => {
                CommandOutcome::Updated(self.store.update(id, &changes)?)
            }
            Command::Get { id } => CommandOutcome::Found(self.store.get(id)?.clone()),
            Command::Delete { id } => CommandOutcome::Deleted(self.store.delete(id)?),
            Command::List => CommandOutcome::Listed(self.store.list().to_vec()),
        };
        Ok(outcome)
    }
}
