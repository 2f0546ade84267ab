//! Process-level errors around the record store

use thiserror::Error;

use crate::application::ApplicationError;

/// Store and dispatch failures plus I/O that happens while wiring them up,
/// such as resolving a relative data file against the working directory.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

pub type InfraResult<T> = Result<T, InfraError>;
