//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{DomainError, EmployeeId};

/// Application errors wrap domain errors and add storage-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("invalid path or missing data file: {0}")]
    MissingStorage(PathBuf),

    #[error("incorrect data format in {path}: {reason}")]
    MalformedData { path: PathBuf, reason: String },

    #[error("employee with Id {0} not found")]
    RecordNotFound(EmployeeId),

    #[error("no Id left after {0}")]
    IdsExhausted(EmployeeId),

    #[error("failed to save employees to {path}")]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    /// Create a persistence error for a failed write of `path`.
    pub fn persistence(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::PersistenceFailure {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
