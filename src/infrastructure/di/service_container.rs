//! Service container for dependency injection
//!
//! Wires settings and the filesystem into the command dispatcher.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::application::services::CommandDispatcher;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::{InfraError, InfraResult};

/// Container holding application settings and I/O dependencies.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, fs }
    }

    /// Absolute path of the data file; relative paths resolve against the cwd.
    pub fn data_file(&self) -> InfraResult<PathBuf> {
        let path = &self.settings.data_file;
        if path.is_absolute() {
            return Ok(path.clone());
        }
        let cwd = std::env::current_dir()
            .map_err(|e| InfraError::io("resolve current directory", e))?;
        Ok(cwd.join(path))
    }

    /// Build a dispatcher bound to the configured data file.
    pub fn dispatcher(&self) -> InfraResult<CommandDispatcher> {
        let path = self.data_file()?;
        debug!("dispatcher: data_file={}", path.display());
        Ok(CommandDispatcher::new(path, Arc::clone(&self.fs)))
    }
}
