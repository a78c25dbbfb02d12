//! Port interfaces for the application layer

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::application::ApplicationError;
use crate::generation::GeneratedModule;

/// Service for writing generated modules to the output destination
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Print every module and write it under `output_dir` at its module path,
    /// returning the written file paths in module order
    async fn write_modules(
        &self,
        output_dir: &Path,
        modules: &[GeneratedModule],
    ) -> Result<Vec<PathBuf>, ApplicationError>;

    /// Ensure a directory exists
    async fn ensure_directory(&self, path: &Path) -> Result<(), ApplicationError>;
}
