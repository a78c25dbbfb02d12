//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::application::{ApplicationError, OutputService, ValidationError};
use crate::generation::GeneratedModule;

/// Output service that writes modules to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

/// Destination of a module, refusing paths that leave `output_dir`
fn destination(output_dir: &Path, module_path: &str) -> Result<PathBuf, ApplicationError> {
    let relative = Path::new(module_path);
    let escapes = relative.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if module_path.is_empty() || escapes {
        return Err(ValidationError::InvalidModulePath(module_path.to_string()).into());
    }
    Ok(output_dir.join(relative))
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_modules(
        &self,
        output_dir: &Path,
        modules: &[GeneratedModule],
    ) -> Result<Vec<PathBuf>, ApplicationError> {
        let mut written = Vec::with_capacity(modules.len());
        for module in modules {
            let path = destination(output_dir, &module.module_path)?;

            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    ApplicationError::OutputError(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }

            let mut file = fs::File::create(&path).await.map_err(|e| {
                ApplicationError::OutputError(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;

            file.write_all(module.source().as_bytes())
                .await
                .map_err(|e| {
                    ApplicationError::OutputError(format!(
                        "Failed to write file {}: {}",
                        path.display(),
                        e
                    ))
                })?;

            file.flush().await.map_err(|e| {
                ApplicationError::OutputError(format!(
                    "Failed to flush file {}: {}",
                    path.display(),
                    e
                ))
            })?;

            debug!(module = %module.name, path = %path.display(), "Wrote module");
            written.push(path);
        }

        Ok(written)
    }

    async fn ensure_directory(&self, path: &Path) -> Result<(), ApplicationError> {
        fs::create_dir_all(path).await.map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(())
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
