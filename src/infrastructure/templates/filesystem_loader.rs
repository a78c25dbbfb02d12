//! Filesystem-based template loader
//!
//! Loads templates from a directory on the filesystem, typically specified
//! via the --template-dir CLI flag. The directory mirrors the embedded
//! layout; templates it does not contain come from the embedded set.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::EmbeddedTemplateRepository;
use crate::generation::TemplateSource;
use crate::syntax::SyntaxTree;
use crate::template::{TemplateError, read_file};

/// Template loader reading from a directory, falling back to embedded templates
pub struct FileSystemTemplateLoader {
    root: PathBuf,
    fallback: EmbeddedTemplateRepository,
}

impl FileSystemTemplateLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fallback: EmbeddedTemplateRepository::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, TemplateError> {
        if name.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(TemplateError::invalid_path(
                name,
                "template names must stay inside the template directory",
            ));
        }
        Ok(self.root.join(name))
    }
}

#[async_trait]
impl TemplateSource for FileSystemTemplateLoader {
    async fn load(&self, name: &str) -> Result<SyntaxTree, TemplateError> {
        let path = self.resolve(name)?;
        match read_file(&path).await {
            Err(TemplateError::TemplateNotFound(_)) => {
                debug!(template = name, root = %self.root.display(), "Template not overridden, using embedded");
                self.fallback.load(name).await
            }
            result => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::dto::DTO_TEMPLATE;
    use tempfile::TempDir;
    use tokio::fs;

    #[tokio::test]
    async fn test_override_takes_precedence() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("server")).await.unwrap();
        fs::write(
            dir.path().join(DTO_TEMPLATE),
            "declare class DTO_NAME {}\ndeclare const PROPERTIES: never;\nexport interface DTO_NAME { PROPERTIES }\n",
        )
        .await
        .unwrap();

        let loader = FileSystemTemplateLoader::new(dir.path());
        let tree = loader.load(DTO_TEMPLATE).await.unwrap();
        assert!(tree.to_source().contains("export interface DTO_NAME"));
    }

    #[tokio::test]
    async fn test_falls_back_to_embedded() {
        let dir = TempDir::new().unwrap();
        let loader = FileSystemTemplateLoader::new(dir.path());
        let tree = loader.load(DTO_TEMPLATE).await.unwrap();
        assert_eq!(tree.declarations().count(), 2);
    }

    #[tokio::test]
    async fn test_broken_override_reports_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("server")).await.unwrap();
        fs::write(dir.path().join(DTO_TEMPLATE), "export class X {\n")
            .await
            .unwrap();

        let loader = FileSystemTemplateLoader::new(dir.path());
        let err = loader.load(DTO_TEMPLATE).await.unwrap_err();
        assert!(matches!(err, TemplateError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_rejects_escaping_names() {
        let dir = TempDir::new().unwrap();
        let loader = FileSystemTemplateLoader::new(dir.path());
        let err = loader.load("../secrets.ts").await.unwrap_err();
        assert!(matches!(err, TemplateError::InvalidPath { .. }));
    }
}
