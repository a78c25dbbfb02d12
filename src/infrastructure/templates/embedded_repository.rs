//! Embedded template repository implementation

use async_trait::async_trait;
use rust_embed::RustEmbed;
use tracing::debug;

use crate::generation::TemplateSource;
use crate::syntax::SyntaxTree;
use crate::template::{TemplateError, parse_template};

/// Container for all templates embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Template repository backed by embedded templates
pub struct EmbeddedTemplateRepository;

impl EmbeddedTemplateRepository {
    pub fn new() -> Self {
        Self
    }

    /// Logical names of every embedded template, sorted
    pub fn list_templates(&self) -> Vec<String> {
        let mut names: Vec<String> = EmbeddedTemplates::iter()
            .map(|path| path.into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn has_template(&self, name: &str) -> bool {
        EmbeddedTemplates::get(name).is_some()
    }

    /// Raw text of an embedded template
    pub fn template_source(&self, name: &str) -> Result<String, TemplateError> {
        let file = EmbeddedTemplates::get(name).ok_or_else(|| TemplateError::not_found(name))?;
        String::from_utf8(file.data.into_owned()).map_err(|e| {
            TemplateError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }
}

impl Default for EmbeddedTemplateRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TemplateSource for EmbeddedTemplateRepository {
    async fn load(&self, name: &str) -> Result<SyntaxTree, TemplateError> {
        debug!(template = name, "Loading embedded template");
        let source = self.template_source(name)?;
        parse_template(&source, name)
    }
}
