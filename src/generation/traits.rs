//! Port interfaces for the generation domain

use crate::generation::{AppModel, GenerationError};
use crate::syntax::SyntaxTree;
use crate::template::TemplateError;
use async_trait::async_trait;

/// Supplies parsed templates by logical name (`admin/create-entity.template.tsx`)
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Load a template; every call returns a fresh, independent tree
    async fn load(&self, name: &str) -> Result<SyntaxTree, TemplateError>;
}

/// Loads application models
#[async_trait]
pub trait ModelLoader: Send + Sync {
    /// Load a model from a source (file path)
    async fn load(&self, source: &str) -> Result<AppModel, GenerationError>;
}
