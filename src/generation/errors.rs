//! Error types for the generation domain

use crate::template::TemplateError;
use thiserror::Error;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Template {template} failed: {source}")]
    TemplateError {
        template: String,
        #[source]
        source: TemplateError,
    },

    /// A DTO member has no entity field of the same name
    #[error("DTO {dto} declares property {field} which entity has no field for")]
    UnmatchedField { dto: String, field: String },

    #[error("No output location registered for {0}")]
    MissingDirectory(String),

    #[error("No DTOs derived for entity {0}")]
    MissingDto(String),

    #[error("Model loading error: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl GenerationError {
    /// Attribute a template failure to the template it came from
    pub fn template<S: Into<String>>(template: S, source: TemplateError) -> Self {
        Self::TemplateError {
            template: template.into(),
            source,
        }
    }
}
