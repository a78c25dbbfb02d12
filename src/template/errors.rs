//! Error types for the template engine

use crate::syntax::SyntaxError;
use thiserror::Error;

/// Errors raised while loading, interpolating or completing a template
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Template source is not valid TypeScript/TSX
    #[error("Failed to parse template {template}: {source}")]
    Parse {
        template: String,
        #[source]
        source: SyntaxError,
    },

    /// Template declares a placeholder the caller supplied no value for
    #[error("No substitution supplied for placeholder {placeholder}")]
    MissingSubstitution { placeholder: String },

    /// Fragment shape cannot stand where the placeholder occurs
    #[error("Placeholder {placeholder} cannot be substituted here: {reason}")]
    IncompatibleFragment { placeholder: String, reason: String },

    /// Logical module path is malformed
    #[error("Invalid module path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// Requested import would shadow a binding from another declaration
    #[error(
        "Cannot import '{local}' from '{requested}': name is already imported from '{existing}'"
    )]
    ConflictingImport {
        local: String,
        existing: String,
        requested: String,
    },

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TemplateError {
    pub fn not_found<S: Into<String>>(template: S) -> Self {
        Self::TemplateNotFound(template.into())
    }

    pub fn invalid_path<P: Into<String>, R: Into<String>>(path: P, reason: R) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
