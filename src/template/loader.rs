//! Template loading

use std::path::Path;

use tokio::fs;
use tracing::debug;

use super::TemplateError;
use crate::syntax::{Dialect, SyntaxTree, parse_with};

/// Read and parse a template file into a fresh tree
///
/// Every call yields an independent tree, so callers may mutate the result
/// freely.
pub async fn read_file(path: impl AsRef<Path>) -> Result<SyntaxTree, TemplateError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TemplateError::not_found(path.display().to_string())
        } else {
            TemplateError::IoError(e)
        }
    })?;
    parse_template(&source, &path.display().to_string())
}

/// Parse template text, attributing failures to `template`
///
/// The grammar follows the template's extension: `.ts` templates are plain
/// TypeScript, everything else is TSX.
pub fn parse_template(source: &str, template: &str) -> Result<SyntaxTree, TemplateError> {
    let dialect = Dialect::from_path(template);
    debug!(template, ?dialect, bytes = source.len(), "Parsing template");
    parse_with(source, dialect).map_err(|source| TemplateError::Parse {
        template: template.to_string(),
        source,
    })
}
