//! File-based application model loader

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::generation::{AppModel, GenerationError, ModelLoader};

/// Loads application models from local YAML or JSON files
pub struct FileModelLoader;

impl FileModelLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse model text, picking the format from the file extension
    pub fn parse(source: &str, content: &str) -> Result<AppModel, GenerationError> {
        if source.ends_with(".json") {
            serde_json::from_str(content).map_err(GenerationError::SerializationError)
        } else if source.ends_with(".yaml") || source.ends_with(".yml") {
            serde_yaml::from_str(content)
                .map_err(|e| GenerationError::LoadError(format!("Failed to parse YAML: {e}")))
        } else {
            // YAML is a superset of JSON, try it first
            serde_yaml::from_str(content)
                .or_else(|_| serde_json::from_str(content))
                .map_err(|e| GenerationError::LoadError(format!("Failed to parse model: {e}")))
        }
    }
}

#[async_trait]
impl ModelLoader for FileModelLoader {
    async fn load(&self, source: &str) -> Result<AppModel, GenerationError> {
        let content = fs::read_to_string(source)
            .await
            .map_err(GenerationError::IoError)?;

        let model = Self::parse(source, &content)?;
        debug!(
            source,
            entities = model.entities.len(),
            "Loaded application model"
        );
        Ok(model)
    }
}

impl Default for FileModelLoader {
    fn default() -> Self {
        Self::new()
    }
}
