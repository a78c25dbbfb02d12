//! Use case for generating an application from a model file

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::application::{ApplicationError, OutputService, ValidationError};
use crate::generation::{GenerationOrchestrator, ModelLoader};

/// Request to generate an application
#[derive(Debug, Clone)]
pub struct GenerateAppRequest {
    /// Path of the model file (YAML or JSON)
    pub model_path: String,
    pub output_dir: PathBuf,
    /// Generate in memory only, writing nothing
    pub dry_run: bool,
}

impl GenerateAppRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model_path.trim().is_empty() {
            return Err(ValidationError::MissingField("model path".to_string()));
        }
        if !self.dry_run && self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingField("output directory".to_string()));
        }
        Ok(())
    }
}

/// Response from generating an application
#[derive(Debug, Clone)]
pub struct GenerateAppResponse {
    pub project_name: String,
    /// Logical paths of all generated modules, sorted
    pub module_paths: Vec<String>,
    /// Files written; empty for a dry run
    pub written: Vec<PathBuf>,
    pub output_path: PathBuf,
}

/// Use case for generating an application
pub struct GenerateAppUseCase {
    model_loader: Arc<dyn ModelLoader>,
    generation_orchestrator: Arc<GenerationOrchestrator>,
    output_service: Arc<dyn OutputService>,
}

impl GenerateAppUseCase {
    pub fn new(
        model_loader: Arc<dyn ModelLoader>,
        generation_orchestrator: Arc<GenerationOrchestrator>,
        output_service: Arc<dyn OutputService>,
    ) -> Self {
        Self {
            model_loader,
            generation_orchestrator,
            output_service,
        }
    }

    pub async fn execute(
        &self,
        request: GenerateAppRequest,
    ) -> Result<GenerateAppResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;

        // 2. Load model
        let model = self.model_loader.load(&request.model_path).await?;

        // 3. Generate modules
        let result = self.generation_orchestrator.generate(&model).await?;
        let module_paths: Vec<String> = result
            .modules
            .iter()
            .map(|module| module.module_path.clone())
            .collect();

        if request.dry_run {
            info!(modules = module_paths.len(), "Dry run, nothing written");
            return Ok(GenerateAppResponse {
                project_name: result.project_name,
                module_paths,
                written: Vec::new(),
                output_path: request.output_dir,
            });
        }

        // 4. Write modules under the output directory
        self.output_service
            .ensure_directory(&request.output_dir)
            .await?;
        let written = self
            .output_service
            .write_modules(&request.output_dir, &result.modules)
            .await?;

        Ok(GenerateAppResponse {
            project_name: result.project_name,
            module_paths,
            written,
            output_path: request.output_dir,
        })
    }
}
