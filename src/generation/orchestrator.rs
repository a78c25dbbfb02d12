//! Generation orchestration - coordinates the generation workflow

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::generation::admin::create_create_entity_component;
use crate::generation::dto::{Dtos, create_dto_module, create_dtos, dto_paths};
use crate::generation::rules::validate_model;
use crate::generation::utils::to_param_case;
use crate::generation::{
    AppModel, Entity, GeneratedModule, GenerationError, GenerationResult, TemplateSource,
};

/// Admin directory of every entity, keyed by entity name
pub fn entity_directories(model: &AppModel) -> HashMap<String, String> {
    let root = model.layout.admin_root.trim_end_matches('/');
    model
        .entities
        .iter()
        .map(|entity| {
            (
                entity.name.clone(),
                format!("{root}/{}", to_param_case(&entity.name)),
            )
        })
        .collect()
}

/// Orchestrates the code generation workflow
pub struct GenerationOrchestrator {
    templates: Arc<dyn TemplateSource>,
}

impl GenerationOrchestrator {
    /// Create a new generation orchestrator
    pub fn new(templates: Arc<dyn TemplateSource>) -> Self {
        Self { templates }
    }

    /// Execute the generation workflow
    pub async fn generate(&self, model: &AppModel) -> Result<GenerationResult, GenerationError> {
        // 1. Validate model
        validate_model(model)?;

        debug!(
            "Orchestrator starting generation with {} entities",
            model.entities.len()
        );

        // 2. Build lookup tables shared by every target
        let dtos = create_dtos(&model.entities);
        let entity_dirs = entity_directories(model);
        let dto_paths = dto_paths(&dtos, &model.layout.server_root);

        // 3. Generate per entity; each target loads its own template trees
        let per_entity = try_join_all(
            model
                .entities
                .iter()
                .map(|entity| self.generate_entity(entity, &dtos, &entity_dirs, &dto_paths)),
        )
        .await?;

        // 4. Order by output location so results do not depend on scheduling
        let mut modules: Vec<GeneratedModule> = per_entity.into_iter().flatten().collect();
        modules.sort_by(|a, b| a.module_path.cmp(&b.module_path));

        info!(
            modules = modules.len(),
            "Generated {} modules for {}",
            modules.len(),
            model.name
        );

        Ok(GenerationResult {
            project_name: model.name.clone(),
            modules,
        })
    }

    async fn generate_entity(
        &self,
        entity: &Entity,
        dtos: &Dtos,
        entity_dirs: &HashMap<String, String>,
        dto_paths: &HashMap<String, String>,
    ) -> Result<Vec<GeneratedModule>, GenerationError> {
        info!(entity = %entity.name, "Generating modules");

        let entity_dtos = dtos
            .get(&entity.name)
            .ok_or_else(|| GenerationError::MissingDto(entity.name.clone()))?;

        let mut modules = Vec::with_capacity(3);
        for dto in entity_dtos.all() {
            let path = dto_paths
                .get(&dto.name)
                .ok_or_else(|| GenerationError::MissingDirectory(dto.name.clone()))?;
            modules.push(create_dto_module(self.templates.as_ref(), dto, path).await?);
        }
        modules.push(
            create_create_entity_component(
                self.templates.as_ref(),
                entity,
                dtos,
                entity_dirs,
                dto_paths,
            )
            .await?,
        );

        Ok(modules)
    }
}
