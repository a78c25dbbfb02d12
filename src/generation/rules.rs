//! Business rules for the generation domain

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::generation::dto::create_input_name;
use crate::generation::utils::to_param_case;
use crate::generation::{AppModel, Entity, GenerationError};

static ENTITY_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").unwrap());
static FIELD_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z][A-Za-z0-9]*$").unwrap());

/// Names the generator emits itself and fields must not reuse
const RESERVED_FIELD_NAMES: &[&str] = &["id"];

/// Validates project name format
pub fn validate_project_name(name: &str) -> Result<(), GenerationError> {
    if name.is_empty() {
        return Err(GenerationError::ValidationError(
            "Project name cannot be empty".to_string(),
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(GenerationError::ValidationError(
            "Project name must contain only alphanumeric characters, dashes, and underscores"
                .to_string(),
        ));
    }

    if name.starts_with('-') || name.starts_with('_') {
        return Err(GenerationError::ValidationError(
            "Project name cannot start with a dash or underscore".to_string(),
        ));
    }

    Ok(())
}

/// Validates a single entity and its fields
pub fn validate_entity(entity: &Entity) -> Result<(), GenerationError> {
    if !ENTITY_NAME_RE.is_match(&entity.name) {
        return Err(GenerationError::ValidationError(format!(
            "Entity name '{}' must start with an uppercase letter and contain only letters and digits",
            entity.name
        )));
    }

    let mut seen = HashSet::new();
    for field in &entity.fields {
        if !FIELD_NAME_RE.is_match(&field.name) {
            return Err(GenerationError::ValidationError(format!(
                "Field name '{}.{}' must start with a lowercase letter and contain only letters and digits",
                entity.name, field.name
            )));
        }
        if RESERVED_FIELD_NAMES.contains(&field.name.as_str()) {
            return Err(GenerationError::ValidationError(format!(
                "Field name '{}.{}' is reserved",
                entity.name, field.name
            )));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(GenerationError::ValidationError(format!(
                "Duplicate field '{}' in entity {}",
                field.name, entity.name
            )));
        }
    }

    Ok(())
}

/// Validates a whole application model before any generation starts
pub fn validate_model(model: &AppModel) -> Result<(), GenerationError> {
    validate_project_name(&model.name)?;

    if model.entities.is_empty() {
        return Err(GenerationError::ValidationError(
            "Model must define at least one entity".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for entity in &model.entities {
        validate_entity(entity)?;
        if !seen.insert(entity.name.as_str()) {
            return Err(GenerationError::ValidationError(format!(
                "Duplicate entity '{}'",
                entity.name
            )));
        }
    }
    validate_derived_names(&model.entities)?;

    for (label, root) in [
        ("admin_root", &model.layout.admin_root),
        ("server_root", &model.layout.server_root),
    ] {
        if root.trim().is_empty() {
            return Err(GenerationError::ValidationError(format!(
                "Layout {label} cannot be empty"
            )));
        }
        if root.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(GenerationError::ValidationError(format!(
                "Layout {label} '{root}' must stay inside the output directory"
            )));
        }
    }

    Ok(())
}

/// Every DTO class and every entity directory must be unique across the
/// model, otherwise two modules would be written to the same path
fn validate_derived_names(entities: &[Entity]) -> Result<(), GenerationError> {
    let mut dto_owners: HashMap<String, &str> = HashMap::new();
    let mut directory_owners: HashMap<String, &str> = HashMap::new();

    for entity in entities {
        for dto in [entity.name.clone(), create_input_name(&entity.name)] {
            if let Some(owner) = dto_owners.insert(dto.clone(), entity.name.as_str()) {
                return Err(GenerationError::ValidationError(format!(
                    "DTO '{dto}' of entity {} collides with a DTO of entity {owner}",
                    entity.name
                )));
            }
        }

        let directory = to_param_case(&entity.name);
        if let Some(owner) = directory_owners.insert(directory.clone(), entity.name.as_str()) {
            return Err(GenerationError::ValidationError(format!(
                "Entities {owner} and {} both map to directory '{directory}'",
                entity.name
            )));
        }
    }

    Ok(())
}
