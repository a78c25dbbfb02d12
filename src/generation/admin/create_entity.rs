//! "Create entity" admin component
//!
//! Fills the create-entity template with a form that has one labelled
//! `TextField` per property of the entity's create-input DTO, and imports
//! the DTO classes the component is typed with.

use std::collections::HashMap;

use tracing::debug;

use crate::generation::dto::{DtoDeclaration, Dtos};
use crate::generation::sanitizers::sanitize_jsx_text;
use crate::generation::utils::{pluralize, to_param_case};
use crate::generation::{Entity, EntityField, GeneratedModule, GenerationError, TemplateSource};
use crate::syntax::{Node, build};
use crate::template::{
    ImportRequest, Substitutions, add_imports, interpolate, relative_import_path,
};

pub const CREATE_ENTITY_TEMPLATE: &str = "admin/create-entity.template.tsx";

/// Build the `Create<Entity>` component module
///
/// `entity_dirs` maps entity names to the directory their admin components go
/// in; `dto_paths` maps DTO names to the module path declaring them.
pub async fn create_create_entity_component(
    templates: &dyn TemplateSource,
    entity: &Entity,
    dtos: &Dtos,
    entity_dirs: &HashMap<String, String>,
    dto_paths: &HashMap<String, String>,
) -> Result<GeneratedModule, GenerationError> {
    let name = format!("Create{}", entity.name);
    let directory = entity_dirs
        .get(&entity.name)
        .ok_or_else(|| GenerationError::MissingDirectory(entity.name.clone()))?;
    let module_path = format!("{directory}/{name}.tsx");
    let entity_dtos = dtos
        .get(&entity.name)
        .ok_or_else(|| GenerationError::MissingDto(entity.name.clone()))?;

    let imports = entity_dtos
        .all()
        .into_iter()
        .map(|dto| {
            let target = dto_paths
                .get(&dto.name)
                .ok_or_else(|| GenerationError::MissingDirectory(dto.name.clone()))?;
            let source = relative_import_path(&module_path, target)
                .map_err(|e| GenerationError::template(CREATE_ENTITY_TEMPLATE, e))?;
            Ok(ImportRequest::names([dto.name.as_str()], source))
        })
        .collect::<Result<Vec<_>, GenerationError>>()?;

    let substitutions = Substitutions::from([
        ("COMPONENT_NAME".to_string(), build::identifier(&name)),
        (
            "ENTITY_NAME".to_string(),
            build::string_literal(entity.display_name()),
        ),
        (
            "RESOURCE".to_string(),
            build::string_literal(to_param_case(&pluralize(&entity.name))),
        ),
        ("ENTITY".to_string(), entity_dtos.entity.id()),
        ("CREATE_INPUT".to_string(), entity_dtos.create_input.id()),
        (
            "INPUTS".to_string(),
            form_inputs(entity, &entity_dtos.create_input)?,
        ),
    ]);

    let mut file = templates
        .load(CREATE_ENTITY_TEMPLATE)
        .await
        .map_err(|e| GenerationError::template(CREATE_ENTITY_TEMPLATE, e))?;
    interpolate(&mut file, &substitutions)
        .map_err(|e| GenerationError::template(CREATE_ENTITY_TEMPLATE, e))?;
    add_imports(&mut file, &imports)
        .map_err(|e| GenerationError::template(CREATE_ENTITY_TEMPLATE, e))?;

    debug!(component = %name, module_path = %module_path, "Generated create component");
    Ok(GeneratedModule {
        name,
        file,
        module_path,
    })
}

/// One form row per DTO property, in property order
fn form_inputs(entity: &Entity, dto: &DtoDeclaration) -> Result<Node, GenerationError> {
    let fields: HashMap<&str, &EntityField> = entity
        .fields
        .iter()
        .map(|field| (field.name.as_str(), field))
        .collect();

    let rows = dto
        .properties
        .iter()
        .map(|property| {
            let field = fields.get(property.name.as_str()).ok_or_else(|| {
                GenerationError::UnmatchedField {
                    dto: dto.name.clone(),
                    field: property.name.clone(),
                }
            })?;
            Ok(form_row(&property.name, field))
        })
        .collect::<Result<Vec<_>, GenerationError>>()?;

    Ok(build::list(rows))
}

/// `<p><label>Display</label>{" "}<TextField name="field" /></p>`
fn form_row(property: &str, field: &EntityField) -> Node {
    let mut attributes = vec![build::jsx_attribute("name", build::string_literal(property))];
    if let Some(input_type) = field.field_type.input_type() {
        attributes.push(build::jsx_attribute("type", build::string_literal(input_type)));
    }

    build::jsx_element(
        "p",
        vec![],
        vec![
            build::jsx_element(
                "label",
                vec![],
                vec![build::jsx_text(sanitize_jsx_text(field.display_name()))],
            ),
            build::jsx_expression(build::string_literal(" ")),
            build::jsx_self_closing("TextField", attributes),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::FieldType;
    use crate::generation::dto::{DtoProperty, create_dtos};
    use crate::syntax::{SyntaxTree, print_node};
    use crate::template::{TemplateError, parse_template};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str = r#"import * as React from "react";
import { TextField } from "../components/TextField";

declare const COMPONENT_NAME: string;
declare const ENTITY_NAME: string;
declare const RESOURCE: string;
declare const INPUTS: React.ReactElement[];
declare interface ENTITY {}
declare interface CREATE_INPUT {}

export const COMPONENT_NAME = (): React.ReactElement => {
  const save = (data: CREATE_INPUT): Promise<ENTITY> => post("/" + RESOURCE, data);
  return (
    <form>
      <h1>Create {ENTITY_NAME}</h1>
      {INPUTS}
    </form>
  );
};
"#;

    struct InlineTemplates;

    #[async_trait]
    impl TemplateSource for InlineTemplates {
        async fn load(&self, name: &str) -> Result<SyntaxTree, TemplateError> {
            parse_template(TEMPLATE, name)
        }
    }

    fn task() -> Entity {
        Entity::new("Task")
            .with_field(EntityField::new("title", FieldType::String).with_display_name("Title"))
            .with_field(EntityField::new("done", FieldType::Boolean).with_display_name("Done"))
    }

    fn tables(entity: &Entity) -> (Dtos, HashMap<String, String>, HashMap<String, String>) {
        let dtos = create_dtos(std::slice::from_ref(entity));
        let entity_dirs = HashMap::from([(entity.name.clone(), "admin/src/task".to_string())]);
        let dto_paths = crate::generation::dto::dto_paths(&dtos, "admin/src/dto");
        (dtos, entity_dirs, dto_paths)
    }

    #[test]
    fn test_form_row() {
        let field = EntityField::new("done", FieldType::Boolean).with_display_name("Done");
        assert_eq!(
            print_node(&form_row("done", &field)),
            r#"<p><label>Done</label>{" "}<TextField name="done" type="checkbox" /></p>"#
        );
    }

    #[tokio::test]
    async fn test_create_entity_component() {
        let entity = task();
        let (dtos, entity_dirs, dto_paths) = tables(&entity);

        let module = create_create_entity_component(
            &InlineTemplates,
            &entity,
            &dtos,
            &entity_dirs,
            &dto_paths,
        )
        .await
        .unwrap();

        assert_eq!(module.name, "CreateTask");
        assert_eq!(module.module_path, "admin/src/task/CreateTask.tsx");
        assert_eq!(
            module.source(),
            r#"import * as React from "react";
import { TextField } from "../components/TextField";
import { Task } from "../dto/task/Task";
import { TaskCreateInput } from "../dto/task/TaskCreateInput";

export const CreateTask = (): React.ReactElement => {
  const save = (data: TaskCreateInput): Promise<Task> => post("/" + "tasks", data);
  return (
    <form>
      <h1>Create {"Task"}</h1>
      <p><label>Title</label>{" "}<TextField name="title" /></p><p><label>Done</label>{" "}<TextField name="done" type="checkbox" /></p>
    </form>
  );
};
"#
        );
    }

    #[tokio::test]
    async fn test_unmatched_property_is_fatal() {
        let entity = task();
        let (mut dtos, entity_dirs, dto_paths) = tables(&entity);
        if let Some(pair) = dtos.get_mut("Task") {
            pair.create_input.properties.push(DtoProperty {
                name: "owner".to_string(),
                field_type: FieldType::String,
            });
        }

        let err = create_create_entity_component(
            &InlineTemplates,
            &entity,
            &dtos,
            &entity_dirs,
            &dto_paths,
        )
        .await
        .unwrap_err();
        match err {
            GenerationError::UnmatchedField { dto, field } => {
                assert_eq!(dto, "TaskCreateInput");
                assert_eq!(field, "owner");
            }
            other => panic!("Expected UnmatchedField, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_directory() {
        let entity = task();
        let (dtos, _, dto_paths) = tables(&entity);
        let err = create_create_entity_component(
            &InlineTemplates,
            &entity,
            &dtos,
            &HashMap::new(),
            &dto_paths,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GenerationError::MissingDirectory(name) if name == "Task"));
    }
}
