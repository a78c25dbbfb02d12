//! Data transfer objects derived from entities
//!
//! Each entity yields two DTO classes: `<Entity>` carrying every field plus
//! the generated `id`, and `<Entity>CreateInput` carrying the fields a client
//! supplies when creating one.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::generation::utils::to_param_case;
use crate::generation::{Entity, FieldType, GeneratedModule, GenerationError, TemplateSource};
use crate::syntax::{Node, build};
use crate::template::{Substitutions, interpolate};

/// Template every DTO module is generated from
pub const DTO_TEMPLATE: &str = "server/dto.template.ts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DtoProperty {
    pub name: String,
    pub field_type: FieldType,
}

/// A DTO class: its name and members in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DtoDeclaration {
    pub name: String,
    pub properties: Vec<DtoProperty>,
}

impl DtoDeclaration {
    /// Fresh identifier node naming this class
    pub fn id(&self) -> Node {
        build::identifier(&self.name)
    }

    /// Class members as a fragment: `name!: type;` per property
    fn members(&self) -> Node {
        let mut nodes = Vec::with_capacity(self.properties.len() * 4);
        for (index, property) in self.properties.iter().enumerate() {
            let leading = if index == 0 { "" } else { "\n  " };
            nodes.push(build::identifier(&property.name).with_leading(leading));
            nodes.push(build::token("!:"));
            nodes.push(build::identifier(property.field_type.ts_type()).with_leading(" "));
            nodes.push(build::token(";"));
        }
        build::list(nodes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDtos {
    pub entity: DtoDeclaration,
    pub create_input: DtoDeclaration,
}

impl EntityDtos {
    pub fn all(&self) -> [&DtoDeclaration; 2] {
        [&self.entity, &self.create_input]
    }
}

/// DTOs keyed by entity name
pub type Dtos = BTreeMap<String, EntityDtos>;

/// Name of the creation DTO of `entity`
pub fn create_input_name(entity: &str) -> String {
    format!("{entity}CreateInput")
}

/// Derive the DTO pair of one entity
pub fn entity_dtos(entity: &Entity) -> EntityDtos {
    let fields: Vec<DtoProperty> = entity
        .fields
        .iter()
        .map(|field| DtoProperty {
            name: field.name.clone(),
            field_type: field.field_type,
        })
        .collect();

    let mut entity_properties = Vec::with_capacity(fields.len() + 1);
    entity_properties.push(DtoProperty {
        name: "id".to_string(),
        field_type: FieldType::String,
    });
    entity_properties.extend(fields.iter().cloned());

    EntityDtos {
        entity: DtoDeclaration {
            name: entity.name.clone(),
            properties: entity_properties,
        },
        create_input: DtoDeclaration {
            name: create_input_name(&entity.name),
            properties: fields,
        },
    }
}

pub fn create_dtos(entities: &[Entity]) -> Dtos {
    entities
        .iter()
        .map(|entity| (entity.name.clone(), entity_dtos(entity)))
        .collect()
}

/// Output path of every DTO, keyed by DTO name: `<server_root>/<entity>/<Dto>.ts`
pub fn dto_paths(dtos: &Dtos, server_root: &str) -> HashMap<String, String> {
    let root = server_root.trim_end_matches('/');
    dtos.iter()
        .flat_map(|(entity, pair)| {
            let directory = format!("{root}/{}", to_param_case(entity));
            pair.all()
                .map(|dto| (dto.name.clone(), format!("{directory}/{}.ts", dto.name)))
        })
        .collect()
}

/// Generate the module declaring `dto`
pub async fn create_dto_module(
    templates: &dyn TemplateSource,
    dto: &DtoDeclaration,
    module_path: &str,
) -> Result<GeneratedModule, GenerationError> {
    let mut file = templates
        .load(DTO_TEMPLATE)
        .await
        .map_err(|e| GenerationError::template(DTO_TEMPLATE, e))?;

    let substitutions = Substitutions::from([
        ("DTO_NAME".to_string(), dto.id()),
        ("PROPERTIES".to_string(), dto.members()),
    ]);
    interpolate(&mut file, &substitutions).map_err(|e| GenerationError::template(DTO_TEMPLATE, e))?;

    debug!(dto = %dto.name, module_path, "Generated DTO module");
    Ok(GeneratedModule {
        name: dto.name.clone(),
        file,
        module_path: module_path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::EntityField;
    use crate::syntax::print_node;
    use crate::template::parse_template;
    use crate::template::TemplateError;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    struct InlineTemplates;

    #[async_trait]
    impl TemplateSource for InlineTemplates {
        async fn load(&self, name: &str) -> Result<crate::syntax::SyntaxTree, TemplateError> {
            parse_template(
                "declare class DTO_NAME {}\ndeclare const PROPERTIES: never;\n\nexport class DTO_NAME {\n  PROPERTIES\n}\n",
                name,
            )
        }
    }

    fn task() -> Entity {
        Entity::new("Task")
            .with_field(EntityField::new("title", FieldType::String))
            .with_field(EntityField::new("done", FieldType::Boolean))
    }

    #[test]
    fn test_entity_dtos() {
        let dtos = entity_dtos(&task());
        assert_eq!(dtos.entity.name, "Task");
        assert_eq!(dtos.create_input.name, "TaskCreateInput");

        let entity_members: Vec<&str> = dtos.entity.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(entity_members, vec!["id", "title", "done"]);
        let input_members: Vec<&str> = dtos
            .create_input
            .properties
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(input_members, vec!["title", "done"]);
    }

    #[test]
    fn test_members_fragment() {
        let dtos = entity_dtos(&task());
        assert_eq!(
            print_node(&dtos.create_input.members()),
            "title!: string;\n  done!: boolean;"
        );
    }

    #[test]
    fn test_dto_paths() {
        let dtos = create_dtos(&[task(), Entity::new("OrderItem")]);
        let paths = dto_paths(&dtos, "server/src/");
        assert_eq!(paths["Task"], "server/src/task/Task.ts");
        assert_eq!(paths["TaskCreateInput"], "server/src/task/TaskCreateInput.ts");
        assert_eq!(paths["OrderItem"], "server/src/order-item/OrderItem.ts");
    }

    #[tokio::test]
    async fn test_create_dto_module() {
        let dtos = entity_dtos(&task());
        let module = create_dto_module(&InlineTemplates, &dtos.entity, "server/src/task/Task.ts")
            .await
            .unwrap();
        assert_eq!(module.name, "Task");
        assert_eq!(
            module.source(),
            "export class Task {\n  id!: string;\n  title!: string;\n  done!: boolean;\n}\n"
        );
    }
}
