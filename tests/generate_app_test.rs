//! End-to-end generation against the embedded templates

use std::sync::Arc;

use entiforge::generation::{
    AppModel, Entity, EntityField, FieldType, GeneratedModule, GenerationError,
    GenerationOrchestrator, Layout,
};
use entiforge::infrastructure::EmbeddedTemplateRepository;
use entiforge::syntax::parse;
use pretty_assertions::assert_eq;

fn todo_model() -> AppModel {
    AppModel {
        name: "todo".to_string(),
        layout: Layout::default(),
        entities: vec![
            Entity::new("Task")
                .with_field(EntityField::new("title", FieldType::String).with_display_name("Title"))
                .with_field(EntityField::new("done", FieldType::Boolean).with_display_name("Done")),
        ],
    }
}

fn orchestrator() -> GenerationOrchestrator {
    GenerationOrchestrator::new(Arc::new(EmbeddedTemplateRepository::new()))
}

fn find<'a>(modules: &'a [GeneratedModule], name: &str) -> &'a GeneratedModule {
    modules
        .iter()
        .find(|module| module.name == name)
        .unwrap_or_else(|| panic!("module {name} not generated"))
}

#[tokio::test]
async fn test_generates_dtos_and_create_component() {
    let result = orchestrator().generate(&todo_model()).await.unwrap();

    assert_eq!(result.project_name, "todo");
    let paths: Vec<&str> = result
        .modules
        .iter()
        .map(|module| module.module_path.as_str())
        .collect();
    assert_eq!(
        paths,
        vec![
            "admin/src/task/CreateTask.tsx",
            "server/src/task/Task.ts",
            "server/src/task/TaskCreateInput.ts",
        ]
    );

    assert_eq!(
        find(&result.modules, "Task").source(),
        "export class Task {\n  id!: string;\n  title!: string;\n  done!: boolean;\n}\n"
    );
    assert_eq!(
        find(&result.modules, "TaskCreateInput").source(),
        "export class TaskCreateInput {\n  title!: string;\n  done!: boolean;\n}\n"
    );
}

#[tokio::test]
async fn test_create_component_content() {
    let result = orchestrator().generate(&todo_model()).await.unwrap();
    let component = find(&result.modules, "CreateTask");
    let source = component.source();

    assert!(source.contains("export const CreateTask = (): React.ReactElement => {"));
    assert!(source.contains(r#"<h1>Create {"Task"}</h1>"#));
    assert!(source.contains(r#"api.post("/" + "tasks", values)"#));
    assert!(source.contains("useMutation<\n    Task,\n    AxiosError,\n    TaskCreateInput\n  >"));

    // One row per field, in field order
    let title = source
        .find(r#"<p><label>Title</label>{" "}<TextField name="title" /></p>"#)
        .expect("title row");
    let done = source
        .find(r#"<p><label>Done</label>{" "}<TextField name="done" type="checkbox" /></p>"#)
        .expect("done row");
    assert!(title < done);
    assert_eq!(source.matches("<p><label>").count(), 2);

    // One import per DTO module, after the template's own imports
    let task_import = r#"import { Task } from "../../../server/src/task/Task";"#;
    let input_import =
        r#"import { TaskCreateInput } from "../../../server/src/task/TaskCreateInput";"#;
    assert_eq!(source.matches(task_import).count(), 1);
    assert_eq!(source.matches(input_import).count(), 1);
    let last_template_import = source
        .find(r#"import { TextField } from "../components/TextField";"#)
        .expect("template import");
    assert!(last_template_import < source.find(task_import).unwrap());

    // No placeholder survives
    assert!(!source.contains("declare "));
    for placeholder in [
        "COMPONENT_NAME",
        "ENTITY_NAME",
        "RESOURCE",
        "INPUTS",
        "CREATE_INPUT",
    ] {
        assert!(!source.contains(placeholder), "{placeholder} left in output");
    }

    // Output is itself a parseable module
    let reparsed = parse(&source).expect("generated component parses");
    assert_eq!(reparsed.to_source(), source);
}

#[tokio::test]
async fn test_generation_is_deterministic() {
    let mut model = todo_model();
    model.entities.push(
        Entity::new("Category")
            .with_display_name("Product category")
            .with_field(EntityField::new("label", FieldType::String))
            .with_field(EntityField::new("createdAt", FieldType::Date)),
    );

    let first = orchestrator().generate(&model).await.unwrap();
    let second = orchestrator().generate(&model).await.unwrap();

    let render = |modules: &[GeneratedModule]| -> Vec<(String, String)> {
        modules
            .iter()
            .map(|module| (module.module_path.clone(), module.source()))
            .collect()
    };
    assert_eq!(render(&first.modules), render(&second.modules));
    assert_eq!(first.modules.len(), 6);

    let category = find(&first.modules, "CreateCategory").source();
    assert!(category.contains(r#"<h1>Create {"Product category"}</h1>"#));
    assert!(category.contains(r#""/" + "categories""#));
    assert!(category.contains(r#"<TextField name="createdAt" type="date" />"#));
}

#[tokio::test]
async fn test_invalid_model_is_rejected() {
    let mut model = todo_model();
    model.entities[0]
        .fields
        .push(EntityField::new("title", FieldType::String));

    let err = orchestrator().generate(&model).await.unwrap_err();
    assert!(matches!(err, GenerationError::ValidationError(_)));
}

#[tokio::test]
async fn test_entities_with_colliding_dto_names_are_rejected() {
    let mut model = todo_model();
    model.entities.push(
        Entity::new("TaskCreateInput").with_field(EntityField::new("note", FieldType::String)),
    );

    let err = orchestrator().generate(&model).await.unwrap_err();
    match err {
        GenerationError::ValidationError(message) => assert!(message.contains("TaskCreateInput")),
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}
