//! Output service implementations

pub mod filesystem_output;

pub use filesystem_output::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, OutputService};
    use crate::generation::GeneratedModule;
    use crate::syntax::parse;
    use tempfile::TempDir;

    fn module(name: &str, module_path: &str, source: &str) -> GeneratedModule {
        GeneratedModule {
            name: name.to_string(),
            file: parse(source).expect("Failed to parse module"),
            module_path: module_path.to_string(),
        }
    }

    #[tokio::test]
    async fn test_filesystem_output_write_modules() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();

        let modules = vec![
            module(
                "Task",
                "server/src/task/Task.ts",
                "export class Task {\n  id!: string;\n}\n",
            ),
            module(
                "CreateTask",
                "admin/src/task/CreateTask.tsx",
                "export const CreateTask = () => <form />;\n",
            ),
        ];

        let written = output_service
            .write_modules(temp_dir.path(), &modules)
            .await
            .expect("Failed to write modules");
        assert_eq!(
            written,
            vec![
                temp_dir.path().join("server/src/task/Task.ts"),
                temp_dir.path().join("admin/src/task/CreateTask.tsx"),
            ]
        );

        let content = std::fs::read_to_string(temp_dir.path().join("server/src/task/Task.ts"))
            .expect("Failed to read Task.ts");
        assert_eq!(content, "export class Task {\n  id!: string;\n}\n");
    }

    #[tokio::test]
    async fn test_filesystem_output_rejects_escaping_paths() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();

        for path in ["../outside.ts", "/etc/outside.ts", ""] {
            let result = output_service
                .write_modules(temp_dir.path(), &[module("X", path, "export {};\n")])
                .await;
            assert!(
                matches!(result, Err(ApplicationError::ValidationError(_))),
                "{path} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_filesystem_output_ensure_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();

        let nested_path = temp_dir.path().join("deeply/nested/directory");

        let result = output_service.ensure_directory(&nested_path).await;
        assert!(result.is_ok());
        assert!(nested_path.is_dir());
    }
}
