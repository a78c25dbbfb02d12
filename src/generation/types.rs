//! Core types for the generation domain

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::generation::GenerationError;
use crate::syntax::SyntaxTree;

/// Scalar type of an entity field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    String,
    #[serde(alias = "bool")]
    Boolean,
    #[serde(alias = "int", alias = "integer", alias = "float")]
    Number,
    #[serde(alias = "datetime")]
    Date,
}

impl FieldType {
    /// TypeScript type used for DTO members
    pub fn ts_type(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Boolean => "boolean",
            FieldType::Number => "number",
            FieldType::Date => "Date",
        }
    }

    /// HTML input type for form fields; plain text needs none
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldType::String => None,
            FieldType::Boolean => Some("checkbox"),
            FieldType::Number => Some("number"),
            FieldType::Date => Some("date"),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::Number => write!(f, "number"),
            FieldType::Date => write!(f, "date"),
        }
    }
}

impl FromStr for FieldType {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" => Ok(FieldType::String),
            "boolean" | "bool" => Ok(FieldType::Boolean),
            "number" | "int" | "integer" | "float" => Ok(FieldType::Number),
            "date" | "datetime" => Ok(FieldType::Date),
            _ => Err(GenerationError::ValidationError(format!(
                "Unknown field type: {s}"
            ))),
        }
    }
}

/// A named, typed attribute of an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityField {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
}

impl EntityField {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            field_type,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Label shown to users; defaults to the field name
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// A user-defined data model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub fields: Vec<EntityField>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            fields: Vec::new(),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_field(mut self, field: EntityField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// Where generated modules land, relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default = "default_admin_root")]
    pub admin_root: String,
    #[serde(default = "default_server_root")]
    pub server_root: String,
}

fn default_admin_root() -> String {
    "admin/src".to_string()
}

fn default_server_root() -> String {
    "server/src".to_string()
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            admin_root: default_admin_root(),
            server_root: default_server_root(),
        }
    }
}

/// Application model file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppModel {
    pub name: String,
    #[serde(default)]
    pub layout: Layout,
    pub entities: Vec<Entity>,
}

/// A generated source module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    /// Exported component or class name
    pub name: String,
    pub file: SyntaxTree,
    /// Logical path of the module, `/` separated
    pub module_path: String,
}

impl GeneratedModule {
    /// Source text of the module
    pub fn source(&self) -> String {
        self.file.to_source()
    }
}

/// Result of generation
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub project_name: String,
    /// Modules ordered by module path
    pub modules: Vec<GeneratedModule>,
}
