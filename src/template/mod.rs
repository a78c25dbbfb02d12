//! Template engine
//!
//! Loads TypeScript/TSX templates, fills their placeholders with syntax
//! fragments and completes the result with the imports it needs.

pub mod errors;
pub mod imports;
pub mod interpolate;
pub mod loader;
pub mod paths;

pub use errors::TemplateError;
pub use imports::{ImportRequest, ImportSymbol, add_imports};
pub use interpolate::{Substitutions, interpolate};
pub use loader::{parse_template, read_file};
pub use paths::relative_import_path;
