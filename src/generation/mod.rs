//! Generation domain module - orchestrates code generation workflow
//!
//! This module turns an application model into generated modules: it
//! validates the model, derives DTOs, and fills templates for every entity.

pub mod admin;
pub mod dto;
pub mod errors;
pub mod orchestrator;
pub mod rules;
pub mod sanitizers;
pub mod traits;
pub mod types;
pub mod utils;

pub use errors::*;
pub use orchestrator::*;
pub use traits::*;
pub use types::*;
