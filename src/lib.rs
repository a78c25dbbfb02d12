//! entiforge generates server DTO classes and admin "create entity" components
//! from an entity model.
//!
//! Templates are ordinary TypeScript/TSX modules. Placeholders are declared with
//! top-level `declare` statements and replaced by syntax fragments, so the
//! generated code is assembled as trees and printed once.
#![deny(unsafe_code)]

pub mod application;
pub mod generation;
pub mod infrastructure;
pub mod syntax;
pub mod template;
