//! Admin UI components generated per entity

pub mod create_entity;

pub use create_entity::{CREATE_ENTITY_TEMPLATE, create_create_entity_component};
