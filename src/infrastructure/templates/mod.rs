//! Template repository implementations

pub mod embedded_repository;
pub mod filesystem_loader;

pub use embedded_repository::*;
pub use filesystem_loader::*;
