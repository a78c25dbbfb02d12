//! Infrastructure layer - concrete implementations of domain ports

pub mod model;
pub mod output;
pub mod templates;

pub use model::*;
pub use output::*;
pub use templates::*;
