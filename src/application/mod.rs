//! Application layer - orchestrates use cases and coordinates between domains

pub mod errors;
pub mod generate_app;
pub mod traits;

pub use errors::*;
pub use generate_app::*;
pub use traits::*;
