//! Syntax layer - token-tree representation of TypeScript/TSX modules
//!
//! Templates are parsed into a [`SyntaxTree`] of [`Node`]s, rewritten in place
//! by the template engine and printed back to source text.

pub mod build;
pub mod errors;
pub mod node;
pub mod parser;
pub mod printer;
pub mod text;
pub mod visit;

pub use errors::*;
pub use node::*;
pub use parser::{Dialect, parse, parse_with};
pub use printer::{print, print_node};
