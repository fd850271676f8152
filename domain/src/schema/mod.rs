//! Schema model
//!
//! Two sides of the translation live here:
//!
//! - [`SchemaNode`]: the foreign tool's parameter schema, parsed leniently
//! - [`TargetSchema`] / [`FunctionDeclaration`]: what the model is shown
//!
//! The translation itself is a port in the application layer.

pub mod node;
pub mod target;

pub use node::{MAX_SCHEMA_DEPTH, ParsedSchema, SchemaIssue, SchemaKind, SchemaNode};
pub use target::{FunctionDeclaration, TargetSchema, TargetType};
