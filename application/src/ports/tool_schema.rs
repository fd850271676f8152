//! Schema translation port.
//!
//! Separates "what a tool accepts" (domain [`SchemaNode`]) from "how the model
//! API wants it spelled" (infrastructure). The catalog builder only sees
//! this trait.

use bridge_domain::schema::{FunctionDeclaration, SchemaNode, TargetSchema};

/// Port for translating parsed tool schemas into the function-calling format.
///
/// Translation never fails: the parsed tree is already well-formed, and
/// anything the lenient parser could not use was dropped before reaching here.
pub trait ToolSchemaPort: Send + Sync {
    /// Translate one schema node, recursively.
    fn translate(&self, node: &SchemaNode) -> TargetSchema;

    /// Build the declaration advertised to the model.
    fn declaration(&self, name: &str, description: &str, parameters: &SchemaNode) -> FunctionDeclaration {
        FunctionDeclaration::new(name, description, self.translate(parameters))
    }
}
