//! Domain error types

use thiserror::Error;

/// Errors raised while parsing a foreign schema fragment.
///
/// These never escape a catalog build: a failing property is dropped and a
/// failing top-level schema is replaced by an empty object schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Schema must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Schema nesting exceeds {max_depth} levels")]
    TooDeep { max_depth: usize },
}

/// Reasons a tool is left out of the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Tool name '{name}' has no characters usable in a function identifier")]
    EmptyIdentifier { name: String },
}

/// Name of a JSON value's type, for diagnostics.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
