//! Schema representation of the model's function-calling convention.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::node::SchemaKind;

/// Parameter type names as the function-calling convention spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl From<SchemaKind> for TargetType {
    fn from(kind: SchemaKind) -> Self {
        match kind {
            SchemaKind::String => TargetType::String,
            SchemaKind::Integer => TargetType::Integer,
            SchemaKind::Number => TargetType::Number,
            SchemaKind::Boolean => TargetType::Boolean,
            SchemaKind::Array => TargetType::Array,
            SchemaKind::Object => TargetType::Object,
        }
    }
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::String => "STRING",
            TargetType::Integer => "INTEGER",
            TargetType::Number => "NUMBER",
            TargetType::Boolean => "BOOLEAN",
            TargetType::Array => "ARRAY",
            TargetType::Object => "OBJECT",
        }
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A translated schema node.
///
/// `properties` is always present for `OBJECT` (possibly empty) and absent
/// otherwise. `required` is omitted from the serialized form when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSchema {
    #[serde(rename = "type")]
    pub schema_type: TargetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, TargetSchema>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<TargetSchema>>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
}

impl TargetSchema {
    pub fn new(schema_type: TargetType) -> Self {
        let properties = (schema_type == TargetType::Object).then(BTreeMap::new);
        Self {
            schema_type,
            description: None,
            properties,
            required: Vec::new(),
            items: None,
            enum_values: None,
        }
    }

    /// `{type: OBJECT, properties: {}}`, the fallback for unusable schemas.
    pub fn empty_object() -> Self {
        Self::new(TargetType::Object)
    }

    pub fn property(&self, name: &str) -> Option<&TargetSchema> {
        self.properties.as_ref().and_then(|p| p.get(name))
    }

    pub fn property_count(&self) -> usize {
        self.properties.as_ref().map_or(0, BTreeMap::len)
    }
}

/// One callable function as advertised to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: TargetSchema,
}

impl FunctionDeclaration {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: TargetSchema,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}
