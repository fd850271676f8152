//! Tool domain entities

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::SchemaNode;

/// Argument map of a function call.
pub type Arguments = serde_json::Map<String, Value>;

/// Where a tool comes from, and therefore which backend executes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Registered with an external tool server
    External,
    /// Implemented inside the host process
    Internal,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::External => "external",
            Provenance::Internal => "internal",
        }
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A callable tool as known to the catalog.
///
/// Created during a catalog build and immutable until the next rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Sanitized function identifier shown to the model
    pub identifier: String,
    /// Native tool name, used when calling the backend
    pub display_name: String,
    pub description: String,
    pub provenance: Provenance,
    /// Parsed parameter schema as the source described it
    pub original_schema: SchemaNode,
    /// Server name for external tools, the internal source name otherwise
    pub source_name: String,
}

impl ToolDescriptor {
    /// Whether the tool declares a parameter with the given name.
    pub fn declares_parameter(&self, name: &str) -> bool {
        self.original_schema.has_property(name)
    }

    pub fn is_internal(&self) -> bool {
        self.provenance == Provenance::Internal
    }
}

/// A call issued by the model: sanitized identifier plus flat arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCallRequest {
    pub identifier: String,
    #[serde(default)]
    pub arguments: Arguments,
}

impl FunctionCallRequest {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            arguments: Arguments::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    pub fn with_arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }
}
