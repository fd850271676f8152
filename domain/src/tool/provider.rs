//! Tool source abstractions
//!
//! The bridge draws tools from two kinds of source:
//!
//! ```text
//!   ┌────────────────────┐        ┌────────────────────┐
//!   │ ExternalToolClient │        │  InternalToolHost  │
//!   │ (tool servers)     │        │ (in-process tools) │
//!   └─────────┬──────────┘        └─────────┬──────────┘
//!             │ list_all_tools              │ tool_definitions
//!             ▼                             ▼
//!        ┌─────────────────────────────────────────┐
//!        │              ToolCatalog                │
//!        └─────────────────────────────────────────┘
//! ```
//!
//! Neither trait knows about connections or process lifecycles; the host
//! application owns those and hands the bridge ready-to-use handles.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

use super::entities::Arguments;

/// Error type for tool source operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The source could not list its tools
    #[error("Enumeration failed: {0}")]
    EnumerationFailed(String),

    /// The source does not know this tool
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// The tool ran and failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// The source cannot execute tools at all
    #[error("Execution unavailable: {0}")]
    Unavailable(String),
}

/// Listing entry of an externally registered tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalToolInfo {
    #[serde(default)]
    pub description: Option<String>,
    /// Name of the server that registered the tool
    #[serde(default)]
    pub server: String,
    /// Raw parameter schema as the server reported it
    #[serde(default)]
    pub input_schema: Value,
}

/// Listing entry of an in-process tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalToolInfo {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Value,
}

/// Client for tools registered with external tool servers.
#[async_trait]
pub trait ExternalToolClient: Send + Sync {
    /// All tools across connected servers, keyed by native name.
    async fn list_all_tools(&self) -> Result<BTreeMap<String, ExternalToolInfo>, ProviderError>;

    /// Call a tool by native name.
    async fn call_tool(&self, name: &str, arguments: Arguments) -> Result<Value, ProviderError>;
}

/// Host of tools implemented inside the process.
#[async_trait]
pub trait InternalToolHost: Send + Sync {
    /// Tool definitions keyed by native name.
    fn tool_definitions(&self) -> Result<BTreeMap<String, InternalToolInfo>, ProviderError>;

    async fn execute_tool(&self, name: &str, arguments: Arguments) -> Result<Value, ProviderError>;
}
