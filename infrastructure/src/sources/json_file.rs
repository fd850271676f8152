//! JSON listing files as tool sources.
//!
//! External listing (`name → {description, server, input_schema}`):
//!
//! ```json
//! {
//!   "brave.web-search": {
//!     "description": "Search the web",
//!     "server": "brave",
//!     "input_schema": {"type": "object", "properties": {"query": {"type": "string"}}}
//!   }
//! }
//! ```
//!
//! Internal listing (`name → {description, parameters}`) has the same layout
//! with `parameters` in place of `server`/`input_schema`.
//!
//! Files are read on every enumeration so a catalog refresh sees edits.

use async_trait::async_trait;
use bridge_domain::tool::{
    Arguments, ExternalToolClient, ExternalToolInfo, InternalToolHost, InternalToolInfo,
    ProviderError,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

fn parse_listing<T: DeserializeOwned>(path: &Path, content: &str) -> Result<BTreeMap<String, T>, ProviderError> {
    serde_json::from_str(content).map_err(|e| {
        ProviderError::EnumerationFailed(format!("{}: {}", path.display(), e))
    })
}

fn read_error(path: &Path, e: std::io::Error) -> ProviderError {
    ProviderError::EnumerationFailed(format!("Failed to read {}: {}", path.display(), e))
}

fn unavailable(name: &str, path: &Path) -> ProviderError {
    ProviderError::Unavailable(format!(
        "{name} is listed in {} but listing files cannot execute tools",
        path.display()
    ))
}

/// External tools listed in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileToolClient {
    path: PathBuf,
}

impl JsonFileToolClient {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ExternalToolClient for JsonFileToolClient {
    async fn list_all_tools(&self) -> Result<BTreeMap<String, ExternalToolInfo>, ProviderError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| read_error(&self.path, e))?;
        parse_listing(&self.path, &content)
    }

    async fn call_tool(&self, name: &str, _arguments: Arguments) -> Result<Value, ProviderError> {
        Err(unavailable(name, &self.path))
    }
}

/// Internal tool definitions listed in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileToolHost {
    path: PathBuf,
}

impl JsonFileToolHost {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl InternalToolHost for JsonFileToolHost {
    fn tool_definitions(&self) -> Result<BTreeMap<String, InternalToolInfo>, ProviderError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| read_error(&self.path, e))?;
        parse_listing(&self.path, &content)
    }

    async fn execute_tool(&self, name: &str, _arguments: Arguments) -> Result<Value, ProviderError> {
        Err(unavailable(name, &self.path))
    }
}
