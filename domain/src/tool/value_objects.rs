//! Tool domain value objects: dispatch errors and execution outcomes.
//!
//! Dispatch failures are never raised to the caller of the bridge. They are
//! folded into an [`ExecutionOutcome`] and rendered like any other result.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Why a dispatch failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Function {identifier} not found in tool mapping")]
    UnknownTool { identifier: String },

    /// The tool's provenance points at a backend that was never configured
    #[error("{backend} client not available for {tool}")]
    MisconfiguredBackend { backend: String, tool: String },

    #[error("{message}")]
    BackendExecutionFailure { message: String },
}

impl DispatchError {
    pub fn unknown_tool(identifier: impl Into<String>) -> Self {
        Self::UnknownTool {
            identifier: identifier.into(),
        }
    }

    pub fn misconfigured(backend: impl Into<String>, tool: impl Into<String>) -> Self {
        Self::MisconfiguredBackend {
            backend: backend.into(),
            tool: tool.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::BackendExecutionFailure {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> DispatchErrorKind {
        match self {
            Self::UnknownTool { .. } => DispatchErrorKind::UnknownTool,
            Self::MisconfiguredBackend { .. } => DispatchErrorKind::MisconfiguredBackend,
            Self::BackendExecutionFailure { .. } => DispatchErrorKind::BackendExecutionFailure,
        }
    }
}

/// Serializable tag of a [`DispatchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchErrorKind {
    UnknownTool,
    MisconfiguredBackend,
    BackendExecutionFailure,
}

impl DispatchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownTool => "unknown_tool",
            Self::MisconfiguredBackend => "misconfigured_backend",
            Self::BackendExecutionFailure => "backend_execution_failure",
        }
    }
}

impl std::fmt::Display for DispatchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Record of one call attempt. Created for every attempt, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    pub tool_identifier: String,
    pub succeeded: bool,
    /// Backend result; `Null` on failure
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<DispatchErrorKind>,
    /// Wall-clock time spent in the call; absent when no call was made
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_seconds: Option<f64>,
}

impl ExecutionOutcome {
    pub fn success(tool_identifier: impl Into<String>, value: Value, elapsed_seconds: f64) -> Self {
        Self {
            tool_identifier: tool_identifier.into(),
            succeeded: true,
            value,
            error_message: None,
            error_kind: None,
            elapsed_seconds: Some(elapsed_seconds),
        }
    }

    pub fn failure(
        tool_identifier: impl Into<String>,
        error: &DispatchError,
        elapsed_seconds: Option<f64>,
    ) -> Self {
        Self {
            tool_identifier: tool_identifier.into(),
            succeeded: false,
            value: Value::Null,
            error_message: Some(error.to_string()),
            error_kind: Some(error.kind()),
            elapsed_seconds,
        }
    }

    /// Error message, or a placeholder for failures recorded without one.
    pub fn error_text(&self) -> &str {
        self.error_message.as_deref().unwrap_or("Unknown error")
    }
}
