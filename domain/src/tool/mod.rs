//! Tool domain module
//!
//! Everything the bridge knows about callable tools:
//!
//! ```text
//! ┌──────────────────┐    ┌─────────────────────┐    ┌──────────────────┐
//! │ ToolCatalog      │───▶│ FunctionCallRequest │───▶│ ExecutionOutcome │
//! │ (descriptors)    │    │ (model invocation)  │    │ (history entry)  │
//! └──────┬───────────┘    └─────────────────────┘    └──────────────────┘
//!        │
//!        └─ "brave_web_search" → ToolDescriptor { display_name: "brave.web-search", .. }
//! ```
//!
//! # Identifiers
//!
//! Native tool names are arbitrary strings. [`sanitize_identifier`] reduces
//! them to ASCII alphanumerics and underscore; the catalog maps the result
//! back to the native name and its [`Provenance`].
//!
//! # Sources
//!
//! Tools come from an [`ExternalToolClient`] (tool servers) or an
//! [`InternalToolHost`] (in-process tools). Provenance decides which one
//! receives the call.

pub mod catalog;
pub mod entities;
pub mod history;
pub mod identifier;
pub mod provider;
pub mod value_objects;

pub use catalog::{SkippedTool, ToolCatalog};
pub use entities::{Arguments, FunctionCallRequest, Provenance, ToolDescriptor};
pub use history::{ExecutionHistory, HistorySummary, RECENT_LIMIT, RecentExecution};
pub use identifier::sanitize_identifier;
pub use provider::{
    ExternalToolClient, ExternalToolInfo, InternalToolHost, InternalToolInfo, ProviderError,
};
pub use value_objects::{DispatchError, DispatchErrorKind, ExecutionOutcome};
