//! Domain layer for tool-bridge
//!
//! This crate contains the core types and pure logic of the bridge between a
//! model's function-calling interface and externally described tools.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Schemas
//!
//! Foreign tool schemas (JSON Schema shaped) are parsed leniently into a
//! [`SchemaNode`] tree and later translated into the model's calling
//! convention ([`TargetSchema`], [`FunctionDeclaration`]).
//!
//! ## Catalog
//!
//! A [`ToolCatalog`] holds one [`ToolDescriptor`] per callable function,
//! keyed by a sanitized identifier that maps back to the native tool name
//! and its provenance ([`Provenance::External`] or [`Provenance::Internal`]).
//!
//! ## Outcomes
//!
//! Every dispatched call produces an [`ExecutionOutcome`], appended to an
//! [`ExecutionHistory`] and rendered into model-readable text by
//! [`render::render_outcome`].

pub mod config;
pub mod core;
pub mod format;
pub mod render;
pub mod schema;
pub mod tool;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::{CatalogError, SchemaError};
pub use format::{DEFAULT_WRAPPER_KEY, FormatKind, FormattedArguments};
pub use render::{ResultShape, render_outcome};
pub use schema::{
    FunctionDeclaration, ParsedSchema, SchemaIssue, SchemaKind, SchemaNode, TargetSchema,
    TargetType,
};
pub use tool::{
    catalog::{SkippedTool, ToolCatalog},
    entities::{Arguments, FunctionCallRequest, Provenance, ToolDescriptor},
    history::{ExecutionHistory, HistorySummary, RECENT_LIMIT, RecentExecution},
    identifier::sanitize_identifier,
    provider::{ExternalToolClient, ExternalToolInfo, InternalToolHost, InternalToolInfo, ProviderError},
    value_objects::{DispatchError, DispatchErrorKind, ExecutionOutcome},
};
