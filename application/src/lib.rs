//! Application layer for tool-bridge
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BridgeConfig, FormatterConfig};
pub use ports::{
    argument_formatter::{ArgumentFormatterPort, PassthroughFormatter},
    outcome_logger::{BridgeEvent, NoOutcomeLogger, OutcomeLogger},
    tool_schema::ToolSchemaPort,
};
pub use use_cases::build_catalog::{BuildCatalogUseCase, NO_DESCRIPTION};
pub use use_cases::dispatch::{BridgeStats, RenderedResponse, ToolBridge};
