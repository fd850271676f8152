//! Tool schema adapters.
//!
//! Provides [`FunctionSchemaConverter`], the default
//! [`ToolSchemaPort`](bridge_application::ToolSchemaPort) implementation.

pub mod schema;

pub use schema::FunctionSchemaConverter;
