//! Port for structured outcome logging.
//!
//! Defines the [`OutcomeLogger`] trait for recording bridge events (catalog
//! builds, tool executions) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures every execution
//! outcome in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured bridge event for logging.
pub struct BridgeEvent {
    /// Event type identifier (e.g., "tool_execution", "catalog_built").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl BridgeEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging bridge events to a structured log.
///
/// The `log` method is synchronous and infallible; write failures are
/// ignored by implementations.
pub trait OutcomeLogger: Send + Sync {
    fn log(&self, event: BridgeEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoOutcomeLogger;

impl OutcomeLogger for NoOutcomeLogger {
    fn log(&self, _event: BridgeEvent) {}
}
