//! Logging infrastructure: structured outcome logging.
//!
//! Provides [`JsonlOutcomeLogger`], a JSONL file writer that implements
//! the [`OutcomeLogger`](bridge_application::OutcomeLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlOutcomeLogger;
