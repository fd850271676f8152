//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! Tool sources themselves are domain traits
//! ([`ExternalToolClient`](bridge_domain::ExternalToolClient),
//! [`InternalToolHost`](bridge_domain::InternalToolHost)) since the host
//! application owns them.

pub mod argument_formatter;
pub mod outcome_logger;
pub mod tool_schema;
