//! Application-level configuration.
//!
//! - [`BridgeConfig`]: catalog building and dispatch control
//! - [`FormatterConfig`]: argument formatter behavior

pub mod bridge_config;
pub mod formatter_config;

pub use bridge_config::BridgeConfig;
pub use formatter_config::FormatterConfig;
