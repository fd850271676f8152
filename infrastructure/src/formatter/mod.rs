//! Argument formatter adapters.
//!
//! Provides [`AdaptiveArgumentFormatter`], the learning implementation of
//! the [`ArgumentFormatterPort`](bridge_application::ArgumentFormatterPort).

mod adaptive;

pub use adaptive::AdaptiveArgumentFormatter;
