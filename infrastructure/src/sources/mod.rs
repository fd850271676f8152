//! File-backed tool sources.
//!
//! The bridge never manages tool servers itself. For offline inspection the
//! CLI reads tool listings from JSON files through these adapters, which
//! implement the domain source traits but cannot execute anything.

mod json_file;

pub use json_file::{JsonFileToolClient, JsonFileToolHost};
