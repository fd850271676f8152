//! Core domain concepts shared across all subdomains.
//!
//! - [`error::SchemaError`]: why a foreign schema fragment could not be parsed
//! - [`error::CatalogError`]: why a tool was left out of the catalog
//! - [`string::truncate`]: one-line previews of long text

pub mod error;
pub mod string;
