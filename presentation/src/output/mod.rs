//! Output formatters for catalogs, rendered results and bridge stats

pub mod console;
pub mod formatter;
pub mod json;
