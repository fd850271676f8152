//! Output formatter trait

use bridge_application::{BridgeStats, RenderedResponse};
use bridge_domain::{ConfigIssue, ToolCatalog};

/// Trait for formatting bridge output
pub trait OutputFormatter {
    /// Format the catalog's function declarations
    fn format_catalog(&self, catalog: &ToolCatalog, show_skipped: bool) -> String;

    /// Format a dispatched call and its rendered text
    fn format_response(&self, response: &RenderedResponse) -> String;

    /// Format bridge statistics
    fn format_stats(&self, stats: &BridgeStats) -> String;

    /// Format configuration problems found while loading
    fn format_issues(&self, issues: &[ConfigIssue]) -> String;
}
