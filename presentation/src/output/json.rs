//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use bridge_application::{BridgeStats, RenderedResponse};
use bridge_domain::{ConfigIssue, Severity, ToolCatalog};
use serde::Serialize;
use serde_json::json;

/// Formats bridge output as pretty-printed JSON for scripting
pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_catalog(&self, catalog: &ToolCatalog, show_skipped: bool) -> String {
        if show_skipped {
            Self::pretty(&json!({
                "functions": catalog.available_functions(),
                "skipped": catalog.skipped(),
            }))
        } else {
            Self::pretty(&catalog.available_functions())
        }
    }

    fn format_response(&self, response: &RenderedResponse) -> String {
        Self::pretty(response)
    }

    fn format_stats(&self, stats: &BridgeStats) -> String {
        Self::pretty(stats)
    }

    fn format_issues(&self, issues: &[ConfigIssue]) -> String {
        let issues: Vec<_> = issues
            .iter()
            .map(|issue| {
                json!({
                    "severity": match issue.severity {
                        Severity::Error => "error",
                        Severity::Warning => "warning",
                    },
                    "message": issue.message,
                })
            })
            .collect();
        Self::pretty(&issues)
    }
}
