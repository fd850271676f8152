//! Console output formatter for bridge results

use crate::output::formatter::OutputFormatter;
use bridge_application::{BridgeStats, RenderedResponse};
use bridge_domain::{ConfigIssue, Provenance, Severity, TargetSchema, ToolCatalog};
use bridge_domain::core::string::truncate;
use colored::Colorize;

/// Recent failures are shown on one line each.
const ERROR_PREVIEW_LEN: usize = 80;

/// Formats catalogs, rendered results and stats for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the catalog as a list of declarations
    pub fn format_catalog(catalog: &ToolCatalog, show_skipped: bool) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Tool Catalog"));
        output.push('\n');

        output.push_str(&format!(
            "{} {} ({} external, {} internal)\n",
            "Functions:".cyan().bold(),
            catalog.len(),
            catalog.count_by_provenance(Provenance::External),
            catalog.count_by_provenance(Provenance::Internal),
        ));
        if catalog.identifier_count() < catalog.len() {
            output.push_str(&format!(
                "{} {} identifiers shadowed by later tools\n",
                "Note:".yellow().bold(),
                catalog.len() - catalog.identifier_count()
            ));
        }

        for (descriptor, declaration) in catalog.descriptors().iter().zip(catalog.declarations()) {
            let shadowed = catalog
                .get(&descriptor.identifier)
                .is_some_and(|winner| !std::ptr::eq(winner, descriptor));
            let title = format!("── {} ──", declaration.name);
            output.push_str(&format!(
                "\n{} {}\n",
                if shadowed { title.dimmed() } else { title.yellow().bold() },
                format!("[{} from {}]", descriptor.provenance, descriptor.source_name).dimmed()
            ));
            if descriptor.display_name != declaration.name {
                output.push_str(&format!("  {} {}\n", "tool:".dimmed(), descriptor.display_name));
            }
            output.push_str(&Self::indent(&declaration.description, "  "));
            output.push('\n');

            let parameters = Self::format_parameters(&declaration.parameters);
            if !parameters.is_empty() {
                output.push_str(&parameters);
            }
        }

        if show_skipped && !catalog.skipped().is_empty() {
            output.push_str(&Self::section_header("Skipped"));
            for skipped in catalog.skipped() {
                output.push_str(&format!(
                    "  {} {} ({}): {}\n",
                    "✗".red(),
                    skipped.name,
                    skipped.provenance,
                    skipped.reason
                ));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    fn format_parameters(parameters: &TargetSchema) -> String {
        let Some(properties) = &parameters.properties else {
            return String::new();
        };
        properties
            .iter()
            .map(|(name, schema)| {
                let marker = if parameters.required.iter().any(|r| r == name) {
                    "*".red().to_string()
                } else {
                    " ".to_string()
                };
                let mut line = format!("    {}{} {}", name.green(), marker, schema.schema_type);
                if let Some(items) = &schema.items {
                    line.push_str(&format!("<{}>", items.schema_type));
                }
                if let Some(description) = &schema.description {
                    line.push_str(&format!("  {}", description.dimmed()));
                }
                line.push('\n');
                line
            })
            .collect()
    }

    /// Format a dispatched call
    pub fn format_response(response: &RenderedResponse) -> String {
        let outcome = &response.outcome;
        let status = if outcome.succeeded {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        };
        let timing = outcome
            .elapsed_seconds
            .map(|secs| format!(" ({secs:.2}s)"))
            .unwrap_or_default();

        format!(
            "{} {}{}\n\n{}\n",
            status,
            outcome.tool_identifier.bold(),
            timing.dimmed(),
            response.text
        )
    }

    /// Format bridge statistics
    pub fn format_stats(stats: &BridgeStats) -> String {
        let mut output = Self::section_header("Bridge Stats");

        output.push_str(&format!("  {} {}\n", "Functions:".cyan(), stats.total_functions));
        output.push_str(&format!(
            "  {} {} ({} succeeded, {:.0}%)\n",
            "Executions:".cyan(),
            stats.total_executions,
            stats.successful_executions,
            stats.success_rate * 100.0
        ));

        if !stats.recent_executions.is_empty() {
            output.push_str(&format!("  {}\n", "Recent:".cyan()));
            for recent in &stats.recent_executions {
                let mark = if recent.success { "✓".green() } else { "✗".red() };
                let timing = recent
                    .execution_time
                    .map(|secs| format!(" {secs:.2}s"))
                    .unwrap_or_default();
                output.push_str(&format!("    {} {}{}", mark, recent.tool_name, timing.dimmed()));
                if let Some(error) = &recent.error {
                    output.push_str(&format!(" {}", truncate(error, ERROR_PREVIEW_LEN).red()));
                }
                output.push('\n');
            }
        }

        if let Some(handling) = &stats.parameter_handling {
            output.push_str(&format!("  {}\n", "Parameter handling:".cyan()));
            let pretty = serde_json::to_string_pretty(handling).unwrap_or_default();
            output.push_str(&Self::indent(&pretty, "    "));
            output.push('\n');
        }

        output
    }

    /// Format configuration issues, one per line
    pub fn format_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| {
                let label = match issue.severity {
                    Severity::Error => "error:".red().bold(),
                    Severity::Warning => "warning:".yellow().bold(),
                };
                format!("{} {}\n", label, issue.message)
            })
            .collect()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_catalog(&self, catalog: &ToolCatalog, show_skipped: bool) -> String {
        Self::format_catalog(catalog, show_skipped)
    }

    fn format_response(&self, response: &RenderedResponse) -> String {
        Self::format_response(response)
    }

    fn format_stats(&self, stats: &BridgeStats) -> String {
        Self::format_stats(stats)
    }

    fn format_issues(&self, issues: &[ConfigIssue]) -> String {
        Self::format_issues(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_domain::{
        ConfigIssueCode, DispatchError, ExecutionOutcome, FunctionDeclaration, SchemaKind,
        SchemaNode, SkippedTool, TargetType, ToolDescriptor,
    };

    fn plain() {
        colored::control::set_override(false);
    }

    fn catalog() -> ToolCatalog {
        let mut parameters = TargetSchema::empty_object();
        let mut query = TargetSchema::new(TargetType::String);
        query.description = Some("Search terms".to_string());
        parameters
            .properties
            .get_or_insert_with(Default::default)
            .insert("query".to_string(), query);
        parameters.required = vec!["query".to_string()];

        let mut catalog = ToolCatalog::new();
        catalog.insert(
            ToolDescriptor {
                identifier: "brave_web_search".to_string(),
                display_name: "brave.web-search".to_string(),
                description: "Search the web".to_string(),
                provenance: Provenance::External,
                original_schema: SchemaNode::empty_object()
                    .with_property("query", SchemaNode::new(SchemaKind::String)),
                source_name: "brave".to_string(),
            },
            FunctionDeclaration::new("brave_web_search", "Search the web", parameters),
        );
        catalog.record_skipped(SkippedTool {
            name: "...".to_string(),
            provenance: Provenance::Internal,
            reason: "identifier is empty".to_string(),
        });
        catalog
    }

    #[test]
    fn test_format_catalog() {
        plain();
        let output = ConsoleFormatter::format_catalog(&catalog(), true);
        assert!(output.contains("Tool Catalog"));
        assert!(output.contains("Functions: 1 (1 external, 0 internal)"));
        assert!(output.contains("── brave_web_search ──"));
        assert!(output.contains("[external from brave]"));
        assert!(output.contains("tool: brave.web-search"));
        assert!(output.contains("query* STRING  Search terms"));
        assert!(output.contains("Skipped"));
        assert!(output.contains("identifier is empty"));
    }

    #[test]
    fn test_format_catalog_hides_skipped() {
        plain();
        let output = ConsoleFormatter::format_catalog(&catalog(), false);
        assert!(!output.contains("Skipped"));
    }

    #[test]
    fn test_format_response() {
        plain();
        let outcome = ExecutionOutcome::failure("ghost", &DispatchError::unknown_tool("ghost"), None);
        let response = RenderedResponse {
            text: "Tool ghost failed: Function ghost not found in tool mapping".to_string(),
            outcome,
        };
        let output = ConsoleFormatter::format_response(&response);
        assert!(output.starts_with("✗ ghost\n"));
        assert!(output.contains("not found in tool mapping"));
    }

    #[test]
    fn test_format_stats() {
        plain();
        let stats = BridgeStats {
            total_functions: 3,
            total_executions: 2,
            successful_executions: 1,
            success_rate: 0.5,
            recent_executions: Vec::new(),
            parameter_handling: None,
        };
        let output = ConsoleFormatter::format_stats(&stats);
        assert!(output.contains("Functions: 3"));
        assert!(output.contains("Executions: 2 (1 succeeded, 50%)"));
        assert!(!output.contains("Parameter handling"));
    }

    #[test]
    fn test_format_stats_truncates_errors() {
        plain();
        let stats = BridgeStats {
            total_functions: 1,
            total_executions: 1,
            successful_executions: 0,
            success_rate: 0.0,
            recent_executions: vec![bridge_domain::RecentExecution {
                tool_name: "slow".to_string(),
                success: false,
                execution_time: Some(1.5),
                error: Some("x".repeat(200)),
            }],
            parameter_handling: Some(serde_json::json!({"wrapper_key": "params"})),
        };
        let output = ConsoleFormatter::format_stats(&stats);
        assert!(output.contains("✗ slow 1.50s"));
        assert!(output.contains(&format!("{}...", "x".repeat(77))));
        assert!(!output.contains(&"x".repeat(78)));
        assert!(output.contains("\"wrapper_key\": \"params\""));
    }

    #[test]
    fn test_format_issues() {
        plain();
        let issues = vec![ConfigIssue::warning(
            ConfigIssueCode::EmptyValue {
                field: "formatter.wrapper_key".to_string(),
            },
            "formatter.wrapper_key is empty",
        )];
        assert_eq!(
            ConsoleFormatter::format_issues(&issues),
            "warning: formatter.wrapper_key is empty\n"
        );
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
