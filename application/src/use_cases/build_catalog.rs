//! Build Catalog use case.
//!
//! Enumerates both tool sources, translates every schema, and produces the
//! [`ToolCatalog`] the dispatcher resolves calls against.
//!
//! # Process
//!
//! 1. External tools are listed; a listing failure counts as zero tools
//! 2. Internal tools are listed the same way
//! 3. Each tool gets a sanitized identifier, a parsed schema, and a declaration
//! 4. A tool that cannot be described is recorded as skipped, never fatal
//!
//! External tools are inserted first, so on an identifier collision the
//! internal tool is the one lookups resolve to.

use crate::config::BridgeConfig;
use crate::ports::tool_schema::ToolSchemaPort;
use bridge_domain::schema::{FunctionDeclaration, SchemaNode};
use bridge_domain::tool::{
    ExternalToolClient, InternalToolHost, Provenance, SkippedTool, ToolCatalog, ToolDescriptor,
    sanitize_identifier,
};
use bridge_domain::CatalogError;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Description used when a source gives none.
pub const NO_DESCRIPTION: &str = "No description available";

/// Source name recorded for external tools whose listing names no server.
const UNKNOWN_SERVER: &str = "unknown";

/// One tool as reported by a source, before it is described.
struct RawTool<'a> {
    name: &'a str,
    description: Option<&'a str>,
    schema: &'a Value,
    provenance: Provenance,
    source_name: &'a str,
}

pub struct BuildCatalogUseCase {
    tool_schema: Arc<dyn ToolSchemaPort>,
    config: BridgeConfig,
}

impl BuildCatalogUseCase {
    pub fn new(tool_schema: Arc<dyn ToolSchemaPort>, config: BridgeConfig) -> Self {
        Self {
            tool_schema,
            config,
        }
    }

    /// Build a catalog from whichever sources are present.
    pub async fn execute(
        &self,
        external: Option<&dyn ExternalToolClient>,
        internal: Option<&dyn InternalToolHost>,
    ) -> ToolCatalog {
        let mut catalog = ToolCatalog::new();

        if let Some(client) = external {
            match client.list_all_tools().await {
                Ok(tools) => {
                    for (name, info) in &tools {
                        let source_name = if info.server.is_empty() {
                            UNKNOWN_SERVER
                        } else {
                            info.server.as_str()
                        };
                        self.add_tool(
                            &mut catalog,
                            RawTool {
                                name,
                                description: info.description.as_deref(),
                                schema: &info.input_schema,
                                provenance: Provenance::External,
                                source_name,
                            },
                        );
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to enumerate external tools, continuing without them");
                }
            }
        }

        if let Some(host) = internal {
            match host.tool_definitions() {
                Ok(tools) => {
                    for (name, info) in &tools {
                        self.add_tool(
                            &mut catalog,
                            RawTool {
                                name,
                                description: info.description.as_deref(),
                                schema: &info.parameters,
                                provenance: Provenance::Internal,
                                source_name: &self.config.internal_source_name,
                            },
                        );
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to enumerate internal tools, continuing without them");
                }
            }
        }

        info!(
            total = catalog.len(),
            external = catalog.count_by_provenance(Provenance::External),
            internal = catalog.count_by_provenance(Provenance::Internal),
            skipped = catalog.skipped().len(),
            "Tool catalog built"
        );

        catalog
    }

    fn add_tool(&self, catalog: &mut ToolCatalog, raw: RawTool<'_>) {
        match self.describe(&raw) {
            Ok((descriptor, declaration)) => {
                debug!(
                    tool = %raw.name,
                    identifier = %descriptor.identifier,
                    provenance = %raw.provenance,
                    source = raw.source_name,
                    "Registered tool"
                );
                if catalog.contains(&descriptor.identifier) {
                    warn!(
                        identifier = %descriptor.identifier,
                        tool = %raw.name,
                        "Identifier collision, later tool replaces earlier one in lookups"
                    );
                }
                catalog.insert(descriptor, declaration);
            }
            Err(e) => {
                warn!(tool = %raw.name, error = %e, "Skipping tool");
                catalog.record_skipped(SkippedTool {
                    name: raw.name.to_string(),
                    provenance: raw.provenance,
                    reason: e.to_string(),
                });
            }
        }
    }

    fn describe(
        &self,
        raw: &RawTool<'_>,
    ) -> Result<(ToolDescriptor, FunctionDeclaration), CatalogError> {
        let identifier = sanitize_identifier(raw.name);
        if identifier.is_empty() {
            return Err(CatalogError::EmptyIdentifier {
                name: raw.name.to_string(),
            });
        }

        let parsed = SchemaNode::parse_parameters(raw.schema);
        for issue in &parsed.issues {
            warn!(
                tool = %raw.name,
                path = %issue.path,
                reason = %issue.reason,
                "Dropped part of tool schema"
            );
        }

        let description = raw
            .description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DESCRIPTION)
            .to_string();

        let advertised = if self.config.annotate_descriptions {
            format!("{description} (source tool: {})", raw.name)
        } else {
            description.clone()
        };

        let declaration = self
            .tool_schema
            .declaration(&identifier, &advertised, &parsed.node);

        let descriptor = ToolDescriptor {
            identifier,
            display_name: raw.name.to_string(),
            description,
            provenance: raw.provenance,
            original_schema: parsed.node,
            source_name: raw.source_name.to_string(),
        };

        Ok((descriptor, declaration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MockExternal, MockInternal, SimpleSchema};
    use bridge_domain::ProviderError;
    use serde_json::json;

    fn use_case() -> BuildCatalogUseCase {
        BuildCatalogUseCase::new(Arc::new(SimpleSchema), BridgeConfig::default())
    }

    #[tokio::test]
    async fn test_no_sources_yields_empty_catalog() {
        let catalog = use_case().execute(None, None).await;
        assert!(catalog.is_empty());
        assert!(catalog.declarations().is_empty());
    }

    #[tokio::test]
    async fn test_empty_sources_yield_empty_catalog() {
        let external = MockExternal::new();
        let internal = MockInternal::new();
        let catalog = use_case().execute(Some(&external), Some(&internal)).await;
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_merges_both_sources() {
        let external = MockExternal::new()
            .with_tool("brave.web-search", "Search the web", "brave", json!({
                "type": "object",
                "properties": {"query": {"type": "string"}},
                "required": ["query"]
            }));
        let internal = MockInternal::new().with_tool("remember", Some("Store a memory"), json!({
            "type": "object",
            "properties": {"user_id": {"type": "string"}, "text": {"type": "string"}}
        }));

        let catalog = use_case().execute(Some(&external), Some(&internal)).await;
        assert_eq!(catalog.len(), 2);

        let search = catalog.get("brave_web_search").unwrap();
        assert_eq!(search.display_name, "brave.web-search");
        assert_eq!(search.provenance, Provenance::External);
        assert_eq!(search.source_name, "brave");

        let remember = catalog.get("remember").unwrap();
        assert_eq!(remember.provenance, Provenance::Internal);
        assert_eq!(remember.source_name, "internal");
        assert!(remember.declares_parameter("user_id"));

        let serverless = MockExternal::new().with_tool("lookup", "Look up", "", json!({}));
        let catalog = use_case().execute(Some(&serverless), None).await;
        assert_eq!(catalog.get("lookup").unwrap().source_name, "unknown");

        let decl = &catalog.declarations()[0];
        assert_eq!(decl.name, "brave_web_search");
        assert_eq!(decl.description, "Search the web (source tool: brave.web-search)");
    }

    #[tokio::test]
    async fn test_enumeration_failure_treated_as_empty() {
        let external = MockExternal::failing(ProviderError::EnumerationFailed("down".into()));
        let internal = MockInternal::new().with_tool("ping", None, json!({}));

        let catalog = use_case().execute(Some(&external), Some(&internal)).await;
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("ping").unwrap().description, NO_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_unusable_name_skipped() {
        let internal = MockInternal::new()
            .with_tool("!!!", Some("bad"), json!({}))
            .with_tool("good", Some("fine"), json!({}));

        let catalog = use_case().execute(None, Some(&internal)).await;
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.skipped().len(), 1);
        assert_eq!(catalog.skipped()[0].name, "!!!");
    }

    #[tokio::test]
    async fn test_malformed_schema_degrades() {
        let internal = MockInternal::new().with_tool("odd", Some("odd"), json!("not a schema"));
        let catalog = use_case().execute(None, Some(&internal)).await;

        let odd = catalog.get("odd").unwrap();
        assert_eq!(odd.original_schema, SchemaNode::empty_object());
    }

    #[tokio::test]
    async fn test_collision_resolves_to_internal() {
        let external = MockExternal::new().with_tool("a.b", "external", "srv", json!({}));
        let internal = MockInternal::new().with_tool("a-b", Some("internal"), json!({}));

        let catalog = use_case().execute(Some(&external), Some(&internal)).await;
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a_b").unwrap().display_name, "a-b");
    }

    #[tokio::test]
    async fn test_annotation_disabled() {
        let config = BridgeConfig::default().with_annotate_descriptions(false);
        let use_case = BuildCatalogUseCase::new(Arc::new(SimpleSchema), config);
        let internal = MockInternal::new().with_tool("t", Some("Plain"), json!({}));

        let catalog = use_case.execute(None, Some(&internal)).await;
        assert_eq!(catalog.declarations()[0].description, "Plain");
    }
}
