//! Bridge parameters: catalog building and dispatch control.

use bridge_domain::tool::RECENT_LIMIT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters for catalog building and dispatching.
///
/// Used by [`BuildCatalogUseCase`](crate::use_cases::build_catalog::BuildCatalogUseCase)
/// and [`ToolBridge`](crate::use_cases::dispatch::ToolBridge).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Source name recorded on every internal tool.
    pub internal_source_name: String,
    /// Parameter names that receive the caller identity when a tool declares
    /// them and the call leaves them out.
    pub identity_parameters: Vec<String>,
    /// Append `(source tool: <native name>)` to declaration descriptions.
    pub annotate_descriptions: bool,
    /// Upper bound on a single backend call.
    pub call_timeout: Option<Duration>,
    /// Number of recent outcomes included in stats.
    pub recent_limit: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            internal_source_name: "internal".to_string(),
            identity_parameters: vec!["user_id".to_string()],
            annotate_descriptions: true,
            call_timeout: None,
            recent_limit: RECENT_LIMIT,
        }
    }
}

impl BridgeConfig {
    // ==================== Builder Methods ====================

    pub fn with_internal_source_name(mut self, name: impl Into<String>) -> Self {
        self.internal_source_name = name.into();
        self
    }

    pub fn with_identity_parameters(
        mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.identity_parameters = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_annotate_descriptions(mut self, annotate: bool) -> Self {
        self.annotate_descriptions = annotate;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = BridgeConfig::default();
        assert_eq!(config.internal_source_name, "internal");
        assert_eq!(config.identity_parameters, vec!["user_id".to_string()]);
        assert!(config.annotate_descriptions);
        assert!(config.call_timeout.is_none());
        assert_eq!(config.recent_limit, 10);
    }

    #[test]
    fn test_builder() {
        let config = BridgeConfig::default()
            .with_internal_source_name("host")
            .with_identity_parameters(["user_id", "session_owner"])
            .with_call_timeout(Some(Duration::from_secs(30)))
            .with_recent_limit(3);

        assert_eq!(config.internal_source_name, "host");
        assert_eq!(config.identity_parameters.len(), 2);
        assert_eq!(config.call_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.recent_limit, 3);
    }
}
