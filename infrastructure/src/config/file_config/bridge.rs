//! Bridge configuration from TOML (`[bridge]` section)

use bridge_application::BridgeConfig;
use bridge_domain::tool::RECENT_LIMIT;
use bridge_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw bridge configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBridgeConfig {
    /// Source name recorded on internal tools
    pub internal_source_name: String,
    /// Parameters that receive the caller identity
    pub identity_parameters: Vec<String>,
    /// Append `(source tool: <name>)` to advertised descriptions
    pub annotate_descriptions: bool,
    /// Per-call timeout in seconds (no timeout when unset)
    pub call_timeout_secs: Option<u64>,
    /// Recent outcomes shown in stats
    pub recent_limit: usize,
}

impl Default for FileBridgeConfig {
    fn default() -> Self {
        Self {
            internal_source_name: "internal".to_string(),
            identity_parameters: vec!["user_id".to_string()],
            annotate_descriptions: true,
            call_timeout_secs: None,
            recent_limit: RECENT_LIMIT,
        }
    }
}

impl FileBridgeConfig {
    pub fn to_bridge_config(&self) -> BridgeConfig {
        BridgeConfig::default()
            .with_internal_source_name(self.internal_source_name.clone())
            .with_identity_parameters(self.identity_parameters.iter().filter(|n| !n.is_empty()).cloned())
            .with_annotate_descriptions(self.annotate_descriptions)
            .with_call_timeout(
                self.call_timeout_secs
                    .filter(|&secs| secs > 0)
                    .map(Duration::from_secs),
            )
            .with_recent_limit(self.recent_limit)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.internal_source_name.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "bridge.internal_source_name".to_string(),
                },
                "bridge.internal_source_name is empty; internal tools will report no source",
            ));
        }

        if self.identity_parameters.iter().any(|n| n.trim().is_empty()) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "bridge.identity_parameters".to_string(),
                },
                "bridge.identity_parameters contains an empty name, it will be ignored",
            ));
        }

        if self.call_timeout_secs == Some(0) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "bridge.call_timeout_secs".to_string(),
                    value: "0".to_string(),
                },
                "bridge.call_timeout_secs = 0 disables the timeout",
            ));
        }

        if self.recent_limit == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "bridge.recent_limit".to_string(),
                    value: "0".to_string(),
                },
                "bridge.recent_limit = 0 hides all recent executions from stats",
            ));
        }

        issues
    }
}
