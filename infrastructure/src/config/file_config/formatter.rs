//! Argument formatter configuration from TOML (`[formatter]` section)

use bridge_application::FormatterConfig;
use bridge_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_WRAPPER_KEY};
use serde::{Deserialize, Serialize};

/// Raw formatter configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFormatterConfig {
    /// Use the adaptive formatter (pass-through when false)
    pub enabled: bool,
    /// Failures before an unproven shape is abandoned
    pub failure_threshold: u32,
    /// Key for wrapped/stringified argument shapes
    pub wrapper_key: String,
}

impl Default for FileFormatterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            failure_threshold: 2,
            wrapper_key: DEFAULT_WRAPPER_KEY.to_string(),
        }
    }
}

impl FileFormatterConfig {
    pub fn to_formatter_config(&self) -> FormatterConfig {
        let wrapper_key = if self.wrapper_key.trim().is_empty() {
            DEFAULT_WRAPPER_KEY.to_string()
        } else {
            self.wrapper_key.clone()
        };
        let base = if self.enabled {
            FormatterConfig::default()
        } else {
            FormatterConfig::disabled()
        };
        base.with_failure_threshold(self.failure_threshold.max(1))
            .with_wrapper_key(wrapper_key)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.failure_threshold == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "formatter.failure_threshold".to_string(),
                    value: "0".to_string(),
                },
                "formatter.failure_threshold must be at least 1, using 1",
            ));
        }

        if self.wrapper_key.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "formatter.wrapper_key".to_string(),
                },
                format!("formatter.wrapper_key is empty, using '{DEFAULT_WRAPPER_KEY}'"),
            ));
        }

        issues
    }
}
