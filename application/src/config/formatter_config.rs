//! Argument formatter parameters.

use bridge_domain::DEFAULT_WRAPPER_KEY;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// When false, arguments pass through unchanged and nothing is learned.
    pub enabled: bool,
    /// Failures after which a shape with no successes is abandoned for a
    /// backend+tool pair.
    pub failure_threshold: u32,
    /// Key used by the wrapped and stringified shapes.
    pub wrapper_key: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            failure_threshold: 2,
            wrapper_key: DEFAULT_WRAPPER_KEY.to_string(),
        }
    }
}

impl FormatterConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_failure_threshold(mut self, threshold: u32) -> Self {
        self.failure_threshold = threshold;
        self
    }

    pub fn with_wrapper_key(mut self, key: impl Into<String>) -> Self {
        self.wrapper_key = key.into();
        self
    }
}
