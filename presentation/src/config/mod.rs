//! Presentation-level configuration
//!
//! Resolves how results are printed from the config file's `[output]`
//! section and command-line overrides.

use crate::cli::commands::OutputFormat as CliOutputFormat;
use bridge_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Build from file settings; an absent format means text.
    pub fn new(format: Option<OutputFormat>, color: bool) -> Self {
        Self {
            format: format.unwrap_or_default(),
            color,
        }
    }

    /// Command-line `--output` wins over the file.
    pub fn with_cli_format(mut self, format: Option<CliOutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format.into();
        }
        self
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
