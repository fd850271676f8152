//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for catalog listings, rendered results and stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for bridge_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => bridge_domain::OutputFormat::Text,
            OutputFormat::Json => bridge_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for tool-bridge
#[derive(Parser, Debug)]
#[command(name = "tool-bridge")]
#[command(author, version, about = "Bridge tool-server schemas and results to model function calling")]
#[command(long_about = r#"
tool-bridge translates tool descriptions into function declarations a model can
call, dispatches those calls to the right backend, and renders the results as
text the model can read.

Tool listings are read from JSON files:
  external: { "<name>": { "description", "server", "input_schema" } }
  internal: { "<name>": { "description", "parameters" } }

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./tool-bridge.toml       Project-level config
3. ~/.config/tool-bridge/config.toml   Global config

Example:
  tool-bridge catalog --external servers.json --internal builtin.json
  tool-bridge render outcome.json
  tool-bridge call brave_web_search --args '{"query": "rust"}' --external servers.json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (defaults to the config file's [output] format, then text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Tool listing files shared by commands that build a catalog
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// JSON listing of externally registered tools
    #[arg(long, value_name = "FILE")]
    pub external: Option<PathBuf>,

    /// JSON listing of internal tool definitions
    #[arg(long, value_name = "FILE")]
    pub internal: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the catalog and print the function declarations
    Catalog {
        #[command(flatten)]
        sources: SourceArgs,

        /// Include skipped tools and their reasons
        #[arg(long)]
        show_skipped: bool,
    },

    /// Render an execution outcome (JSON) the way the model would see it
    Render {
        /// Outcome file; reads stdin when omitted or "-"
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Dispatch one call through the bridge and print the rendered result
    Call {
        /// Function identifier as advertised in the catalog
        identifier: String,

        /// Arguments as a JSON object
        #[arg(long, value_name = "JSON", default_value = "{}")]
        args: String,

        /// Caller identity injected into tools that declare it
        #[arg(long, value_name = "ID")]
        user: Option<String>,

        /// Print bridge statistics after the call
        #[arg(long)]
        stats: bool,

        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Show configuration file locations and the effective configuration
    ShowConfig,
}
