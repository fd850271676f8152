//! CLI entrypoint for tool-bridge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use bridge_application::{PassthroughFormatter, RenderedResponse, ToolBridge};
use bridge_domain::{Arguments, ExecutionOutcome, FunctionCallRequest, render_outcome};
use bridge_infrastructure::{
    AdaptiveArgumentFormatter, ConfigLoader, FileConfig, FunctionSchemaConverter,
    JsonFileToolClient, JsonFileToolHost, JsonlOutcomeLogger,
};
use bridge_presentation::{Cli, Command, OutputConfig, OutputFormatter, SourceArgs, formatter_for};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines reach the file on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting tool-bridge");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    let output = OutputConfig::new(config.output.format, config.output.color)
        .with_cli_format(cli.output);
    if !output.color {
        colored::control::set_override(false);
    }
    let formatter = formatter_for(&output);

    let issues = config.validate();
    if !issues.is_empty() {
        eprint!("{}", formatter.format_issues(&issues));
    }

    match cli.command {
        Command::Catalog {
            sources,
            show_skipped,
        } => {
            let bridge = build_bridge(&config, &sources);
            let total = bridge.refresh().await;
            info!(total_functions = total, "Catalog built");
            print!("{}", formatter.format_catalog(&bridge.catalog(), show_skipped));
        }
        Command::Render { file } => {
            let content = read_input(file.as_deref())?;
            let outcome: ExecutionOutcome =
                serde_json::from_str(&content).context("Input is not an execution outcome")?;
            let text = render_outcome(&outcome);
            if output.is_json() {
                println!(
                    "{}",
                    formatter.format_response(&RenderedResponse { text, outcome })
                );
            } else {
                println!("{}", text);
            }
        }
        Command::Call {
            identifier,
            args,
            user,
            stats,
            sources,
        } => {
            let arguments: Arguments =
                serde_json::from_str(&args).context("--args must be a JSON object")?;
            let bridge = build_bridge(&config, &sources);
            bridge.refresh().await;

            let request = FunctionCallRequest::new(identifier).with_arguments(arguments);
            let response = bridge.execute_and_render(request, user.as_deref()).await;
            print!("{}", formatter.format_response(&response));

            if stats {
                println!("{}", formatter.format_stats(&bridge.stats()));
            }
        }
        Command::ShowConfig => {
            for line in ConfigLoader::config_sources(cli.config.as_deref()) {
                println!("{}", line);
            }
            println!();
            println!("Effective configuration:");
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` overrides `-v` when set. With `--log-file` the output goes to
/// that file through a non-blocking writer.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Wire the bridge from configuration and the given listing files.
fn build_bridge(config: &FileConfig, sources: &SourceArgs) -> ToolBridge {
    let mut bridge = ToolBridge::new(
        Arc::new(FunctionSchemaConverter),
        config.bridge.to_bridge_config(),
    );

    let formatter_config = config.formatter.to_formatter_config();
    bridge = if formatter_config.enabled {
        bridge.with_formatter(Arc::new(AdaptiveArgumentFormatter::new(&formatter_config)))
    } else {
        bridge.with_formatter(Arc::new(PassthroughFormatter))
    };

    if let Some(path) = &config.logging.outcome_log {
        match JsonlOutcomeLogger::new(path) {
            Some(logger) => bridge = bridge.with_outcome_logger(Arc::new(logger)),
            None => warn!("Outcome log disabled: {}", path.display()),
        }
    }

    if let Some(path) = &sources.external {
        bridge = bridge.with_external_client(Arc::new(JsonFileToolClient::new(path)));
    }
    if let Some(path) = &sources.internal {
        bridge = bridge.with_internal_host(Arc::new(JsonFileToolHost::new(path)));
    }
    if sources.external.is_none() && sources.internal.is_none() {
        warn!("No tool listings given; the catalog will be empty");
    }

    bridge
}

/// Read an outcome from a file, or from stdin for `None` and `-`.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            if content.trim().is_empty() {
                bail!("No outcome given on stdin");
            }
            Ok(content)
        }
    }
}
