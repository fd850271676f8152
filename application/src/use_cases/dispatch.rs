//! Dispatch use case: the runtime half of the bridge.
//!
//! [`ToolBridge`] owns the current [`ToolCatalog`] and the execution history.
//! Each model-issued call flows through:
//!
//! ```text
//! FunctionCallRequest
//!   → catalog lookup (unknown → failure outcome)
//!   → caller identity injection
//!   → ArgumentFormatterPort::format
//!   → ExternalToolClient / InternalToolHost (by provenance)
//!   → ArgumentFormatterPort::record_outcome
//!   → ExecutionHistory + OutcomeLogger
//!   → ExecutionOutcome
//! ```
//!
//! No call ever returns an error: every failure becomes an outcome, and every
//! outcome is appended to the history before it is returned. Locks guard
//! only the catalog swap and the history append; neither is held while a
//! backend call is in flight.

use crate::config::BridgeConfig;
use crate::ports::argument_formatter::{ArgumentFormatterPort, PassthroughFormatter};
use crate::ports::outcome_logger::{BridgeEvent, NoOutcomeLogger, OutcomeLogger};
use crate::ports::tool_schema::ToolSchemaPort;
use crate::use_cases::build_catalog::BuildCatalogUseCase;
use bridge_domain::render::render_outcome;
use bridge_domain::tool::{
    Arguments, DispatchError, ExecutionHistory, ExecutionOutcome, ExternalToolClient,
    FunctionCallRequest, InternalToolHost, Provenance, RecentExecution, ToolCatalog,
    ToolDescriptor,
};
use bridge_domain::FormatKind;
use futures::future::join_all;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Instant;
use tracing::{debug, error, info};

/// Rendered text for the model plus the raw outcome.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedResponse {
    pub text: String,
    pub outcome: ExecutionOutcome,
}

/// Diagnostics snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct BridgeStats {
    pub total_functions: usize,
    pub total_executions: usize,
    pub successful_executions: usize,
    pub success_rate: f64,
    pub recent_executions: Vec<RecentExecution>,
    /// Format-usage statistics from the argument formatter, when it keeps any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_handling: Option<Value>,
}

pub struct ToolBridge {
    catalog: RwLock<Arc<ToolCatalog>>,
    history: Mutex<ExecutionHistory>,
    external: Option<Arc<dyn ExternalToolClient>>,
    internal: Option<Arc<dyn InternalToolHost>>,
    formatter: Arc<dyn ArgumentFormatterPort>,
    outcome_logger: Arc<dyn OutcomeLogger>,
    builder: BuildCatalogUseCase,
    config: BridgeConfig,
}

impl ToolBridge {
    /// Create a bridge with no sources, a pass-through formatter and an
    /// empty catalog. Call [`refresh`](Self::refresh) after adding sources.
    pub fn new(tool_schema: Arc<dyn ToolSchemaPort>, config: BridgeConfig) -> Self {
        Self {
            catalog: RwLock::new(Arc::new(ToolCatalog::new())),
            history: Mutex::new(ExecutionHistory::new()),
            external: None,
            internal: None,
            formatter: Arc::new(PassthroughFormatter),
            outcome_logger: Arc::new(NoOutcomeLogger),
            builder: BuildCatalogUseCase::new(tool_schema, config.clone()),
            config,
        }
    }

    pub fn with_external_client(mut self, client: Arc<dyn ExternalToolClient>) -> Self {
        self.external = Some(client);
        self
    }

    pub fn with_internal_host(mut self, host: Arc<dyn InternalToolHost>) -> Self {
        self.internal = Some(host);
        self
    }

    pub fn with_formatter(mut self, formatter: Arc<dyn ArgumentFormatterPort>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_outcome_logger(mut self, logger: Arc<dyn OutcomeLogger>) -> Self {
        self.outcome_logger = logger;
        self
    }

    /// Rebuild the catalog from the configured sources and swap it in.
    ///
    /// Calls already in flight keep the catalog they resolved against.
    /// Returns the number of callable functions.
    pub async fn refresh(&self) -> usize {
        let catalog = self
            .builder
            .execute(self.external.as_deref(), self.internal.as_deref())
            .await;
        let total = catalog.len();

        self.outcome_logger.log(BridgeEvent::new(
            "catalog_built",
            json!({
                "total_functions": total,
                "external": catalog.count_by_provenance(Provenance::External),
                "internal": catalog.count_by_provenance(Provenance::Internal),
                "skipped": catalog.skipped(),
            }),
        ));

        *self.catalog.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(catalog);
        total
    }

    /// The current catalog.
    pub fn catalog(&self) -> Arc<ToolCatalog> {
        Arc::clone(&self.catalog.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Execute one call. Never fails; failures are reported in the outcome.
    pub async fn execute(
        &self,
        request: FunctionCallRequest,
        caller_identity: Option<&str>,
    ) -> ExecutionOutcome {
        let catalog = self.catalog();
        let Some(tool) = catalog.get(&request.identifier) else {
            let err = DispatchError::unknown_tool(&request.identifier);
            error!(tool = %request.identifier, "Unknown tool requested");
            return self.finish(ExecutionOutcome::failure(&request.identifier, &err, None));
        };

        let arguments = self.inject_identity(tool, request.arguments, caller_identity);
        let backend = tool.source_name.as_str();

        let start = Instant::now();
        let formatted =
            self.formatter
                .format(&tool.display_name, backend, arguments, &tool.original_schema);
        debug!(
            tool = %tool.display_name,
            backend,
            format = %formatted.kind,
            "Formatted arguments"
        );

        let result = self.invoke(tool, formatted.arguments).await;
        let elapsed = start.elapsed().as_secs_f64();

        let outcome = match result {
            Ok(value) => {
                self.formatter
                    .record_outcome(backend, &tool.display_name, formatted.kind, true);
                info!(tool = %tool.identifier, elapsed_secs = elapsed, "Tool executed");
                ExecutionOutcome::success(&tool.identifier, value, elapsed)
            }
            Err(err) => {
                // shape never reached a backend
                let kind = match &err {
                    DispatchError::MisconfiguredBackend { .. } => FormatKind::Unknown,
                    _ => formatted.kind,
                };
                self.formatter
                    .record_outcome(backend, &tool.display_name, kind, false);
                error!(tool = %tool.identifier, elapsed_secs = elapsed, error = %err, "Tool execution failed");
                ExecutionOutcome::failure(&tool.identifier, &err, Some(elapsed))
            }
        };

        self.finish(outcome)
    }

    /// Execute several calls concurrently. Outcomes come back in request order.
    pub async fn execute_all(
        &self,
        requests: Vec<FunctionCallRequest>,
        caller_identity: Option<&str>,
    ) -> Vec<ExecutionOutcome> {
        join_all(
            requests
                .into_iter()
                .map(|request| self.execute(request, caller_identity)),
        )
        .await
    }

    /// Execute one call and render the outcome for the model.
    pub async fn execute_and_render(
        &self,
        request: FunctionCallRequest,
        caller_identity: Option<&str>,
    ) -> RenderedResponse {
        let outcome = self.execute(request, caller_identity).await;
        RenderedResponse {
            text: render_outcome(&outcome),
            outcome,
        }
    }

    pub fn stats(&self) -> BridgeStats {
        let total_functions = self.catalog().len();
        let summary = self
            .history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .summary(self.config.recent_limit);

        BridgeStats {
            total_functions,
            total_executions: summary.total_executions,
            successful_executions: summary.successful_executions,
            success_rate: summary.success_rate,
            recent_executions: summary.recent_executions,
            parameter_handling: self.formatter.format_stats(),
        }
    }

    /// Number of recorded outcomes.
    pub fn execution_count(&self) -> usize {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn inject_identity(
        &self,
        tool: &ToolDescriptor,
        mut arguments: Arguments,
        caller_identity: Option<&str>,
    ) -> Arguments {
        let Some(identity) = caller_identity else {
            return arguments;
        };
        for name in &self.config.identity_parameters {
            if tool.declares_parameter(name) && !arguments.contains_key(name) {
                debug!(tool = %tool.display_name, parameter = %name, "Injecting caller identity");
                arguments.insert(name.clone(), Value::String(identity.to_string()));
            }
        }
        arguments
    }

    async fn invoke(&self, tool: &ToolDescriptor, arguments: Arguments) -> Result<Value, DispatchError> {
        let call = async {
            match tool.provenance {
                Provenance::Internal => match &self.internal {
                    Some(host) => host
                        .execute_tool(&tool.display_name, arguments)
                        .await
                        .map_err(|e| DispatchError::backend(e.to_string())),
                    None => Err(DispatchError::misconfigured(
                        "Internal tool host",
                        &tool.display_name,
                    )),
                },
                Provenance::External => match &self.external {
                    Some(client) => client
                        .call_tool(&tool.display_name, arguments)
                        .await
                        .map_err(|e| DispatchError::backend(e.to_string())),
                    None => Err(DispatchError::misconfigured(
                        "External tool",
                        &tool.display_name,
                    )),
                },
            }
        };

        match self.config.call_timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.unwrap_or_else(|_| {
                Err(DispatchError::backend(format!(
                    "timed out after {}s",
                    limit.as_secs_f64()
                )))
            }),
            None => call.await,
        }
    }

    fn finish(&self, outcome: ExecutionOutcome) -> ExecutionOutcome {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(outcome.clone());

        self.outcome_logger.log(BridgeEvent::new(
            "tool_execution",
            serde_json::to_value(&outcome).unwrap_or(Value::Null),
        ));

        outcome
    }
}
