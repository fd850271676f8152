//! In-memory tool sources and helpers shared by use case tests.

use crate::ports::argument_formatter::ArgumentFormatterPort;
use crate::ports::outcome_logger::{BridgeEvent, OutcomeLogger};
use crate::ports::tool_schema::ToolSchemaPort;
use async_trait::async_trait;
use bridge_domain::schema::{SchemaNode, TargetSchema, TargetType};
use bridge_domain::tool::{
    Arguments, ExternalToolClient, ExternalToolInfo, InternalToolHost, InternalToolInfo,
    ProviderError,
};
use bridge_domain::{FormatKind, FormattedArguments};
use serde_json::{Value, json};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::time::Duration;

/// Minimal translator: kind table plus recursion into properties and items.
pub struct SimpleSchema;

impl ToolSchemaPort for SimpleSchema {
    fn translate(&self, node: &SchemaNode) -> TargetSchema {
        let mut target = TargetSchema::new(TargetType::from(node.kind));
        target.description = node.description.clone();
        if let Some(props) = target.properties.as_mut() {
            for (name, child) in &node.properties {
                props.insert(name.clone(), self.translate(child));
            }
        }
        target.required = node.required.clone();
        target.items = node.items.as_ref().map(|i| Box::new(self.translate(i)));
        target
    }
}

pub struct MockExternal {
    tools: BTreeMap<String, ExternalToolInfo>,
    listing_error: Option<ProviderError>,
    responses: HashMap<String, Result<Value, ProviderError>>,
    delay: Option<Duration>,
    pub calls: Mutex<Vec<(String, Arguments)>>,
}

impl MockExternal {
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
            listing_error: None,
            responses: HashMap::new(),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            listing_error: Some(error),
            ..Self::new()
        }
    }

    pub fn with_tool(mut self, name: &str, description: &str, server: &str, schema: Value) -> Self {
        self.tools.insert(
            name.to_string(),
            ExternalToolInfo {
                description: Some(description.to_string()),
                server: server.to_string(),
                input_schema: schema,
            },
        );
        self
    }

    pub fn with_response(mut self, name: &str, response: Result<Value, ProviderError>) -> Self {
        self.responses.insert(name.to_string(), response);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn recorded_calls(&self) -> Vec<(String, Arguments)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExternalToolClient for MockExternal {
    async fn list_all_tools(&self) -> Result<BTreeMap<String, ExternalToolInfo>, ProviderError> {
        match &self.listing_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.tools.clone()),
        }
    }

    async fn call_tool(&self, name: &str, arguments: Arguments) -> Result<Value, ProviderError> {
        self.calls.lock().unwrap().push((name.to_string(), arguments));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .get(name)
            .cloned()
            .unwrap_or_else(|| Ok(json!({"result": format!("{name} done")})))
    }
}

pub struct MockInternal {
    tools: BTreeMap<String, InternalToolInfo>,
    pub calls: Mutex<Vec<(String, Arguments)>>,
}

impl MockInternal {
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_tool(mut self, name: &str, description: Option<&str>, parameters: Value) -> Self {
        self.tools.insert(
            name.to_string(),
            InternalToolInfo {
                description: description.map(str::to_string),
                parameters,
            },
        );
        self
    }

    pub fn recorded_calls(&self) -> Vec<(String, Arguments)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InternalToolHost for MockInternal {
    fn tool_definitions(&self) -> Result<BTreeMap<String, InternalToolInfo>, ProviderError> {
        Ok(self.tools.clone())
    }

    async fn execute_tool(&self, name: &str, arguments: Arguments) -> Result<Value, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), arguments.clone()));
        Ok(Value::Object(arguments))
    }
}

/// Formatter that wraps everything and records the feedback it gets.
pub struct RecordingFormatter {
    pub feedback: Mutex<Vec<(String, String, FormatKind, bool)>>,
}

impl RecordingFormatter {
    pub fn new() -> Self {
        Self {
            feedback: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded(&self) -> Vec<(String, String, FormatKind, bool)> {
        self.feedback.lock().unwrap().clone()
    }
}

impl ArgumentFormatterPort for RecordingFormatter {
    fn format(
        &self,
        _tool_name: &str,
        _backend: &str,
        arguments: Arguments,
        _schema: &SchemaNode,
    ) -> FormattedArguments {
        FormattedArguments::new(FormatKind::Wrapped.apply(arguments, "params"), FormatKind::Wrapped)
    }

    fn record_outcome(&self, backend: &str, tool_name: &str, kind: FormatKind, succeeded: bool) {
        self.feedback.lock().unwrap().push((
            backend.to_string(),
            tool_name.to_string(),
            kind,
            succeeded,
        ));
    }

    fn format_stats(&self) -> Option<Value> {
        Some(json!({"recorded": self.feedback.lock().unwrap().len()}))
    }
}

/// Logger that keeps event types in memory.
pub struct MemoryLogger {
    pub events: Mutex<Vec<(&'static str, Value)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl OutcomeLogger for MemoryLogger {
    fn log(&self, event: BridgeEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}
