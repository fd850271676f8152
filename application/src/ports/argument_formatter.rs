//! Argument formatter port.
//!
//! Backends disagree on the wire shape of arguments. The formatter picks a
//! [`FormatKind`] per backend+tool pair and may learn from the outcomes the
//! dispatcher reports back.

use bridge_domain::schema::SchemaNode;
use bridge_domain::tool::Arguments;
use bridge_domain::{FormatKind, FormattedArguments};
use serde_json::Value;

/// Port for shaping call arguments before they reach a backend.
///
/// Both methods are infallible. An implementation that hits an internal
/// problem returns the arguments unchanged from `format` and drops the
/// record in `record_outcome`.
pub trait ArgumentFormatterPort: Send + Sync {
    /// Put `arguments` into the shape `backend` is expected to accept for
    /// `tool_name`.
    fn format(
        &self,
        tool_name: &str,
        backend: &str,
        arguments: Arguments,
        schema: &SchemaNode,
    ) -> FormattedArguments;

    /// Report how a call formatted with `kind` went.
    fn record_outcome(&self, backend: &str, tool_name: &str, kind: FormatKind, succeeded: bool);

    /// Format-usage statistics, when the implementation keeps any.
    fn format_stats(&self) -> Option<Value> {
        None
    }
}

/// Formatter used when none is configured: arguments pass through and no
/// outcomes are recorded.
pub struct PassthroughFormatter;

impl ArgumentFormatterPort for PassthroughFormatter {
    fn format(
        &self,
        _tool_name: &str,
        _backend: &str,
        arguments: Arguments,
        _schema: &SchemaNode,
    ) -> FormattedArguments {
        FormattedArguments::passthrough(arguments)
    }

    fn record_outcome(&self, _backend: &str, _tool_name: &str, _kind: FormatKind, _succeeded: bool) {}
}
