//! Result normalization
//!
//! Turns an [`ExecutionOutcome`] into one block of text for the model.
//! A success value is classified once into a [`ResultShape`], and each
//! shape has exactly one rendering. Failures are rendered from the error
//! message alone; their `value` is never looked at.

pub mod search;

use serde_json::Value;

use crate::tool::ExecutionOutcome;
pub use search::{SearchHit, SearchShape};

/// What an empty success value looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyKind {
    /// `null` or blank text
    Result,
    List,
    Object,
}

impl EmptyKind {
    fn label(&self) -> &'static str {
        match self {
            EmptyKind::Result => "empty result",
            EmptyKind::List => "empty list",
            EmptyKind::Object => "empty object",
        }
    }
}

/// Runtime shape of a successful result.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultShape<'a> {
    Search(SearchShape),
    Empty(EmptyKind),
    /// Non-empty array or object
    Structured(&'a Value),
    Text(&'a str),
    /// Boolean or number
    Scalar(&'a Value),
}

impl<'a> ResultShape<'a> {
    /// Classify a success value.
    ///
    /// A `{"result": inner}` envelope with no other keys is removed once
    /// before classification. Nested envelopes are left alone.
    pub fn classify(value: &'a Value) -> Self {
        let inner = unwrap_result_envelope(value);

        if let Some(search) = SearchShape::detect(inner) {
            return ResultShape::Search(search);
        }

        match inner {
            Value::Null => ResultShape::Empty(EmptyKind::Result),
            Value::String(s) if s.trim().is_empty() => ResultShape::Empty(EmptyKind::Result),
            Value::Array(items) if items.is_empty() => ResultShape::Empty(EmptyKind::List),
            Value::Object(map) if map.is_empty() => ResultShape::Empty(EmptyKind::Object),
            Value::Array(_) | Value::Object(_) => ResultShape::Structured(inner),
            Value::String(s) => ResultShape::Text(s),
            Value::Bool(_) | Value::Number(_) => ResultShape::Scalar(inner),
        }
    }

    pub fn render(&self, tool_name: &str) -> String {
        match self {
            ResultShape::Search(search) => search.render(tool_name),
            ResultShape::Empty(kind) => {
                format!("Tool {tool_name} executed successfully ({})", kind.label())
            }
            ResultShape::Structured(value) => {
                let pretty =
                    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
                format!("Tool {tool_name} executed successfully:\n{pretty}")
            }
            ResultShape::Text(text) => format!("Tool {tool_name} executed successfully:\n{text}"),
            ResultShape::Scalar(value) => format!("Tool {tool_name} executed successfully: {value}"),
        }
    }
}

fn unwrap_result_envelope(value: &Value) -> &Value {
    match value {
        Value::Object(map) if map.len() == 1 => map.get("result").unwrap_or(value),
        _ => value,
    }
}

/// Render a successful value for `tool_name`.
pub fn render_success(tool_name: &str, value: &Value) -> String {
    ResultShape::classify(value).render(tool_name)
}

/// Render a failure. Elapsed time is appended when known.
pub fn render_failure(tool_name: &str, error_message: &str, elapsed_seconds: Option<f64>) -> String {
    match elapsed_seconds {
        Some(elapsed) => format!("Tool {tool_name} failed: {error_message} (after {elapsed:.2}s)"),
        None => format!("Tool {tool_name} failed: {error_message}"),
    }
}

/// Render an outcome into model-readable text.
pub fn render_outcome(outcome: &ExecutionOutcome) -> String {
    if outcome.succeeded {
        render_success(&outcome.tool_identifier, &outcome.value)
    } else {
        render_failure(
            &outcome.tool_identifier,
            outcome.error_text(),
            outcome.elapsed_seconds,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::DispatchError;
    use serde_json::json;

    fn success(value: Value) -> String {
        render_outcome(&ExecutionOutcome::success("my_tool", value, 0.1))
    }

    #[test]
    fn test_failure_ignores_value() {
        let mut outcome =
            ExecutionOutcome::failure("my_tool", &DispatchError::backend("disk full"), Some(1.234));
        outcome.value = json!({"web": {"results": [{"title": "leak"}]}});

        let text = render_outcome(&outcome);
        assert_eq!(text, "Tool my_tool failed: disk full (after 1.23s)");
    }

    #[test]
    fn test_failure_without_elapsed() {
        let outcome = ExecutionOutcome::failure("ghost", &DispatchError::unknown_tool("ghost"), None);
        assert_eq!(
            render_outcome(&outcome),
            "Tool ghost failed: Function ghost not found in tool mapping"
        );
    }

    #[test]
    fn test_result_envelope_unwrapped_once() {
        let text = success(json!({"result": {"result": "x"}}));
        assert_eq!(
            text,
            "Tool my_tool executed successfully:\n{\n  \"result\": \"x\"\n}"
        );

        assert_eq!(
            ResultShape::classify(&json!({"result": "done"})),
            ResultShape::Text("done")
        );
    }

    #[test]
    fn test_multi_key_not_unwrapped() {
        let value = json!({"a": 1, "b": 2});
        assert_eq!(ResultShape::classify(&value), ResultShape::Structured(&value));

        let with_result = json!({"result": 1, "meta": 2});
        assert_eq!(
            ResultShape::classify(&with_result),
            ResultShape::Structured(&with_result)
        );
    }

    #[test]
    fn test_empty_shapes_distinct() {
        assert_eq!(success(json!([])), "Tool my_tool executed successfully (empty list)");
        assert_eq!(success(json!({})), "Tool my_tool executed successfully (empty object)");
        assert_eq!(success(json!("  ")), "Tool my_tool executed successfully (empty result)");
        assert_eq!(success(Value::Null), "Tool my_tool executed successfully (empty result)");
        assert_eq!(
            success(json!({"result": []})),
            "Tool my_tool executed successfully (empty list)"
        );
    }

    #[test]
    fn test_scalar_and_text() {
        assert_eq!(success(json!(42)), "Tool my_tool executed successfully: 42");
        assert_eq!(success(json!(true)), "Tool my_tool executed successfully: true");
        assert_eq!(
            success(json!("line one\nline two")),
            "Tool my_tool executed successfully:\nline one\nline two"
        );
    }

    #[test]
    fn test_list_pretty_printed() {
        let text = success(json!([1, 2]));
        assert_eq!(text, "Tool my_tool executed successfully:\n[\n  1,\n  2\n]");
    }

    #[test]
    fn test_search_shape_detected_through_envelope() {
        let value = json!({"result": {"web": {"results": [{"title": "A", "url": "u", "description": "d"}]}}});
        let text = success(value);
        assert!(text.starts_with("Tool my_tool found 1 results:"));
        assert!(text.contains("1. **A**"));
    }

    #[test]
    fn test_non_ascii_kept_verbatim() {
        let text = success(json!({"city": "Zürich"}));
        assert!(text.contains("Zürich"));
    }
}
