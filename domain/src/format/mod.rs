//! Argument wire shapes
//!
//! Backends disagree on how they want arguments delivered. A [`FormatKind`]
//! names one of the shapes the bridge knows how to produce:
//!
//! | Kind | Shape for `{"q": "rust"}` |
//! |------|---------------------------|
//! | `direct` | `{"q": "rust"}` |
//! | `wrapped` | `{"params": {"q": "rust"}}` |
//! | `stringified` | `{"params": "{\"q\":\"rust\"}"}` |
//!
//! `unknown` is used when feedback has to be recorded but the shape
//! could not be determined.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tool::Arguments;

/// Key used by the wrapped and stringified shapes unless configured otherwise.
pub const DEFAULT_WRAPPER_KEY: &str = "params";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Direct,
    Wrapped,
    Stringified,
    Unknown,
}

impl FormatKind {
    /// Shapes a formatter can choose between, in preference order.
    pub const CANDIDATES: [FormatKind; 3] =
        [FormatKind::Direct, FormatKind::Wrapped, FormatKind::Stringified];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKind::Direct => "direct",
            FormatKind::Wrapped => "wrapped",
            FormatKind::Stringified => "stringified",
            FormatKind::Unknown => "unknown",
        }
    }

    /// Recover the shape of an already formatted argument map.
    pub fn infer(arguments: &Arguments, wrapper_key: &str) -> Self {
        if arguments.len() != 1 {
            return FormatKind::Direct;
        }
        match arguments.get(wrapper_key) {
            Some(Value::Object(_)) => FormatKind::Wrapped,
            Some(_) => FormatKind::Stringified,
            None => FormatKind::Direct,
        }
    }

    /// Put flat arguments into this shape.
    ///
    /// `Direct` and `Unknown` leave the arguments as they are.
    pub fn apply(&self, arguments: Arguments, wrapper_key: &str) -> Arguments {
        match self {
            FormatKind::Direct | FormatKind::Unknown => arguments,
            FormatKind::Wrapped => {
                let mut wrapped = Arguments::new();
                wrapped.insert(wrapper_key.to_string(), Value::Object(arguments));
                wrapped
            }
            FormatKind::Stringified => {
                let text = Value::Object(arguments).to_string();
                let mut wrapped = Arguments::new();
                wrapped.insert(wrapper_key.to_string(), Value::String(text));
                wrapped
            }
        }
    }
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Arguments in their final wire shape, with the shape that was used.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedArguments {
    pub arguments: Arguments,
    pub kind: FormatKind,
}

impl FormattedArguments {
    pub fn new(arguments: Arguments, kind: FormatKind) -> Self {
        Self { arguments, kind }
    }

    /// Arguments passed through untouched.
    pub fn passthrough(arguments: Arguments) -> Self {
        Self::new(arguments, FormatKind::Direct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Arguments {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_apply_shapes() {
        let flat = args(json!({"q": "rust"}));

        let wrapped = FormatKind::Wrapped.apply(flat.clone(), DEFAULT_WRAPPER_KEY);
        assert_eq!(Value::Object(wrapped), json!({"params": {"q": "rust"}}));

        let stringified = FormatKind::Stringified.apply(flat.clone(), DEFAULT_WRAPPER_KEY);
        assert_eq!(Value::Object(stringified), json!({"params": "{\"q\":\"rust\"}"}));

        assert_eq!(FormatKind::Direct.apply(flat.clone(), DEFAULT_WRAPPER_KEY), flat);
        assert_eq!(FormatKind::Unknown.apply(flat.clone(), DEFAULT_WRAPPER_KEY), flat);
    }

    #[test]
    fn test_infer() {
        let key = DEFAULT_WRAPPER_KEY;
        assert_eq!(FormatKind::infer(&args(json!({"params": {"a": 1}})), key), FormatKind::Wrapped);
        assert_eq!(FormatKind::infer(&args(json!({"params": "{}"})), key), FormatKind::Stringified);
        assert_eq!(FormatKind::infer(&args(json!({"a": 1})), key), FormatKind::Direct);
        assert_eq!(
            FormatKind::infer(&args(json!({"params": {}, "b": 2})), key),
            FormatKind::Direct
        );
        assert_eq!(FormatKind::infer(&Arguments::new(), key), FormatKind::Direct);
    }

    #[test]
    fn test_infer_inverts_apply() {
        for kind in FormatKind::CANDIDATES {
            let formatted = kind.apply(args(json!({"x": 1, "y": 2})), "body");
            assert_eq!(FormatKind::infer(&formatted, "body"), kind);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_value(FormatKind::Stringified).unwrap(), json!("stringified"));
    }
}
