//! Foreign parameter schemas as a typed tree.
//!
//! Tool sources describe parameters with JSON Schema shaped objects, but
//! third-party servers are loose about it: `type` may be missing or an array,
//! properties may hold non-object junk, `required` may name properties that do
//! not exist. [`SchemaNode::parse`] accepts all of that and reports what it had
//! to drop as [`SchemaIssue`]s instead of failing.

use crate::core::error::{SchemaError, json_type_name};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Maximum nesting depth accepted when parsing a schema.
pub const MAX_SCHEMA_DEPTH: usize = 32;

/// Parameter type of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl SchemaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::String => "string",
            SchemaKind::Integer => "integer",
            SchemaKind::Number => "number",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Array => "array",
            SchemaKind::Object => "object",
        }
    }

    /// Parse a native type name. Returns `None` for anything outside the
    /// supported set (`"null"`, `"date"`, custom names, ...).
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "string" => Some(SchemaKind::String),
            "integer" => Some(SchemaKind::Integer),
            "number" => Some(SchemaKind::Number),
            "boolean" => Some(SchemaKind::Boolean),
            "array" => Some(SchemaKind::Array),
            "object" => Some(SchemaKind::Object),
            _ => None,
        }
    }

    /// Map a native type name, defaulting unsupported names to `String`.
    pub fn from_native(name: &str) -> Self {
        Self::parse(name).unwrap_or(SchemaKind::String)
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One node of a parameter schema.
///
/// `items` is only ever set when `kind` is [`SchemaKind::Array`];
/// `properties` and `required` are only populated for [`SchemaKind::Object`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    pub kind: SchemaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, SchemaNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
}

/// Something the lenient parser dropped or coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    /// Dotted path to the offending node (`$` is the root).
    pub path: String,
    pub reason: String,
}

/// A parsed schema together with the issues found while parsing it.
#[derive(Debug, Clone)]
pub struct ParsedSchema {
    pub node: SchemaNode,
    pub issues: Vec<SchemaIssue>,
}

impl SchemaNode {
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            description: None,
            items: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
            enum_values: None,
        }
    }

    /// An object schema with no properties.
    pub fn empty_object() -> Self {
        Self::new(SchemaKind::Object)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.properties.insert(name.into(), node);
        self
    }

    pub fn with_required(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.required.contains(&name) {
            self.required.push(name);
        }
        self
    }

    pub fn with_items(mut self, items: SchemaNode) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    pub fn with_enum(mut self, values: Vec<Value>) -> Self {
        self.enum_values = Some(values);
        self
    }

    /// Whether this node declares a property with the given name.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Parse a schema fragment, discarding the issue list.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        Self::parse(value).map(|parsed| parsed.node)
    }

    /// Parse a schema fragment leniently.
    ///
    /// Only the root itself can fail (non-object root, excessive depth);
    /// failures below the root drop the offending property or `items`
    /// and are reported in [`ParsedSchema::issues`].
    pub fn parse(value: &Value) -> Result<ParsedSchema, SchemaError> {
        let mut issues = Vec::new();
        let node = parse_node(value, "$", 0, &mut issues)?;
        Ok(ParsedSchema { node, issues })
    }

    /// Parse a tool's top-level parameter schema.
    ///
    /// Function parameters are always an object: an absent or empty schema
    /// yields an empty object, an unparsable one falls back to an empty
    /// object, and a root of another kind is coerced to object.
    pub fn parse_parameters(value: &Value) -> ParsedSchema {
        let is_blank = match value {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        };
        if is_blank {
            return ParsedSchema {
                node: Self::empty_object(),
                issues: Vec::new(),
            };
        }

        match Self::parse(value) {
            Ok(mut parsed) => {
                if parsed.node.kind != SchemaKind::Object {
                    parsed.issues.push(SchemaIssue {
                        path: "$".to_string(),
                        reason: format!(
                            "top-level kind '{}' coerced to object",
                            parsed.node.kind
                        ),
                    });
                    let description = parsed.node.description.take();
                    parsed.node = Self::empty_object();
                    parsed.node.description = description;
                }
                parsed
            }
            Err(e) => ParsedSchema {
                node: Self::empty_object(),
                issues: vec![SchemaIssue {
                    path: "$".to_string(),
                    reason: e.to_string(),
                }],
            },
        }
    }
}

fn parse_node(
    value: &Value,
    path: &str,
    depth: usize,
    issues: &mut Vec<SchemaIssue>,
) -> Result<SchemaNode, SchemaError> {
    if depth > MAX_SCHEMA_DEPTH {
        return Err(SchemaError::TooDeep {
            max_depth: MAX_SCHEMA_DEPTH,
        });
    }

    let map = match value {
        Value::Object(map) => map,
        // `true` accepts any value
        Value::Bool(true) => return Ok(SchemaNode::new(SchemaKind::String)),
        other => {
            return Err(SchemaError::NotAnObject {
                found: json_type_name(other),
            });
        }
    };

    let kind = resolve_kind(map);
    let mut node = SchemaNode::new(kind);

    node.description = map
        .get("description")
        .and_then(Value::as_str)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    if let Some(values) = map.get("enum") {
        match values {
            Value::Array(values) => node.enum_values = Some(values.clone()),
            other => issues.push(SchemaIssue {
                path: path.to_string(),
                reason: format!("enum must be an array, found {}", json_type_name(other)),
            }),
        }
    }

    match kind {
        SchemaKind::Object => parse_object_body(map, &mut node, path, depth, issues),
        SchemaKind::Array => {
            if let Some(items) = map.get("items") {
                let items_path = format!("{path}[]");
                match parse_node(items, &items_path, depth + 1, issues) {
                    Ok(items) => node.items = Some(Box::new(items)),
                    Err(e) => issues.push(SchemaIssue {
                        path: items_path,
                        reason: e.to_string(),
                    }),
                }
            }
        }
        _ => {}
    }

    Ok(node)
}

fn parse_object_body(
    map: &serde_json::Map<String, Value>,
    node: &mut SchemaNode,
    path: &str,
    depth: usize,
    issues: &mut Vec<SchemaIssue>,
) {
    match map.get("properties") {
        Some(Value::Object(properties)) => {
            for (name, schema) in properties {
                let prop_path = format!("{path}.{name}");
                match parse_node(schema, &prop_path, depth + 1, issues) {
                    Ok(prop) => {
                        node.properties.insert(name.clone(), prop);
                    }
                    Err(e) => issues.push(SchemaIssue {
                        path: prop_path,
                        reason: e.to_string(),
                    }),
                }
            }
        }
        Some(Value::Null) | None => {}
        Some(other) => issues.push(SchemaIssue {
            path: path.to_string(),
            reason: format!(
                "properties must be an object, found {}",
                json_type_name(other)
            ),
        }),
    }

    if let Some(Value::Array(required)) = map.get("required") {
        for name in required.iter().filter_map(Value::as_str) {
            if !node.properties.contains_key(name) {
                issues.push(SchemaIssue {
                    path: path.to_string(),
                    reason: format!("required entry '{name}' names no declared property"),
                });
                continue;
            }
            if !node.required.iter().any(|r| r == name) {
                node.required.push(name.to_string());
            }
        }
    }
}

/// Work out a node's kind from its `type` field, falling back to structural
/// hints when the field is absent.
fn resolve_kind(map: &serde_json::Map<String, Value>) -> SchemaKind {
    match map.get("type") {
        Some(Value::String(name)) => SchemaKind::from_native(name),
        // ["string", "null"] style unions: first non-null member wins
        Some(Value::Array(names)) => names
            .iter()
            .filter_map(Value::as_str)
            .find(|name| *name != "null")
            .map(SchemaKind::from_native)
            .unwrap_or(SchemaKind::String),
        Some(_) => SchemaKind::String,
        None if map.contains_key("properties") => SchemaKind::Object,
        None if map.contains_key("items") => SchemaKind::Array,
        None => SchemaKind::String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_from_native() {
        assert_eq!(SchemaKind::from_native("integer"), SchemaKind::Integer);
        assert_eq!(SchemaKind::from_native("object"), SchemaKind::Object);
        assert_eq!(SchemaKind::from_native("date-time"), SchemaKind::String);
        assert_eq!(SchemaKind::from_native("null"), SchemaKind::String);
        assert!(SchemaKind::parse("tuple").is_none());
    }

    #[test]
    fn test_parse_nested_object() {
        let schema = json!({
            "type": "object",
            "description": "Search options",
            "properties": {
                "query": {"type": "string", "description": "What to search for"},
                "limit": {"type": "integer"},
                "filters": {
                    "type": "object",
                    "properties": {
                        "lang": {"type": "string", "enum": ["en", "de"]}
                    }
                },
                "tags": {"type": "array", "items": {"type": "string"}}
            },
            "required": ["query"]
        });

        let parsed = SchemaNode::parse(&schema).unwrap();
        assert!(parsed.issues.is_empty());

        let node = parsed.node;
        assert_eq!(node.kind, SchemaKind::Object);
        assert_eq!(node.description.as_deref(), Some("Search options"));
        assert_eq!(node.required, vec!["query".to_string()]);
        assert_eq!(node.properties["limit"].kind, SchemaKind::Integer);

        let lang = &node.properties["filters"].properties["lang"];
        assert_eq!(lang.enum_values, Some(vec![json!("en"), json!("de")]));

        let tags = &node.properties["tags"];
        assert_eq!(tags.kind, SchemaKind::Array);
        assert_eq!(tags.items.as_ref().unwrap().kind, SchemaKind::String);
    }

    #[test]
    fn test_non_object_property_is_dropped() {
        let schema = json!({
            "type": "object",
            "properties": {
                "good": {"type": "string"},
                "bad": 42
            },
            "required": ["good", "bad"]
        });

        let parsed = SchemaNode::parse(&schema).unwrap();
        assert!(parsed.node.has_property("good"));
        assert!(!parsed.node.has_property("bad"));
        // "bad" is gone, so it can no longer be required
        assert_eq!(parsed.node.required, vec!["good".to_string()]);
        assert!(parsed.issues.iter().any(|i| i.path == "$.bad"));
    }

    #[test]
    fn test_boolean_property_schemas() {
        let schema = json!({
            "type": "object",
            "properties": {
                "user_id": true,
                "anything": {},
                "never": false
            },
            "required": ["user_id", "never"]
        });

        let parsed = SchemaNode::parse(&schema).unwrap();
        assert_eq!(parsed.node.properties["user_id"], SchemaNode::new(SchemaKind::String));
        assert_eq!(parsed.node.properties["anything"].kind, SchemaKind::String);
        assert!(!parsed.node.has_property("never"));
        assert_eq!(parsed.node.required, vec!["user_id".to_string()]);
        assert!(parsed.issues.iter().any(|i| i.path == "$.never"));
    }

    #[test]
    fn test_type_union_picks_first_non_null() {
        let node = SchemaNode::from_value(&json!({"type": ["null", "integer"]})).unwrap();
        assert_eq!(node.kind, SchemaKind::Integer);
    }

    #[test]
    fn test_missing_type_inferred_from_structure() {
        let object = SchemaNode::from_value(&json!({"properties": {"a": {}}})).unwrap();
        assert_eq!(object.kind, SchemaKind::Object);
        // a property with no type at all defaults to string
        assert_eq!(object.properties["a"].kind, SchemaKind::String);

        let array = SchemaNode::from_value(&json!({"items": {"type": "number"}})).unwrap();
        assert_eq!(array.kind, SchemaKind::Array);
    }

    #[test]
    fn test_array_without_items() {
        let node = SchemaNode::from_value(&json!({"type": "array"})).unwrap();
        assert_eq!(node.kind, SchemaKind::Array);
        assert!(node.items.is_none());
    }

    #[test]
    fn test_items_ignored_for_non_array() {
        let node =
            SchemaNode::from_value(&json!({"type": "string", "items": {"type": "string"}}))
                .unwrap();
        assert!(node.items.is_none());
    }

    #[test]
    fn test_excessive_depth_drops_subtree() {
        let mut schema = json!({"type": "string"});
        for _ in 0..(MAX_SCHEMA_DEPTH + 5) {
            schema = json!({"type": "object", "properties": {"inner": schema}});
        }

        let parsed = SchemaNode::parse(&schema).unwrap();
        assert!(
            parsed
                .issues
                .iter()
                .any(|i| i.reason.contains("nesting exceeds"))
        );
    }

    #[test]
    fn test_parse_parameters_blank() {
        for blank in [json!(null), json!({})] {
            let parsed = SchemaNode::parse_parameters(&blank);
            assert_eq!(parsed.node, SchemaNode::empty_object());
            assert!(parsed.issues.is_empty());
        }
    }

    #[test]
    fn test_parse_parameters_invalid_root_falls_back() {
        let parsed = SchemaNode::parse_parameters(&json!("not a schema"));
        assert_eq!(parsed.node, SchemaNode::empty_object());
        assert_eq!(parsed.issues.len(), 1);
    }

    #[test]
    fn test_parse_parameters_coerces_root_kind() {
        let parsed = SchemaNode::parse_parameters(&json!({"type": "string"}));
        assert_eq!(parsed.node.kind, SchemaKind::Object);
        assert!(parsed.issues[0].reason.contains("coerced"));
    }

    #[test]
    fn test_serde_roundtrip_omits_empty_fields() {
        let node = SchemaNode::new(SchemaKind::Boolean);
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value, json!({"kind": "boolean"}));
    }
}
