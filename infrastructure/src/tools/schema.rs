//! Function-calling schema converter.
//!
//! Default implementation of [`ToolSchemaPort`] that produces the
//! upper-case typed schema used by function-calling model APIs.

use bridge_application::ports::tool_schema::ToolSchemaPort;
use bridge_domain::schema::{SchemaNode, TargetSchema, TargetType};

/// Default implementation producing function-calling schemas.
///
/// Kind mapping:
/// - `string` → `STRING`
/// - `integer` → `INTEGER`
/// - `number` → `NUMBER`
/// - `boolean` → `BOOLEAN`
/// - `array` → `ARRAY` (with `items` when the source gave one)
/// - `object` → `OBJECT` (always with `properties`, possibly empty)
///
/// Unsupported native types were already mapped to `string` while parsing.
pub struct FunctionSchemaConverter;

impl ToolSchemaPort for FunctionSchemaConverter {
    fn translate(&self, node: &SchemaNode) -> TargetSchema {
        let mut target = TargetSchema::new(TargetType::from(node.kind));
        target.description = node.description.clone();
        target.enum_values = node.enum_values.clone();

        match target.schema_type {
            TargetType::Object => {
                let properties = node
                    .properties
                    .iter()
                    .map(|(name, child)| (name.clone(), self.translate(child)))
                    .collect();
                target.properties = Some(properties);
                target.required = node
                    .required
                    .iter()
                    .filter(|name| node.properties.contains_key(name.as_str()))
                    .cloned()
                    .collect();
            }
            TargetType::Array => {
                target.items = node.items.as_ref().map(|items| Box::new(self.translate(items)));
            }
            _ => {}
        }

        target
    }
}
