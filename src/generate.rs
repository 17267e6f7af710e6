//! Schema generation: flat field collection -> nested tool definition.
//!
//! The generated schema is a derived, disposable projection. It is fully
//! recomputed from the store on every call - never patched incrementally -
//! so two calls with no intervening mutation are byte-identical, and the
//! flat store stays the single source of truth.
//!
//! ## Output shape
//!
//! ```json
//! {
//!   "name": "get_weather",
//!   "description": "Get current weather",
//!   "parameters": {
//!     "type": "object",
//!     "properties": {
//!       "location": {"type": "string", "description": "city name"}
//!     },
//!     "required": ["location"]
//!   }
//! }
//! ```
//!
//! Property order follows the store's insertion order. The root `required`
//! array is always emitted (it is the union of the caller's base list and
//! the required flags of root-level fields); nested levels omit `required`
//! entirely when no child is required.

use crate::field::FieldPath;
use crate::store::FieldStore;
use serde_json::{Map, Value, json};

/// Build the full OpenAI-compatible tool descriptor from the store.
///
/// `base_required` is an externally supplied list of root-level required
/// names merged (deduplicated, base names first) with the computed list.
pub fn generate_tool_schema(
    store: &FieldStore,
    name: &str,
    description: &str,
    base_required: &[String],
) -> Value {
    let (properties, computed_required) = build_level(store, None);

    let mut required: Vec<String> = base_required.to_vec();
    for field_name in computed_required {
        if !required.contains(&field_name) {
            required.push(field_name);
        }
    }

    json!({
        "name": name,
        "description": description,
        "parameters": {
            "type": "object",
            "properties": properties,
            "required": required,
        }
    })
}

/// Build one nesting level: the `properties` map and required-name list for
/// all fields whose parent is `parent` (root level when `None`).
fn build_level(
    store: &FieldStore,
    parent: Option<&FieldPath>,
) -> (Map<String, Value>, Vec<String>) {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for field in store.children_of(parent) {
        if field.required {
            required.push(field.name.clone());
        }

        let schema = if field.field_type.is_object() {
            // Recurse into this field's children. An object with no
            // children still carries an empty `properties` key; leaves
            // never carry one.
            let (child_properties, child_required) = build_level(store, Some(&field.path));
            let mut object_schema = Map::new();
            object_schema.insert("type".to_string(), json!("object"));
            object_schema.insert("description".to_string(), json!(field.description));
            object_schema.insert("properties".to_string(), Value::Object(child_properties));
            if !child_required.is_empty() {
                object_schema.insert("required".to_string(), json!(child_required));
            }
            Value::Object(object_schema)
        } else {
            json!({
                "type": field.field_type.as_str(),
                "description": field.description,
            })
        };

        properties.insert(field.name.clone(), schema);
    }

    (properties, required)
}
