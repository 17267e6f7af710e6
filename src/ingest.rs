//! Schema ingestion: nested tool definition -> flat field collection.
//!
//! Inverse of [`generate`](crate::generate). Ingestion is staged: the whole
//! input is parsed into a [`ParsedSchema`] before any live editor state is
//! touched, so a bad document can be rejected without leaving the editor
//! half-populated.
//!
//! Shape problems are not errors. A schema with missing or wrong-typed
//! `properties`/`required` degrades to "no fields at that level" - the only
//! hard failure in this module is syntactically invalid JSON on the
//! raw-text path, which surfaces as [`Error::Json`](crate::Error::Json).

use crate::error::Result;
use crate::field::{FieldPath, FieldType};
use crate::store::FieldStore;
use serde_json::Value;

/// Fully parsed tool definition, staged before replacing live state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSchema {
    /// Top-level tool/function name.
    pub name: String,
    /// Top-level description.
    pub description: String,
    /// Flat field collection rebuilt from `parameters.properties`.
    pub store: FieldStore,
}

/// Parse a nested tool-definition value into a fresh flat collection.
///
/// Walks `parameters.properties` in document order, assigning each entry
/// the next available path under its parent. An entry is required iff its
/// name appears in the enclosing level's `required` array. Object entries
/// recurse into their own `properties`.
pub fn parse_tool_schema(schema: &Value) -> ParsedSchema {
    let name = schema
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let description = schema
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let mut store = FieldStore::new();
    if let Some(parameters) = schema.get("parameters") {
        ingest_level(&mut store, None, parameters);
    }

    ParsedSchema {
        name,
        description,
        store,
    }
}

/// Parse edited raw text into a staged schema.
///
/// Invalid JSON is rejected without producing a partial result; the caller
/// keeps its previous in-memory state and reports the parse error.
pub fn parse_raw_schema(text: &str) -> Result<ParsedSchema> {
    let value: Value = serde_json::from_str(text)?;
    Ok(parse_tool_schema(&value))
}

/// Decode a `jsonSchema` payload that may arrive either as an
/// already-parsed object or as a JSON-encoded string, depending on the
/// integration point.
pub fn decode_schema_value(value: &Value) -> Result<Value> {
    match value {
        Value::String(raw) => Ok(serde_json::from_str(raw)?),
        other => Ok(other.clone()),
    }
}

/// Ingest one nesting level described by `level` (an object carrying
/// `properties` and optionally `required`) under `parent`.
fn ingest_level(store: &mut FieldStore, parent: Option<&FieldPath>, level: &Value) {
    let Some(properties) = level.get("properties").and_then(Value::as_object) else {
        return;
    };

    let required_names: Vec<&str> = level
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    for (name, entry) in properties {
        let field_type = entry
            .get("type")
            .and_then(Value::as_str)
            .map(FieldType::parse)
            .unwrap_or_default();
        let description = entry
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("");
        let required = required_names.contains(&name.as_str());

        let Some(path) = store.insert_field(parent, name, field_type, description, required)
        else {
            continue;
        };

        if field_type.is_object() {
            ingest_level(store, Some(&path), entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ingest_single_required_field() {
        let schema = json!({
            "name": "get_weather",
            "description": "",
            "parameters": {
                "type": "object",
                "properties": {
                    "location": {"type": "string", "description": "city name"}
                },
                "required": ["location"]
            }
        });

        let parsed = parse_tool_schema(&schema);
        assert_eq!(parsed.name, "get_weather");
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.store.len(), 1);

        let field = parsed.store.iter().next().unwrap();
        assert_eq!(field.name, "location");
        assert_eq!(field.field_type, FieldType::String);
        assert_eq!(field.description, "city name");
        assert!(field.required);
        assert!(field.path.is_root_level());
    }

    #[test]
    fn test_ingest_without_properties_yields_empty_store() {
        let parsed = parse_tool_schema(&json!({"parameters": {}}));
        assert!(parsed.store.is_empty());
    }

    #[test]
    fn test_ingest_wrong_typed_properties_yields_empty_store() {
        let parsed = parse_tool_schema(&json!({"parameters": {"properties": 5}}));
        assert!(parsed.store.is_empty());
    }

    #[test]
    fn test_ingest_tolerates_wrong_typed_required() {
        let schema = json!({
            "parameters": {
                "properties": {"city": {"type": "string"}},
                "required": "city"
            }
        });

        let parsed = parse_tool_schema(&schema);
        assert_eq!(parsed.store.len(), 1);
        assert!(!parsed.store.iter().next().unwrap().required);
    }

    #[test]
    fn test_ingest_nested_object() {
        let schema = json!({
            "name": "make_order",
            "parameters": {
                "type": "object",
                "properties": {
                    "address": {
                        "type": "object",
                        "description": "shipping address",
                        "properties": {
                            "city": {"type": "string"},
                            "zip": {"type": "string"}
                        },
                        "required": ["city"]
                    }
                },
                "required": []
            }
        });

        let parsed = parse_tool_schema(&schema);
        assert_eq!(parsed.store.len(), 3);

        let address = parsed
            .store
            .iter()
            .find(|f| f.name == "address")
            .unwrap()
            .clone();
        assert_eq!(address.field_type, FieldType::Object);

        let city = parsed.store.iter().find(|f| f.name == "city").unwrap();
        assert!(city.path.is_child_of(&address.path));
        assert!(city.required);

        let zip = parsed.store.iter().find(|f| f.name == "zip").unwrap();
        assert!(!zip.required);
    }

    #[test]
    fn test_ingest_preserves_property_order() {
        let schema = json!({
            "parameters": {
                "properties": {
                    "zeta": {"type": "string"},
                    "alpha": {"type": "number"},
                    "mid": {"type": "boolean"}
                }
            }
        });

        let parsed = parse_tool_schema(&schema);
        let names: Vec<&str> = parsed.store.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_ingest_missing_type_defaults_to_string() {
        let schema = json!({
            "parameters": {
                "properties": {"note": {"description": "free text"}}
            }
        });

        let parsed = parse_tool_schema(&schema);
        assert_eq!(
            parsed.store.iter().next().unwrap().field_type,
            FieldType::String
        );
    }

    #[test]
    fn test_parse_raw_schema_rejects_invalid_json() {
        let result = parse_raw_schema("{not json");
        assert!(matches!(result, Err(crate::Error::Json(_))));
    }

    #[test]
    fn test_parse_raw_schema_accepts_valid_json() {
        let parsed = parse_raw_schema(
            r#"{"name": "t", "parameters": {"properties": {"a": {"type": "integer"}}}}"#,
        )
        .unwrap();
        assert_eq!(parsed.name, "t");
        assert_eq!(parsed.store.len(), 1);
    }

    #[test]
    fn test_decode_schema_value_object_passthrough() {
        let value = json!({"name": "t", "parameters": {}});
        assert_eq!(decode_schema_value(&value).unwrap(), value);
    }

    #[test]
    fn test_decode_schema_value_string_is_decoded_first() {
        let encoded = json!("{\"name\": \"t\"}");
        assert_eq!(decode_schema_value(&encoded).unwrap(), json!({"name": "t"}));
    }

    #[test]
    fn test_decode_schema_value_invalid_string_errors() {
        let encoded = json!("{broken");
        assert!(matches!(
            decode_schema_value(&encoded),
            Err(crate::Error::Json(_))
        ));
    }
}
