//! Wire types exchanged with the remote tool store.
//!
//! The remote store keeps one record per tool; its `jsonSchema` column is
//! the generated tool definition. Depending on the integration point the
//! schema arrives either as a parsed object or as a JSON-encoded string,
//! so the record keeps it as a raw [`Value`] and decodes on demand.

use crate::error::Result;
use crate::ingest::decode_schema_value;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool record as stored remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    pub id: String,
    pub project_id: String,
    pub name: String,
    /// Generated tool definition; either a parsed object or a JSON-encoded
    /// string of one.
    pub json_schema: Value,
    pub description: Option<String>,
}

impl ToolRecord {
    /// The tool definition with the string-encoded case decoded first.
    pub fn decoded_schema(&self) -> Result<Value> {
        decode_schema_value(&self.json_schema)
    }
}

/// Body of a tool save (POST /tools/{id}).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub json_schema: Value,
}

/// Paged collection envelope the remote store wraps list responses in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_record_camel_case() {
        let record: ToolRecord = serde_json::from_value(json!({
            "id": "tool-123",
            "projectId": "project-456",
            "name": "get_weather",
            "jsonSchema": {"name": "get_weather", "parameters": {}},
            "description": null
        }))
        .unwrap();

        assert_eq!(record.project_id, "project-456");
        assert!(record.description.is_none());
    }

    #[test]
    fn test_tool_record_decodes_object_schema() {
        let record = ToolRecord {
            id: "tool-1".to_string(),
            project_id: "project-1".to_string(),
            name: "t".to_string(),
            json_schema: json!({"name": "t", "parameters": {}}),
            description: None,
        };

        let decoded = record.decoded_schema().unwrap();
        assert_eq!(decoded["name"], "t");
    }

    #[test]
    fn test_tool_record_decodes_string_schema() {
        let record = ToolRecord {
            id: "tool-1".to_string(),
            project_id: "project-1".to_string(),
            name: "t".to_string(),
            json_schema: json!("{\"name\": \"t\", \"parameters\": {}}"),
            description: Some("a tool".to_string()),
        };

        let decoded = record.decoded_schema().unwrap();
        assert_eq!(decoded["name"], "t");
    }

    #[test]
    fn test_tool_payload_omits_null_description() {
        let payload = ToolPayload {
            name: "t".to_string(),
            description: None,
            json_schema: json!({}),
        };

        let serialized = serde_json::to_string(&payload).unwrap();
        assert!(!serialized.contains("description"));
        assert!(serialized.contains("jsonSchema"));
    }

    #[test]
    fn test_collection_response_deserialization() {
        let collection: CollectionResponse<ToolRecord> = serde_json::from_value(json!({
            "items": [{
                "id": "tool-1",
                "projectId": "project-1",
                "name": "t",
                "jsonSchema": {},
                "description": "desc"
            }],
            "page": 1,
            "pages": 3
        }))
        .unwrap();

        assert_eq!(collection.items.len(), 1);
        assert_eq!(collection.pages, 3);
    }
}
