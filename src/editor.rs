//! # Schema Tree Editor
//!
//! The [`SchemaEditor`] is the stateful façade the rest of the system talks
//! to. It owns the flat [`FieldStore`] plus the top-level tool metadata
//! (function name, description, externally supplied base required list) and
//! keeps a derived nested schema in sync with them.
//!
//! ## Model
//!
//! ```text
//! mutations (add/update/delete/ingest)
//!        |
//!        v
//!   FieldStore  --- regenerate (pure, full recompute) --->  schema: Value
//! ```
//!
//! The flat store is the single owned collection; the nested schema is a
//! disposable projection recomputed after every mutation. Nothing ever
//! patches the projection in place, so the two cannot drift.
//!
//! ## Cascade rule
//!
//! A field's type is the only attribute whose change has structural
//! consequences. [`SchemaEditor::update_field`] is the single place that
//! enforces it: when a field's type stops being `object`, its whole
//! descendant subtree is removed in the same logical step, before the next
//! regeneration. The store primitives never cascade on their own.
//!
//! ## Example
//!
//! ```rust
//! use toolforge::{FieldType, FieldUpdate, SchemaEditor};
//!
//! let mut editor = SchemaEditor::new();
//! editor.set_function_name("get_weather");
//!
//! let location = editor.add_root_field().unwrap();
//! editor.update_field(
//!     &location,
//!     FieldUpdate::new("location", FieldType::String, "city name", true),
//! );
//!
//! let schema = editor.schema();
//! assert_eq!(schema["name"], "get_weather");
//! assert_eq!(schema["parameters"]["required"][0], "location");
//! ```

use crate::error::Result;
use crate::field::{FieldPath, FieldUpdate};
use crate::generate::generate_tool_schema;
use crate::ingest::{ParsedSchema, parse_raw_schema, parse_tool_schema};
use crate::store::FieldStore;
use crate::types::{ToolPayload, ToolRecord};
use serde_json::Value;

/// Stateful editor for one tool definition.
///
/// Single-threaded by design: every mutation runs to completion before the
/// next regeneration, mirroring the one-event-at-a-time UI model it backs.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaEditor {
    store: FieldStore,
    function_name: String,
    description: String,
    base_required: Vec<String>,
    schema: Value,
}

impl Default for SchemaEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaEditor {
    /// Create an empty editor. The projection starts as an empty-but-valid
    /// tool definition.
    pub fn new() -> Self {
        let mut editor = Self {
            store: FieldStore::new(),
            function_name: String::new(),
            description: String::new(),
            base_required: Vec::new(),
            schema: Value::Null,
        };
        editor.regenerate();
        editor
    }

    /// Create an editor populated from an externally supplied nested
    /// schema. Malformed structure degrades to an empty field collection.
    pub fn from_schema(schema: &Value) -> Self {
        let mut editor = Self::new();
        editor.load_schema(schema);
        editor
    }

    /// Create an editor from a remote tool record, decoding the
    /// string-encoded `jsonSchema` case first.
    ///
    /// The schema's own top-level name/description win; the record's
    /// columns fill in when the schema carries none.
    pub fn from_record(record: &ToolRecord) -> Result<Self> {
        let schema = record.decoded_schema()?;
        let mut editor = Self::from_schema(&schema);
        if editor.function_name.is_empty() {
            editor.function_name = record.name.clone();
            editor.regenerate();
        }
        if editor.description.is_empty() {
            if let Some(description) = &record.description {
                editor.description = description.clone();
                editor.regenerate();
            }
        }
        Ok(editor)
    }

    // --- mutations -------------------------------------------------------

    /// Add a new field at the top level. Returns its path.
    pub fn add_root_field(&mut self) -> Option<FieldPath> {
        let path = self.store.add_field(None)?;
        self.regenerate();
        Some(path)
    }

    /// Add a new field under `parent`. No-op returning `None` when the
    /// parent is stale or not an `object` field.
    pub fn add_nested_field(&mut self, parent: &FieldPath) -> Option<FieldPath> {
        let path = self.store.add_field(Some(parent))?;
        self.regenerate();
        Some(path)
    }

    /// Update a field's attributes. This is the single cascade point: when
    /// the type changes away from `object`, every descendant is removed
    /// before the projection is regenerated. A stale path is a silent
    /// no-op returning `false`.
    pub fn update_field(&mut self, path: &FieldPath, update: FieldUpdate) -> bool {
        let was_object = match self.store.get(path) {
            Some(field) => field.field_type.is_object(),
            None => return false,
        };
        let strips_children = was_object && !update.field_type.is_object();

        if !self.store.update_field(path, update) {
            return false;
        }
        if strips_children {
            self.store.remove_children(path);
        }
        self.regenerate();
        true
    }

    /// Delete a field and its whole subtree. Stale paths are a no-op.
    pub fn delete_field(&mut self, path: &FieldPath) {
        self.store.delete_field(path);
        self.regenerate();
    }

    /// Set the top-level function name.
    pub fn set_function_name(&mut self, name: impl Into<String>) {
        self.function_name = name.into();
        self.regenerate();
    }

    /// Set the top-level description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.regenerate();
    }

    /// Set the externally supplied base required list, merged into the
    /// root `required` array ahead of the per-field flags.
    pub fn set_base_required(&mut self, names: Vec<String>) {
        self.base_required = names;
        self.regenerate();
    }

    // --- ingestion -------------------------------------------------------

    /// Replace the editor's contents from a nested schema object.
    ///
    /// Atomic full replacement, never an incremental merge: the previous
    /// field collection, name, description, and base required list are all
    /// discarded. Malformed structure degrades to "no fields".
    pub fn load_schema(&mut self, schema: &Value) {
        self.apply_parsed(parse_tool_schema(schema));
    }

    /// Re-ingest from edited raw text.
    ///
    /// Staged: the text is fully parsed before any live state is replaced.
    /// On invalid JSON the previous state is left untouched and the parse
    /// error is returned to the caller.
    pub fn apply_raw_edit(&mut self, text: &str) -> Result<()> {
        let parsed = parse_raw_schema(text)?;
        self.apply_parsed(parsed);
        Ok(())
    }

    fn apply_parsed(&mut self, parsed: ParsedSchema) {
        self.store = parsed.store;
        self.function_name = parsed.name;
        self.description = parsed.description;
        // Root-level requiredness now lives on the ingested fields.
        self.base_required.clear();
        self.regenerate();
    }

    // --- projection ------------------------------------------------------

    /// The latest generated schema. Always consistent with the store.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Pretty-printed schema text, for the raw-edit surface.
    pub fn raw_text(&self) -> String {
        serde_json::to_string_pretty(&self.schema).unwrap_or_default()
    }

    /// The save body for the remote store, taken from the latest
    /// projection.
    pub fn save_payload(&self) -> ToolPayload {
        ToolPayload {
            name: self.function_name.clone(),
            description: (!self.description.is_empty()).then(|| self.description.clone()),
            json_schema: self.schema.clone(),
        }
    }

    /// The authoritative flat collection.
    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn base_required(&self) -> &[String] {
        &self.base_required
    }

    /// Full recomputation of the projection. Pure function of the store
    /// plus top-level metadata, so repeated calls are byte-identical.
    fn regenerate(&mut self) {
        self.schema = generate_tool_schema(
            &self.store,
            &self.function_name,
            &self.description,
            &self.base_required,
        );
    }
}
