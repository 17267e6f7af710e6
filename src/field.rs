//! Field data model for the schema tree.
//!
//! A schema under construction is held as a flat collection of [`Field`]
//! records rather than a nested tree. Each field is addressed by a
//! [`FieldPath`], a sequence of integers from the root, so ancestry is
//! encoded directly in the identifier: field `P` is a descendant of field
//! `Q` exactly when `P` starts with `Q`. Descendant queries and cascading
//! deletes are prefix matches instead of recursive walks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON Schema type a field can take.
///
/// This is the closed set of types the editor exposes. Unknown type strings
/// parse to `String` rather than failing, so a typo in an ingested schema
/// degrades to a string field instead of rejecting the whole document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    String,
    Number,
    Integer,
    Boolean,
    Null,
    Array,
    Object,
}

impl FieldType {
    /// The JSON Schema name for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Null => "null",
            FieldType::Array => "array",
            FieldType::Object => "object",
        }
    }

    /// Parse a type string, accepting common aliases.
    ///
    /// Accepts standard JSON Schema names plus the abbreviations people
    /// actually type (`str`, `int`, `bool`, `float`, `list`, `dict`, Rust
    /// primitive names). Anything unrecognized falls back to `string`.
    pub fn parse(s: &str) -> Self {
        match s {
            "string" | "str" => FieldType::String,
            "integer" | "int" | "i32" | "i64" | "u32" | "u64" => FieldType::Integer,
            "number" | "float" | "f32" | "f64" => FieldType::Number,
            "boolean" | "bool" => FieldType::Boolean,
            "null" | "none" => FieldType::Null,
            "array" | "list" | "vec" => FieldType::Array,
            "object" | "dict" | "map" => FieldType::Object,
            _ => FieldType::String,
        }
    }

    /// Whether fields of this type may hold child fields.
    pub fn is_object(&self) -> bool {
        matches!(self, FieldType::Object)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path-shaped field identifier: a sequence of index components from the root.
///
/// The last component is the field's own index (allocated by the store's
/// monotonic counter and never reused while the field lives); the leading
/// components are the indices of its ancestors. The empty path is not a
/// valid field identifier - root-level fields have a single component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPath(Vec<u32>);

impl FieldPath {
    /// Path for a root-level field with the given index.
    pub fn root(index: u32) -> Self {
        FieldPath(vec![index])
    }

    /// Path for a child of this field with the given index.
    pub fn child(&self, index: u32) -> Self {
        let mut components = self.0.clone();
        components.push(index);
        FieldPath(components)
    }

    /// The enclosing field's path, or `None` for root-level fields.
    pub fn parent(&self) -> Option<FieldPath> {
        if self.0.len() > 1 {
            Some(FieldPath(self.0[..self.0.len() - 1].to_vec()))
        } else {
            None
        }
    }

    /// Whether this path sits directly under the root.
    pub fn is_root_level(&self) -> bool {
        self.0.len() == 1
    }

    /// Whether `prefix` is a (non-strict) prefix of this path.
    pub fn starts_with(&self, prefix: &FieldPath) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }

    /// Strict descendant test: prefix match and strictly deeper.
    pub fn is_descendant_of(&self, ancestor: &FieldPath) -> bool {
        self.0.len() > ancestor.0.len() && self.starts_with(ancestor)
    }

    /// Direct child test: descendant exactly one level down.
    pub fn is_child_of(&self, parent: &FieldPath) -> bool {
        self.0.len() == parent.0.len() + 1 && self.starts_with(parent)
    }

    /// Nesting depth (1 for root-level fields).
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}

impl From<Vec<u32>> for FieldPath {
    fn from(components: Vec<u32>) -> Self {
        FieldPath(components)
    }
}

/// One entry in the flat representation of the schema tree.
///
/// Corresponds to one named property at some nesting level of the generated
/// JSON Schema. Name uniqueness is only meaningful among siblings (JSON
/// object key semantics) and is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Identifier; encodes ancestry, unique among live fields.
    pub path: FieldPath,
    /// Property name within the sibling group.
    pub name: String,
    /// JSON Schema type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Free-text description, empty by default.
    #[serde(default)]
    pub description: String,
    /// Whether the name appears in the enclosing level's required list.
    #[serde(default)]
    pub required: bool,
}

impl Field {
    /// Create a field with editor defaults: type `string`, empty
    /// description, not required.
    pub fn new(path: FieldPath, name: impl Into<String>) -> Self {
        Self {
            path,
            name: name.into(),
            field_type: FieldType::String,
            description: String::new(),
            required: false,
        }
    }

    /// The enclosing field's path, or `None` for root-level fields.
    pub fn parent(&self) -> Option<FieldPath> {
        self.path.parent()
    }
}

/// Replacement values for a field's mutable attributes.
///
/// [`update`](crate::FieldStore::update_field) replaces all four attributes
/// at once, matching how the editor surfaces them as one form row.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldUpdate {
    pub name: String,
    pub field_type: FieldType,
    pub description: String,
    pub required: bool,
}

impl FieldUpdate {
    pub fn new(
        name: impl Into<String>,
        field_type: FieldType,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            description: description.into(),
            required,
        }
    }

    /// An update carrying a field's current attributes, for callers that
    /// only want to change one of them.
    pub fn from_field(field: &Field) -> Self {
        Self {
            name: field.name.clone(),
            field_type: field.field_type,
            description: field.description.clone(),
            required: field.required,
        }
    }

    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}
