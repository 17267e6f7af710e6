//! Flat field store: the authoritative collection behind the editor.
//!
//! The store owns every live [`Field`] in insertion order plus the
//! next-available-index counter. It exposes the primitive mutations the
//! editor composes: insert, update-in-place, delete-with-descendants, and
//! strip-descendants. It deliberately does NOT cascade on type changes -
//! that policy lives in [`SchemaEditor`](crate::SchemaEditor), so there is
//! exactly one code path that triggers the cascade.
//!
//! Index allocation is monotonic for the lifetime of the store: a deleted
//! field's index is never handed out again, so stale paths held by a caller
//! can never silently alias a newer field.

use crate::field::{Field, FieldPath, FieldType, FieldUpdate};

/// Insertion-ordered flat collection of fields with index allocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldStore {
    fields: Vec<Field>,
    next_index: u32,
}

impl FieldStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new field with editor defaults under `parent` (or at the
    /// root when `parent` is `None`).
    ///
    /// The field is named `field_<n>` from the index counter, typed
    /// `string`, with an empty description and `required = false`. Returns
    /// the allocated path, or `None` without mutating anything when the
    /// parent is stale or not an `object` field - only object fields are
    /// addressable as containers.
    pub fn add_field(&mut self, parent: Option<&FieldPath>) -> Option<FieldPath> {
        let name = format!("field_{}", self.next_index);
        self.insert_field(parent, name, FieldType::String, String::new(), false)
    }

    /// Insert a fully specified field under `parent`.
    ///
    /// Same parent constraint as [`add_field`](Self::add_field); used by
    /// ingestion, which knows every attribute up front.
    pub fn insert_field(
        &mut self,
        parent: Option<&FieldPath>,
        name: impl Into<String>,
        field_type: FieldType,
        description: impl Into<String>,
        required: bool,
    ) -> Option<FieldPath> {
        if let Some(parent_path) = parent {
            match self.get(parent_path) {
                Some(field) if field.field_type.is_object() => {}
                _ => return None,
            }
        }

        let index = self.next_index;
        let path = match parent {
            Some(parent_path) => parent_path.child(index),
            None => FieldPath::root(index),
        };

        self.fields.push(Field {
            path: path.clone(),
            name: name.into(),
            field_type,
            description: description.into(),
            required,
        });
        self.next_index += 1;
        Some(path)
    }

    /// Replace the four mutable attributes of the field at `path`.
    ///
    /// Returns `true` if a field was updated. A stale path is a silent
    /// no-op (`false`) - stale references can arise from rapid UI
    /// interaction and must not crash the editor. No cascade happens here
    /// even when the type changes; see [`SchemaEditor::update_field`].
    ///
    /// [`SchemaEditor::update_field`]: crate::SchemaEditor::update_field
    pub fn update_field(&mut self, path: &FieldPath, update: FieldUpdate) -> bool {
        match self.fields.iter_mut().find(|f| &f.path == path) {
            Some(field) => {
                field.name = update.name;
                field.field_type = update.field_type;
                field.description = update.description;
                field.required = update.required;
                true
            }
            None => false,
        }
    }

    /// Remove the field at `path` and every descendant transitively.
    ///
    /// Descendants are found by path-prefix match, so the whole subtree
    /// goes in one pass regardless of depth. Stale paths are a no-op.
    pub fn delete_field(&mut self, path: &FieldPath) {
        self.fields
            .retain(|f| &f.path != path && !f.path.is_descendant_of(path));
    }

    /// Remove every descendant of the field at `path`, keeping the field
    /// itself.
    ///
    /// Used when a field's type changes away from `object`: its children
    /// (and their children, all the way down) are no longer representable.
    pub fn remove_children(&mut self, path: &FieldPath) {
        self.fields.retain(|f| !f.path.is_descendant_of(path));
    }

    /// The field at `path`, if it is live.
    pub fn get(&self, path: &FieldPath) -> Option<&Field> {
        self.fields.iter().find(|f| &f.path == path)
    }

    /// Direct children of `parent` (root-level fields when `None`), in
    /// insertion order.
    pub fn children_of<'a>(
        &'a self,
        parent: Option<&'a FieldPath>,
    ) -> impl Iterator<Item = &'a Field> {
        self.fields.iter().filter(move |f| match parent {
            Some(parent_path) => f.path.is_child_of(parent_path),
            None => f.path.is_root_level(),
        })
    }

    /// Whether the field at `path` has any live descendants.
    pub fn has_children(&self, path: &FieldPath) -> bool {
        self.fields.iter().any(|f| f.path.is_descendant_of(path))
    }

    /// All live fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Number of live fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Drop every field. The index counter is NOT reset, preserving the
    /// no-reuse guarantee across ingestion cycles.
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}
