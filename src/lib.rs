//! # Toolforge - Schema Tree Editor for LLM Tool Definitions
//!
//! Toolforge is the logic core of a visual "tool builder": it represents an
//! OpenAI-compatible function-calling JSON Schema as a flat collection of
//! addressable field records, supports creating, renaming, retyping, and
//! deleting fields (including whole nested subtrees), and converts between
//! the flat representation and the nested schema in both directions.
//!
//! ## Key Concepts
//!
//! - **Flat field store**: every property at every nesting level is one
//!   [`Field`] in a single insertion-ordered collection, related only via
//!   path-shaped identifiers ([`FieldPath`]). Ancestry is a prefix match.
//! - **Derived projection**: the nested schema is recomputed in full after
//!   every mutation by [`SchemaEditor`]; it is never patched incrementally,
//!   so the store and the schema cannot drift.
//! - **Cascade**: when a field's type changes away from `object`, its
//!   descendants are removed in the same step - the generated schema never
//!   carries orphaned properties.
//! - **Staged ingestion**: externally supplied schemas (including raw-text
//!   edits) are fully parsed before replacing live state; invalid input
//!   leaves the editor untouched.
//!
//! ## Example
//!
//! ```rust
//! use toolforge::{FieldType, FieldUpdate, SchemaEditor};
//!
//! let mut editor = SchemaEditor::new();
//! editor.set_function_name("get_weather");
//! editor.set_description("Get current weather for a location");
//!
//! let address = editor.add_root_field().unwrap();
//! editor.update_field(
//!     &address,
//!     FieldUpdate::new("address", FieldType::Object, "", false),
//! );
//!
//! let city = editor.add_nested_field(&address).unwrap();
//! editor.update_field(
//!     &city,
//!     FieldUpdate::new("city", FieldType::String, "city name", true),
//! );
//!
//! let schema = editor.schema();
//! assert!(schema["parameters"]["properties"]["address"]["properties"]["city"].is_object());
//! assert_eq!(
//!     schema["parameters"]["properties"]["address"]["required"][0],
//!     "city"
//! );
//! ```
//!
//! ## Architecture
//!
//! - **field**: field records, types, and path-shaped identifiers
//! - **store**: the authoritative flat collection and index allocation
//! - **generate**: flat -> nested schema projection
//! - **ingest**: nested -> flat ingestion (staged, shape-tolerant)
//! - **editor**: the stateful façade tying store and projection together
//! - **types**: wire shapes for the remote tool store
//! - **client**: async HTTP glue for fetching and saving tool records
//! - **config**: endpoint resolution helpers
//! - **error**: error types and conversions

/// Async HTTP client for fetching and saving remote tool records.
mod client;

/// Endpoint resolution helpers with environment variable support.
mod config;

/// The Schema Tree Editor façade: flat store plus derived projection.
mod editor;

/// Error types and conversions used across all public APIs.
mod error;

/// Field records, the closed type enumeration, and path identifiers.
mod field;

/// Schema generation: flat field collection to nested tool definition.
mod generate;

/// Schema ingestion: nested tool definition back to the flat collection.
mod ingest;

/// The authoritative flat field collection and index allocation.
mod store;

/// Wire types exchanged with the remote tool store.
mod types;

// --- Editor API ---

pub use editor::SchemaEditor;

// --- Field Model ---

pub use field::{Field, FieldPath, FieldType, FieldUpdate};

// --- Flat Store ---

pub use store::FieldStore;

// --- Conversions ---

pub use generate::generate_tool_schema;
pub use ingest::{ParsedSchema, decode_schema_value, parse_raw_schema, parse_tool_schema};

// --- Remote Store ---

pub use client::{ClientOptions, ClientOptionsBuilder, ToolsClient};
pub use types::{CollectionResponse, ToolPayload, ToolRecord};

// --- Configuration ---

pub use config::{DEFAULT_BASE_URL, get_base_url};

// --- Error Handling ---

pub use error::{Error, Result};

/// Convenience module containing the most commonly used types.
/// Import with `use toolforge::prelude::*;`.
pub mod prelude {
    pub use crate::{
        ClientOptions, Error, Field, FieldPath, FieldType, FieldUpdate, Result, SchemaEditor,
        ToolPayload, ToolRecord, ToolsClient,
    };
}
