use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::FieldType;

/// Top-level schema snapshot for a generation run.
///
/// Snapshots are exported by an external source ahead of time and consumed
/// read-only; nothing in this crate mutates one after deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SchemaSnapshot {
    /// Contract version for this snapshot format.
    pub snapshot_version: String,
    /// Identifier of the source the snapshot was exported from.
    pub source: String,
    /// API version reported by the source, when available.
    pub api_version: Option<String>,
    /// Objects captured in the snapshot.
    pub objects: Vec<SchemaObject>,
    /// Optional fingerprint of the snapshot for cache/validation purposes.
    pub fingerprint: Option<String>,
}

/// A named entity definition in the source schema.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SchemaObject {
    pub name: String,
    pub label: Option<String>,
    pub custom: bool,
    pub fields: Vec<SchemaField>,
}

/// Field metadata for a schema object.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SchemaField {
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
    pub length: Option<u32>,
    pub label: Option<String>,
    /// Name of the referenced object; present only for reference fields.
    pub reference_to: Option<String>,
}

impl SchemaSnapshot {
    /// Look up an object by exact name.
    pub fn object(&self, name: &str) -> Option<&SchemaObject> {
        self.objects.iter().find(|object| object.name == name)
    }
}

impl SchemaObject {
    /// Look up a field by exact name.
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl SchemaField {
    /// The reference target name for reference fields.
    pub fn reference_target(&self) -> Option<&str> {
        self.reference_to.as_deref()
    }
}
