use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Logical type of a schema field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Id,
    Text,
    TextArea,
    Integer,
    Double,
    Currency,
    Boolean,
    Date,
    DateTime,
    Picklist,
    Email,
    Phone,
    Url,
    Reference,
    Other(String),
}

impl FieldType {
    /// Returns true for field types that carry a reference target.
    pub fn is_reference(&self) -> bool {
        matches!(self, FieldType::Reference)
    }
}
