use modelforge_core::SchemaField;

/// Field names materialized on the shared base struct every generated model
/// embeds. Per-object modules skip them so the names are defined once.
pub const BASE_ENTITY_FIELDS: [&str; 8] = [
    "Id",
    "Name",
    "OwnerId",
    "CreatedById",
    "CreatedDate",
    "LastModifiedById",
    "LastModifiedDate",
    "SystemModstamp",
];

/// Default field policy applied by the engine after any user field filter.
///
/// Matching is case-insensitive; snapshot sources disagree on the casing of
/// audit fields.
pub fn is_base_entity_field(field: &SchemaField) -> bool {
    BASE_ENTITY_FIELDS
        .iter()
        .any(|name| name.eq_ignore_ascii_case(&field.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelforge_core::FieldType;

    fn field(name: &str) -> SchemaField {
        SchemaField {
            name: name.to_string(),
            field_type: FieldType::Text,
            required: false,
            length: None,
            label: None,
            reference_to: None,
        }
    }

    #[test]
    fn matches_audit_fields_case_insensitively() {
        assert!(is_base_entity_field(&field("CreatedDate")));
        assert!(is_base_entity_field(&field("createddate")));
        assert!(is_base_entity_field(&field("SYSTEMMODSTAMP")));
    }

    #[test]
    fn passes_regular_fields() {
        assert!(!is_base_entity_field(&field("Site")));
        assert!(!is_base_entity_field(&field("AccountId")));
    }
}
