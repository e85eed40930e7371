use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::schema::SchemaSnapshot;
use crate::types::FieldType;

/// Validate internal consistency of a schema snapshot.
///
/// This checks:
/// - duplicate object names
/// - duplicate field names within an object
/// - reference fields carry a target and non-reference fields do not
///
/// A reference target naming an object absent from the snapshot is legal;
/// snapshots may be partial views of the source schema.
pub fn validate_snapshot(snapshot: &SchemaSnapshot) -> Result<()> {
    let mut objects = BTreeSet::new();

    for object in &snapshot.objects {
        if !objects.insert(object.name.clone()) {
            return Err(Error::InvalidSnapshot(format!(
                "duplicate object name: {}",
                object.name
            )));
        }

        let mut fields = BTreeSet::new();
        for field in &object.fields {
            if !fields.insert(field.name.clone()) {
                return Err(Error::InvalidSnapshot(format!(
                    "duplicate field name: {}.{}",
                    object.name, field.name
                )));
            }

            match (&field.field_type, &field.reference_to) {
                (FieldType::Reference, None) => {
                    return Err(Error::InvalidSnapshot(format!(
                        "reference field without target: {}.{}",
                        object.name, field.name
                    )));
                }
                (FieldType::Reference, Some(_)) | (_, None) => {}
                (_, Some(_)) => {
                    return Err(Error::InvalidSnapshot(format!(
                        "non-reference field with target: {}.{}",
                        object.name, field.name
                    )));
                }
            }
        }
    }

    Ok(())
}
