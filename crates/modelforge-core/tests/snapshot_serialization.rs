use modelforge_core::{FieldType, SchemaField, SchemaObject, SchemaSnapshot};

#[test]
fn serializes_snapshot_deterministically() {
    let snapshot = SchemaSnapshot {
        snapshot_version: "0.1".to_string(),
        source: "dev-org".to_string(),
        api_version: Some("61.0".to_string()),
        objects: vec![SchemaObject {
            name: "Account".to_string(),
            label: None,
            custom: false,
            fields: vec![SchemaField {
                name: "Site".to_string(),
                field_type: FieldType::Text,
                required: false,
                length: Some(255),
                label: None,
                reference_to: None,
            }],
        }],
        fingerprint: None,
    };

    let json = serde_json::to_string_pretty(&snapshot).expect("serialize snapshot");
    let expected = r#"{
  "snapshot_version": "0.1",
  "source": "dev-org",
  "api_version": "61.0",
  "objects": [
    {
      "name": "Account",
      "label": null,
      "custom": false,
      "fields": [
        {
          "name": "Site",
          "field_type": "text",
          "required": false,
          "length": 255,
          "label": null,
          "reference_to": null
        }
      ]
    }
  ],
  "fingerprint": null
}"#;
    assert_eq!(json, expected);
}

#[test]
fn snapshot_round_trips_through_json() {
    let json = r#"{
      "snapshot_version": "0.1",
      "source": "dev-org",
      "api_version": null,
      "objects": [
        {
          "name": "Contact",
          "label": "Contact",
          "custom": false,
          "fields": [
            {
              "name": "AccountId",
              "field_type": "reference",
              "required": false,
              "length": null,
              "label": null,
              "reference_to": "Account"
            },
            {
              "name": "Location",
              "field_type": { "other": "geolocation" },
              "required": false,
              "length": null,
              "label": null,
              "reference_to": null
            }
          ]
        }
      ],
      "fingerprint": "abc123"
    }"#;

    let snapshot: SchemaSnapshot = serde_json::from_str(json).expect("parse snapshot");
    assert_eq!(snapshot.objects.len(), 1);

    let contact = snapshot.object("Contact").expect("Contact");
    let account_id = contact.field("AccountId").expect("AccountId");
    assert!(account_id.field_type.is_reference());
    assert_eq!(account_id.reference_target(), Some("Account"));

    let location = contact.field("Location").expect("Location");
    assert_eq!(
        location.field_type,
        FieldType::Other("geolocation".to_string())
    );

    let rendered = serde_json::to_value(&snapshot).expect("serialize snapshot");
    let reparsed: SchemaSnapshot = serde_json::from_value(rendered).expect("reparse snapshot");
    assert_eq!(reparsed.fingerprint.as_deref(), Some("abc123"));
}
