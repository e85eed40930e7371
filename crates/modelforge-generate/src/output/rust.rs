use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use modelforge_core::{FieldType, SchemaField, SchemaObject};

/// Keywords that need a raw identifier when they appear as field names.
const RAW_KEYWORDS: [&str; 20] = [
    "as", "box", "break", "const", "continue", "do", "dyn", "else", "enum", "fn", "for", "if",
    "impl", "in", "let", "loop", "match", "type", "use", "where",
];

/// Render one accepted object and its accepted fields as a Rust module.
///
/// Fields are emitted in snapshot order with a serde rename back to the
/// source name, so generated structs deserialize source payloads directly.
pub fn render_module(object: &SchemaObject, fields: &[&SchemaField]) -> String {
    let ident = struct_ident(&object.name);
    let mut source = String::new();

    source.push_str("//! Generated model module. Do not edit by hand.\n\n");
    source.push_str("use serde::{Deserialize, Serialize};\n\n");

    match &object.label {
        Some(label) => {
            source.push_str(&format!("/// {label}\n"));
        }
        None => {
            source.push_str(&format!("/// Model for the `{}` object.\n", object.name));
        }
    }
    source.push_str("#[derive(Debug, Clone, Serialize, Deserialize)]\n");
    source.push_str(&format!("pub struct {ident} {{\n"));

    for field in fields {
        if let Some(target) = field.reference_target() {
            source.push_str(&format!("    /// Reference to `{target}`.\n"));
        }
        source.push_str(&format!("    #[serde(rename = \"{}\")]\n", field.name));
        source.push_str(&format!(
            "    pub {}: {},\n",
            field_ident(&field.name),
            rust_type(field)
        ));
    }

    source.push_str("}\n");
    source
}

/// Render the `mod.rs` index for the emitted modules.
pub fn render_module_index(modules: &[String]) -> String {
    let mut source = String::new();
    source.push_str("//! Generated model modules. Do not edit by hand.\n\n");
    for module in modules {
        source.push_str(&format!("pub mod {module};\n"));
    }
    source
}

/// Write rendered source through a buffered writer.
pub fn write_module(path: &Path, source: &str) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(source.as_bytes())?;
    writer.flush()
}

/// Module file name (without extension) for an object.
pub fn module_file_name(object_name: &str) -> String {
    let ident = field_ident(object_name);
    ident.trim_start_matches("r#").to_string()
}

/// Convert an object name to the emitted struct identifier.
///
/// Source names are typically PascalCase already; separator characters
/// (custom-object suffixes like `__c`) split segments that are re-cased.
pub fn struct_ident(name: &str) -> String {
    let mut ident = String::with_capacity(name.len());
    let mut upper_next = true;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if upper_next {
                ident.push(ch.to_ascii_uppercase());
                upper_next = false;
            } else {
                ident.push(ch);
            }
        } else {
            upper_next = true;
        }
    }

    if ident.is_empty() || ident.starts_with(|ch: char| ch.is_ascii_digit()) {
        ident.insert(0, 'X');
    }

    ident
}

/// Convert a source field name to a snake_case Rust identifier.
pub fn field_ident(name: &str) -> String {
    let mut ident = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if ch.is_ascii_uppercase() {
                if prev_lower {
                    ident.push('_');
                }
                ident.push(ch.to_ascii_lowercase());
                prev_lower = false;
            } else {
                ident.push(ch);
                prev_lower = true;
            }
        } else if !ident.is_empty() && !ident.ends_with('_') {
            ident.push('_');
        }
    }

    let mut ident = ident.trim_end_matches('_').to_string();
    if ident.is_empty() || ident.starts_with(|ch: char| ch.is_ascii_digit()) {
        ident.insert(0, '_');
    }

    // `self`/`super`/`crate` cannot be raw identifiers.
    if matches!(ident.as_str(), "self" | "super" | "crate") {
        ident.push('_');
        ident
    } else if RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else {
        ident
    }
}

/// Map a schema field to the generated Rust type.
///
/// Optional fields wrap in `Option`; unknown source types fall back to a
/// raw JSON value.
fn rust_type(field: &SchemaField) -> String {
    let base = match &field.field_type {
        FieldType::Id | FieldType::Reference => "String",
        FieldType::Text
        | FieldType::TextArea
        | FieldType::Picklist
        | FieldType::Email
        | FieldType::Phone
        | FieldType::Url => "String",
        FieldType::Integer => "i64",
        FieldType::Double | FieldType::Currency => "f64",
        FieldType::Boolean => "bool",
        FieldType::Date => "chrono::NaiveDate",
        FieldType::DateTime => "chrono::DateTime<chrono::Utc>",
        FieldType::Other(_) => "serde_json::Value",
    };

    if field.required {
        base.to_string()
    } else {
        format!("Option<{base}>")
    }
}
