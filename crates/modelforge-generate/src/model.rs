use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where generated modules are written.
    pub out_dir: PathBuf,
    /// Name of the generated top-level module.
    pub module_name: String,
    /// Overwrite existing generated files.
    pub overwrite: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("generated"),
            module_name: "models".to_string(),
            overwrite: true,
        }
    }
}

/// Summary of one emitted object module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectReport {
    pub object: String,
    pub fields_total: usize,
    pub fields_emitted: usize,
    pub path: PathBuf,
}

/// Structured generation warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationIssue {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub objects: Vec<ObjectReport>,
    pub objects_considered: usize,
    pub objects_skipped: usize,
    pub reference_fields_dropped: usize,
    pub base_fields_skipped: usize,
    pub warnings: Vec<GenerationIssue>,
}

impl GenerationReport {
    pub fn new(run_id: String) -> Self {
        Self {
            run_id,
            objects: Vec::new(),
            objects_considered: 0,
            objects_skipped: 0,
            reference_fields_dropped: 0,
            base_fields_skipped: 0,
            warnings: Vec::new(),
        }
    }

    pub fn record_considered(&mut self) {
        self.objects_considered += 1;
    }

    pub fn record_skipped_object(&mut self) {
        self.objects_skipped += 1;
    }

    pub fn record_dropped_reference_field(&mut self) {
        self.reference_fields_dropped += 1;
    }

    pub fn record_base_field(&mut self) {
        self.base_fields_skipped += 1;
    }

    pub fn record_warning(&mut self, issue: GenerationIssue) {
        self.warnings.push(issue);
    }
}
