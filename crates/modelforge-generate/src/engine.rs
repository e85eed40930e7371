use std::fs::create_dir_all;
use std::path::PathBuf;

use tracing::{debug, info};

use modelforge_core::{
    FieldFilter, ObjectFilter, SchemaSnapshot, summarize_references, validate_snapshot,
};

use crate::errors::GenerationError;
use crate::fields::is_base_entity_field;
use crate::model::{GenerateOptions, GenerationIssue, GenerationReport, ObjectReport};
use crate::output::rust::{module_file_name, render_module, render_module_index, write_module};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub module_dir: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating model modules from a snapshot.
///
/// The engine owns the filters for the duration of one pass; both are built
/// up front by `modelforge_core::build_selection` and evaluated read-only.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
    object_filter: ObjectFilter,
    field_filter: Option<FieldFilter>,
}

impl GenerationEngine {
    pub fn new(
        options: GenerateOptions,
        object_filter: ObjectFilter,
        field_filter: Option<FieldFilter>,
    ) -> Self {
        Self {
            options,
            object_filter,
            field_filter,
        }
    }

    pub fn run(&self, snapshot: &SchemaSnapshot) -> Result<GenerationResult, GenerationError> {
        validate_snapshot(snapshot)?;

        let run_id = uuid::Uuid::new_v4().to_string();
        let module_dir = self.options.out_dir.join(&self.options.module_name);
        create_dir_all(&module_dir)?;

        let graph = summarize_references(snapshot);
        info!(
            run_id = %run_id,
            source = %snapshot.source,
            objects = snapshot.objects.len(),
            reference_edges = graph.edges,
            "generation started"
        );

        let mut report = GenerationReport::new(run_id);
        let mut modules = Vec::new();

        for object in &snapshot.objects {
            report.record_considered();

            if !self.object_filter.accept(object) {
                debug!(object = %object.name, "object rejected by filter");
                report.record_skipped_object();
                continue;
            }

            let mut accepted = Vec::new();
            for field in &object.fields {
                if let Some(filter) = &self.field_filter
                    && !filter.accept(field)
                {
                    debug!(object = %object.name, field = %field.name, "field rejected by filter");
                    report.record_dropped_reference_field();
                    continue;
                }
                if is_base_entity_field(field) {
                    report.record_base_field();
                    continue;
                }
                accepted.push(field);
            }

            if accepted.is_empty() {
                report.record_warning(GenerationIssue {
                    code: "empty_model".to_string(),
                    message: format!("object '{}' has no fields to emit", object.name),
                    object: Some(object.name.clone()),
                    field: None,
                });
            }

            let file_name = module_file_name(&object.name);
            let path = module_dir.join(format!("{file_name}.rs"));
            if path.exists() && !self.options.overwrite {
                return Err(GenerationError::InvalidOptions(format!(
                    "refusing to overwrite {}",
                    path.display()
                )));
            }

            let source = render_module(object, &accepted);
            write_module(&path, &source)?;
            debug!(object = %object.name, fields = accepted.len(), "model module written");

            modules.push(file_name);
            report.objects.push(ObjectReport {
                object: object.name.clone(),
                fields_total: object.fields.len(),
                fields_emitted: accepted.len(),
                path,
            });
        }

        write_module(&module_dir.join("mod.rs"), &render_module_index(&modules))?;

        info!(
            generated = report.objects.len(),
            skipped = report.objects_skipped,
            "generation finished"
        );

        Ok(GenerationResult { module_dir, report })
    }
}
