//! Core contracts and the selection filter engine for modelforge.
//!
//! This crate defines the canonical snapshot types, the filters that decide
//! which objects and fields are eligible for generation, and validation
//! helpers shared by the generator and the CLI.

pub mod builder;
pub mod error;
pub mod filter;
pub mod graph;
pub mod schema;
pub mod types;
pub mod validation;

pub use builder::{FilterConfig, SelectionFilters, build_selection};
pub use error::{Error, Result};
pub use filter::{
    FieldCombinationFilter, FieldFilter, FieldReferenceFilter, ObjectCombinationFilter,
    ObjectFilter, ObjectNameFilter, ObjectReachabilityFilter,
};
pub use graph::{ReferenceGraphSummary, build_adjacency, reachable_from, summarize_references};
pub use schema::{SchemaField, SchemaObject, SchemaSnapshot};
pub use types::FieldType;
pub use validation::validate_snapshot;

/// Current snapshot contract version for `schema.json` artifacts.
pub const SNAPSHOT_VERSION: &str = "0.1";
