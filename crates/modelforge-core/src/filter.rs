use std::collections::BTreeSet;

use crate::graph::reachable_from;
use crate::schema::{SchemaField, SchemaObject, SchemaSnapshot};

/// Predicate over schema objects.
///
/// Filter kinds form a closed set so downstream matches stay exhaustive
/// when a kind is added. Evaluation never mutates the snapshot; `accept`
/// takes `&self` and is safe to call concurrently.
#[derive(Debug, Clone)]
pub enum ObjectFilter {
    /// Accepts every object.
    NoOp,
    /// Accept or reject by exact name-set membership.
    Name(ObjectNameFilter),
    /// Accept seed objects and everything reachable from them by reference.
    NameWithReferences(ObjectReachabilityFilter),
    /// Ordered AND of object filters.
    Combination(ObjectCombinationFilter),
}

impl ObjectFilter {
    /// Evaluate the filter against one object.
    pub fn accept(&self, object: &SchemaObject) -> bool {
        match self {
            ObjectFilter::NoOp => true,
            ObjectFilter::Name(filter) => filter.accept(object),
            ObjectFilter::NameWithReferences(filter) => filter.accept(object),
            ObjectFilter::Combination(filter) => filter.accept(object),
        }
    }
}

/// Predicate over schema fields.
#[derive(Debug, Clone)]
pub enum FieldFilter {
    /// Accept or reject reference fields by target-name membership.
    Reference(FieldReferenceFilter),
    /// Ordered AND of field filters.
    Combination(FieldCombinationFilter),
}

impl FieldFilter {
    /// Evaluate the filter against one field.
    pub fn accept(&self, field: &SchemaField) -> bool {
        match self {
            FieldFilter::Reference(filter) => filter.accept(field),
            FieldFilter::Combination(filter) => filter.accept(field),
        }
    }
}

/// Name-set membership filter for objects.
///
/// With `include` set, an empty name set accepts nothing; without it, an
/// empty set accepts everything. Both are intentional.
#[derive(Debug, Clone)]
pub struct ObjectNameFilter {
    include: bool,
    names: BTreeSet<String>,
}

impl ObjectNameFilter {
    pub fn new(include: bool, names: BTreeSet<String>) -> Self {
        Self { include, names }
    }

    pub fn accept(&self, object: &SchemaObject) -> bool {
        self.names.contains(&object.name) == self.include
    }

    pub fn is_include(&self) -> bool {
        self.include
    }

    pub fn names(&self) -> &BTreeSet<String> {
        &self.names
    }
}

/// Reachability filter: accepts objects named in a seed set or transitively
/// reachable from it via reference fields.
///
/// The accept set is computed once at construction and reused for every
/// `accept` call. Seeds absent from the snapshot contribute only their own
/// name; existence checks are not this filter's concern.
#[derive(Debug, Clone)]
pub struct ObjectReachabilityFilter {
    seeds: BTreeSet<String>,
    accepted: BTreeSet<String>,
}

impl ObjectReachabilityFilter {
    pub fn new(seeds: BTreeSet<String>, snapshot: &SchemaSnapshot) -> Self {
        let accepted = reachable_from(snapshot, &seeds);
        Self { seeds, accepted }
    }

    pub fn accept(&self, object: &SchemaObject) -> bool {
        self.accepted.contains(&object.name)
    }

    pub fn seeds(&self) -> &BTreeSet<String> {
        &self.seeds
    }

    /// The computed accept set, seeds included.
    pub fn accepted_names(&self) -> &BTreeSet<String> {
        &self.accepted
    }
}

/// Target-name membership filter for reference fields.
///
/// Fields without a reference target always pass; this filter never rejects
/// a non-reference field.
#[derive(Debug, Clone)]
pub struct FieldReferenceFilter {
    include: bool,
    names: BTreeSet<String>,
}

impl FieldReferenceFilter {
    pub fn new(include: bool, names: BTreeSet<String>) -> Self {
        Self { include, names }
    }

    pub fn accept(&self, field: &SchemaField) -> bool {
        match field.reference_target() {
            None => true,
            Some(target) => self.names.contains(target) == self.include,
        }
    }

    pub fn is_include(&self) -> bool {
        self.include
    }

    pub fn names(&self) -> &BTreeSet<String> {
        &self.names
    }
}

/// Ordered AND over object filters.
///
/// Insertion order is preserved: later filters narrow earlier, broader ones
/// (an exclude-by-name filter narrowing a reachability filter). Evaluation
/// short-circuits on the first rejection.
#[derive(Debug, Clone, Default)]
pub struct ObjectCombinationFilter {
    filters: Vec<ObjectFilter>,
}

impl ObjectCombinationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter to the end of the chain.
    pub fn push(&mut self, filter: ObjectFilter) {
        self.filters.push(filter);
    }

    pub fn accept(&self, object: &SchemaObject) -> bool {
        self.filters.iter().all(|filter| filter.accept(object))
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Read-only view of the chain, in insertion order.
    pub fn filters(&self) -> &[ObjectFilter] {
        &self.filters
    }
}

/// Ordered AND over field filters.
#[derive(Debug, Clone, Default)]
pub struct FieldCombinationFilter {
    filters: Vec<FieldFilter>,
}

impl FieldCombinationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter to the end of the chain.
    pub fn push(&mut self, filter: FieldFilter) {
        self.filters.push(filter);
    }

    pub fn accept(&self, field: &SchemaField) -> bool {
        self.filters.iter().all(|filter| filter.accept(field))
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Read-only view of the chain, in insertion order.
    pub fn filters(&self) -> &[FieldFilter] {
        &self.filters
    }
}
