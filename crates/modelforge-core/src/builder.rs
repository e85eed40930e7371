use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::filter::{
    FieldCombinationFilter, FieldFilter, FieldReferenceFilter, ObjectCombinationFilter,
    ObjectFilter, ObjectNameFilter, ObjectReachabilityFilter,
};
use crate::schema::SchemaSnapshot;

/// Selection intent for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Generate every object in the snapshot.
    pub all: bool,
    /// Object names to include for generation.
    pub includes: BTreeSet<String>,
    /// Object names to exclude from generation.
    pub excludes: BTreeSet<String>,
    /// Expand the include set with objects reachable by reference.
    pub follow_references: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            all: false,
            includes: BTreeSet::new(),
            excludes: BTreeSet::new(),
            follow_references: true,
        }
    }
}

/// Filters produced for one generation run.
///
/// A `None` field filter leaves field selection to the generation layer's
/// default policy.
#[derive(Debug, Clone)]
pub struct SelectionFilters {
    pub object_filter: ObjectFilter,
    pub field_filter: Option<FieldFilter>,
}

/// Build the object and field filters for a generation run.
///
/// Single-pass over the selection intent, in a fixed branch order:
/// `all` short-circuits to an accept-all object filter; otherwise includes
/// contribute first (with or without reference expansion) and excludes are
/// appended after, so they narrow whatever the includes admitted.
///
/// Fails with [`Error::EmptySelection`] when `all` is false and neither
/// includes nor excludes name any object. Callers treat that as a warning
/// and skip the pass rather than aborting.
pub fn build_selection(
    config: &FilterConfig,
    snapshot: &SchemaSnapshot,
) -> Result<SelectionFilters> {
    if config.all {
        return Ok(SelectionFilters {
            object_filter: ObjectFilter::NoOp,
            field_filter: None,
        });
    }

    let mut object_chain = ObjectCombinationFilter::new();
    let mut field_chain = FieldCombinationFilter::new();

    if !config.includes.is_empty() {
        if config.follow_references {
            object_chain.push(ObjectFilter::NameWithReferences(
                ObjectReachabilityFilter::new(config.includes.clone(), snapshot),
            ));
        } else {
            object_chain.push(ObjectFilter::Name(ObjectNameFilter::new(
                true,
                config.includes.clone(),
            )));
            field_chain.push(FieldFilter::Reference(FieldReferenceFilter::new(
                true,
                config.includes.clone(),
            )));
        }
    }

    if !config.excludes.is_empty() {
        object_chain.push(ObjectFilter::Name(ObjectNameFilter::new(
            false,
            config.excludes.clone(),
        )));
        field_chain.push(FieldFilter::Reference(FieldReferenceFilter::new(
            false,
            config.excludes.clone(),
        )));
    }

    if object_chain.is_empty() {
        return Err(Error::EmptySelection);
    }

    let field_filter = if field_chain.is_empty() {
        None
    } else {
        Some(FieldFilter::Combination(field_chain))
    };

    Ok(SelectionFilters {
        object_filter: ObjectFilter::Combination(object_chain),
        field_filter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn empty_snapshot() -> SchemaSnapshot {
        SchemaSnapshot {
            snapshot_version: "0.1".to_string(),
            source: "test".to_string(),
            api_version: None,
            objects: Vec::new(),
            fingerprint: None,
        }
    }

    fn object_chain(filters: &SelectionFilters) -> &[ObjectFilter] {
        match &filters.object_filter {
            ObjectFilter::Combination(chain) => chain.filters(),
            other => panic!("expected combination object filter, got {other:?}"),
        }
    }

    fn field_chain(filters: &SelectionFilters) -> &[FieldFilter] {
        match filters.field_filter.as_ref().expect("field filter") {
            FieldFilter::Combination(chain) => chain.filters(),
            other => panic!("expected combination field filter, got {other:?}"),
        }
    }

    #[test]
    fn all_produces_noop_and_default_field_filter() {
        let config = FilterConfig {
            all: true,
            ..FilterConfig::default()
        };

        let filters = build_selection(&config, &empty_snapshot()).expect("build");
        assert!(matches!(filters.object_filter, ObjectFilter::NoOp));
        assert!(filters.field_filter.is_none());
    }

    #[test]
    fn empty_selection_fails() {
        let config = FilterConfig::default();

        let err = build_selection(&config, &empty_snapshot()).unwrap_err();
        assert!(matches!(err, Error::EmptySelection));
    }

    #[test]
    fn excludes_only_builds_exclude_chains() {
        let config = FilterConfig {
            excludes: names(&["Account"]),
            ..FilterConfig::default()
        };

        let filters = build_selection(&config, &empty_snapshot()).expect("build");

        let objects = object_chain(&filters);
        assert_eq!(objects.len(), 1);
        let ObjectFilter::Name(name_filter) = &objects[0] else {
            panic!("expected name filter");
        };
        assert!(!name_filter.is_include());
        assert_eq!(name_filter.names(), &names(&["Account"]));

        let fields = field_chain(&filters);
        assert_eq!(fields.len(), 1);
        let FieldFilter::Reference(reference_filter) = &fields[0] else {
            panic!("expected reference filter");
        };
        assert!(!reference_filter.is_include());
        assert_eq!(reference_filter.names(), &names(&["Account"]));
    }

    #[test]
    fn includes_with_references_contribute_no_field_filter() {
        let config = FilterConfig {
            includes: names(&["Account"]),
            ..FilterConfig::default()
        };

        let filters = build_selection(&config, &empty_snapshot()).expect("build");

        let objects = object_chain(&filters);
        assert_eq!(objects.len(), 1);
        assert!(matches!(objects[0], ObjectFilter::NameWithReferences(_)));
        assert!(filters.field_filter.is_none());
    }

    #[test]
    fn includes_without_references_build_include_chains() {
        let config = FilterConfig {
            includes: names(&["Account", "Opportunity"]),
            follow_references: false,
            ..FilterConfig::default()
        };

        let filters = build_selection(&config, &empty_snapshot()).expect("build");

        let objects = object_chain(&filters);
        assert_eq!(objects.len(), 1);
        let ObjectFilter::Name(name_filter) = &objects[0] else {
            panic!("expected name filter");
        };
        assert!(name_filter.is_include());
        assert_eq!(name_filter.names(), &names(&["Account", "Opportunity"]));

        let fields = field_chain(&filters);
        assert_eq!(fields.len(), 1);
        let FieldFilter::Reference(reference_filter) = &fields[0] else {
            panic!("expected reference filter");
        };
        assert!(reference_filter.is_include());
    }

    #[test]
    fn includes_and_excludes_keep_insertion_order() {
        let config = FilterConfig {
            includes: names(&["Contact"]),
            excludes: names(&["Opportunity"]),
            ..FilterConfig::default()
        };

        let filters = build_selection(&config, &empty_snapshot()).expect("build");

        let objects = object_chain(&filters);
        assert_eq!(objects.len(), 2);
        assert!(matches!(objects[0], ObjectFilter::NameWithReferences(_)));
        let ObjectFilter::Name(name_filter) = &objects[1] else {
            panic!("expected trailing exclude filter");
        };
        assert!(!name_filter.is_include());
        assert_eq!(name_filter.names(), &names(&["Opportunity"]));

        let fields = field_chain(&filters);
        assert_eq!(fields.len(), 1);
        assert!(matches!(fields[0], FieldFilter::Reference(_)));
    }
}
