use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::schema::SchemaSnapshot;

/// Summary of the reference graph structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceGraphSummary {
    pub nodes: usize,
    pub edges: usize,
}

/// Build a deterministic reference adjacency map for a snapshot.
///
/// Nodes are object names and an edge `A -> B` exists when `A` has a
/// reference field targeting `B`. Targets absent from the snapshot still
/// appear as nodes so reachability treats them uniformly.
pub fn build_adjacency(snapshot: &SchemaSnapshot) -> BTreeMap<String, BTreeSet<String>> {
    let mut graph: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for object in &snapshot.objects {
        graph.entry(object.name.clone()).or_default();

        for field in &object.fields {
            if let Some(target) = field.reference_target() {
                graph.entry(target.to_string()).or_default();
                graph
                    .entry(object.name.clone())
                    .or_default()
                    .insert(target.to_string());
            }
        }
    }

    graph
}

/// Compute the set of object names reachable from a seed set.
///
/// Reachability is the transitive closure over reference fields and is
/// reflexive: every seed is part of the result, including seeds that do not
/// name an object in the snapshot. The visited set guards against cycles
/// and diamond shapes; each name is expanded at most once.
pub fn reachable_from(snapshot: &SchemaSnapshot, seeds: &BTreeSet<String>) -> BTreeSet<String> {
    let graph = build_adjacency(snapshot);

    let mut visited: BTreeSet<String> = BTreeSet::new();
    let mut queue: VecDeque<String> = VecDeque::new();

    for seed in seeds {
        if visited.insert(seed.clone()) {
            queue.push_back(seed.clone());
        }
    }

    while let Some(name) = queue.pop_front() {
        if let Some(targets) = graph.get(&name) {
            for target in targets {
                if visited.insert(target.clone()) {
                    queue.push_back(target.clone());
                }
            }
        }
    }

    visited
}

/// Summarize the reference graph for run reporting.
pub fn summarize_references(snapshot: &SchemaSnapshot) -> ReferenceGraphSummary {
    let graph = build_adjacency(snapshot);
    let nodes = graph.len();
    let edges = graph.values().map(|targets| targets.len()).sum();

    ReferenceGraphSummary { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SchemaField, SchemaObject, SchemaSnapshot};
    use crate::types::FieldType;

    fn reference_field(name: &str, target: &str) -> SchemaField {
        SchemaField {
            name: name.to_string(),
            field_type: FieldType::Reference,
            required: false,
            length: None,
            label: None,
            reference_to: Some(target.to_string()),
        }
    }

    fn object(name: &str, fields: Vec<SchemaField>) -> SchemaObject {
        SchemaObject {
            name: name.to_string(),
            label: None,
            custom: false,
            fields,
        }
    }

    fn snapshot(objects: Vec<SchemaObject>) -> SchemaSnapshot {
        SchemaSnapshot {
            snapshot_version: "0.1".to_string(),
            source: "test".to_string(),
            api_version: None,
            objects,
            fingerprint: None,
        }
    }

    fn seeds(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn reachability_is_reflexive_and_transitive() {
        let snapshot = snapshot(vec![
            object("Account", vec![reference_field("ParentId", "Contact")]),
            object("Contact", vec![reference_field("CampaignId", "Campaign")]),
            object("Campaign", Vec::new()),
            object("Lead", Vec::new()),
        ]);

        let reachable = reachable_from(&snapshot, &seeds(&["Account"]));
        assert_eq!(reachable, seeds(&["Account", "Contact", "Campaign"]));
    }

    #[test]
    fn cycles_terminate_without_revisits() {
        let snapshot = snapshot(vec![
            object("Account", vec![reference_field("ContactId", "Contact")]),
            object("Contact", vec![reference_field("AccountId", "Account")]),
        ]);

        let reachable = reachable_from(&snapshot, &seeds(&["Account"]));
        assert_eq!(reachable, seeds(&["Account", "Contact"]));
    }

    #[test]
    fn diamonds_visit_shared_target_once() {
        let snapshot = snapshot(vec![
            object(
                "Opportunity",
                vec![
                    reference_field("AccountId", "Account"),
                    reference_field("ContactId", "Contact"),
                ],
            ),
            object("Account", vec![reference_field("OwnerId", "User")]),
            object("Contact", vec![reference_field("OwnerId", "User")]),
            object("User", Vec::new()),
        ]);

        let reachable = reachable_from(&snapshot, &seeds(&["Opportunity"]));
        assert_eq!(
            reachable,
            seeds(&["Opportunity", "Account", "Contact", "User"])
        );
    }

    #[test]
    fn unknown_seed_contributes_only_itself() {
        let snapshot = snapshot(vec![object("Account", Vec::new())]);

        let reachable = reachable_from(&snapshot, &seeds(&["Missing"]));
        assert_eq!(reachable, seeds(&["Missing"]));
    }

    #[test]
    fn dangling_targets_become_nodes() {
        let snapshot = snapshot(vec![object(
            "Case",
            vec![reference_field("AssetId", "Asset")],
        )]);

        let summary = summarize_references(&snapshot);
        assert_eq!(summary.nodes, 2);
        assert_eq!(summary.edges, 1);

        let reachable = reachable_from(&snapshot, &seeds(&["Case"]));
        assert_eq!(reachable, seeds(&["Case", "Asset"]));
    }
}
