// src/graph/dependency_graph.rs

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::graph::export::{GraphEdge, GraphExport, GraphVertex};
use crate::graph::outcome::DependencyOutcome;
use crate::types::SubjectName;

/// Directed prerequisite graph keyed by subject name.
///
/// Edge direction: prerequisite -> dependent. For "Math must come before
/// Physics" we store the edge `Math -> Physics`.
///
/// Subjects are assigned dense ids in insertion order and the edges live in
/// a `DiGraphMap` over those ids. Both the subject list and each subject's
/// outgoing edges therefore iterate in insertion order, which is what makes
/// the study path deterministic.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    names: Vec<SubjectName>,
    ids: HashMap<SubjectName, usize>,
    edges: DiGraphMap<usize, ()>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            ids: HashMap::new(),
            edges: DiGraphMap::new(),
        }
    }

    /// Insert a subject with no edges.
    ///
    /// Returns `false` (and changes nothing) if the subject already exists.
    pub fn add_subject(&mut self, name: &str) -> bool {
        if self.ids.contains_key(name) {
            debug!(subject = %name, "subject already present");
            return false;
        }

        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        self.edges.add_node(id);
        debug!(subject = %name, id, "subject added");
        true
    }

    /// Insert the edge `prerequisite -> dependent`.
    ///
    /// Both subjects must already exist. No cycle check happens here; cycles
    /// are reported when a study path is generated.
    pub fn add_dependency(&mut self, prerequisite: &str, dependent: &str) -> DependencyOutcome {
        let (from, to) = match (self.ids.get(prerequisite), self.ids.get(dependent)) {
            (Some(&from), Some(&to)) => (from, to),
            _ => return DependencyOutcome::SubjectNotFound,
        };

        if from == to {
            return DependencyOutcome::SelfDependency;
        }

        if self.edges.contains_edge(from, to) {
            return DependencyOutcome::AlreadyExists;
        }

        self.edges.add_edge(from, to, ());
        debug!(%prerequisite, %dependent, "dependency added");
        DependencyOutcome::Added
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }

    /// All subjects in insertion order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    /// Subjects that directly depend on `name`, in edge insertion order.
    pub fn dependents_of(&self, name: &str) -> Vec<&str> {
        self.neighbors(name, Direction::Outgoing)
    }

    /// Direct prerequisites of `name`.
    pub fn dependencies_of(&self, name: &str) -> Vec<&str> {
        self.neighbors(name, Direction::Incoming)
    }

    /// Vertex and edge lists suitable for rendering the graph.
    pub fn export(&self) -> GraphExport {
        let vertices = self
            .names
            .iter()
            .map(|name| GraphVertex {
                id: name.clone(),
                label: name.clone(),
            })
            .collect();

        let edges = (0..self.names.len())
            .flat_map(|from| {
                self.dependent_ids(from).map(move |to| GraphEdge {
                    source: self.names[from].clone(),
                    target: self.names[to].clone(),
                })
            })
            .collect();

        GraphExport { vertices, edges }
    }

    pub(crate) fn name_of(&self, id: usize) -> &str {
        &self.names[id]
    }

    pub(crate) fn dependent_ids(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges.neighbors_directed(id, Direction::Outgoing)
    }

    /// Some subject that sits on a cycle, if the graph has one.
    pub(crate) fn cycle_member(&self) -> Option<&str> {
        match toposort(&self.edges, None) {
            Ok(_) => None,
            Err(cycle) => Some(self.name_of(cycle.node_id())),
        }
    }

    fn neighbors(&self, name: &str, dir: Direction) -> Vec<&str> {
        match self.ids.get(name) {
            Some(&id) => self
                .edges
                .neighbors_directed(id, dir)
                .map(|n| self.name_of(n))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> DependencyGraph {
        let mut g = DependencyGraph::new();
        for s in ["A", "B", "C"] {
            assert!(g.add_subject(s));
        }
        g
    }

    #[test]
    fn add_subject_twice_keeps_one_vertex() {
        let mut g = DependencyGraph::new();
        assert!(g.add_subject("Math"));
        assert!(!g.add_subject("Math"));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn dependency_between_unknown_subjects_is_rejected() {
        let mut g = abc();
        assert_eq!(g.add_dependency("A", "Z"), DependencyOutcome::SubjectNotFound);
        assert_eq!(g.add_dependency("Y", "Z"), DependencyOutcome::SubjectNotFound);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.contains("Z"));
    }

    #[test]
    fn duplicate_edge_is_reported_not_added() {
        let mut g = abc();
        assert_eq!(g.add_dependency("A", "B"), DependencyOutcome::Added);
        assert_eq!(g.add_dependency("A", "B"), DependencyOutcome::AlreadyExists);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.dependents_of("A"), vec!["B"]);
    }

    #[test]
    fn self_dependency_is_rejected_eagerly() {
        let mut g = abc();
        let outcome = g.add_dependency("A", "A");
        assert_eq!(outcome, DependencyOutcome::SelfDependency);
        assert!(!outcome.succeeded());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn neighbors_follow_insertion_order() {
        let mut g = abc();
        g.add_dependency("A", "C");
        g.add_dependency("A", "B");
        assert_eq!(g.dependents_of("A"), vec!["C", "B"]);
        assert_eq!(g.dependencies_of("B"), vec!["A"]);
        assert!(g.dependents_of("missing").is_empty());
    }

    #[test]
    fn export_lists_vertices_and_edges() {
        let mut g = abc();
        g.add_dependency("A", "B");
        g.add_dependency("B", "C");

        let export = g.export();
        let ids: Vec<&str> = export.vertices.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert!(export.vertices.iter().all(|v| v.id == v.label));

        let edges: Vec<(&str, &str)> = export
            .edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(edges, vec![("A", "B"), ("B", "C")]);
    }
}
