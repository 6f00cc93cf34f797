// src/graph/outcome.rs

//! Result value of inserting a dependency edge.

use std::fmt;

/// Outcome of [`DependencyGraph::add_dependency`](crate::graph::DependencyGraph::add_dependency).
///
/// Only [`DependencyOutcome::Added`] mutates the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyOutcome {
    /// The edge was inserted.
    Added,
    /// The same prerequisite -> dependent edge is already present.
    AlreadyExists,
    /// One or both subjects have not been added yet.
    SubjectNotFound,
    /// Prerequisite and dependent are the same subject.
    SelfDependency,
}

impl DependencyOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, DependencyOutcome::Added)
    }

    /// Human-readable reason, as reported to callers.
    pub fn reason(&self) -> &'static str {
        match self {
            DependencyOutcome::Added => "added",
            DependencyOutcome::AlreadyExists => "relation already exists",
            DependencyOutcome::SubjectNotFound => "subject not found",
            DependencyOutcome::SelfDependency => "subject cannot depend on itself",
        }
    }
}

impl fmt::Display for DependencyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}
