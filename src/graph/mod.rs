// src/graph/mod.rs

//! Subject dependency graph and study path generation.
//!
//! - [`dependency_graph`] holds the directed prerequisite graph over subjects.
//! - [`study_path`] computes a linear study order (Kahn's algorithm).
//! - [`outcome`] defines the value returned by edge insertion.
//! - [`export`] projects the graph into vertex/edge lists for visualization.

pub mod dependency_graph;
pub mod export;
pub mod outcome;
pub mod study_path;

pub use dependency_graph::DependencyGraph;
pub use export::{GraphEdge, GraphExport, GraphVertex};
pub use outcome::DependencyOutcome;
pub use study_path::study_path;
