// src/graph/export.rs

//! Serializable projection of the dependency graph.
//!
//! Serializes as `{"vertices": [{"id", "label"}], "edges": [{"source", "target"}]}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphVertex {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport {
    pub vertices: Vec<GraphVertex>,
    pub edges: Vec<GraphEdge>,
}
