// src/graph/study_path.rs

//! Study path generation (topological order of the prerequisite graph).

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::errors::{PlannerError, Result};
use crate::graph::DependencyGraph;
use crate::types::SubjectName;

/// Compute a study order in which every prerequisite precedes its dependents.
///
/// Uses Kahn's algorithm with a FIFO worklist. The worklist is seeded with
/// every subject that has no prerequisites, in the order the subjects were
/// added, so equal-rank subjects keep their insertion order.
///
/// Returns [`PlannerError::CycleDetected`] if some subjects can never be
/// reached because they sit on (or behind) a cycle. No partial order is
/// returned in that case.
pub fn study_path(graph: &DependencyGraph) -> Result<Vec<SubjectName>> {
    let count = graph.len();

    let mut in_degree = vec![0usize; count];
    for id in 0..count {
        for target in graph.dependent_ids(id) {
            in_degree[target] += 1;
        }
    }

    let mut queue: VecDeque<usize> = (0..count).filter(|&id| in_degree[id] == 0).collect();
    let mut order = Vec::with_capacity(count);

    while let Some(id) = queue.pop_front() {
        order.push(id);
        for target in graph.dependent_ids(id) {
            in_degree[target] -= 1;
            if in_degree[target] == 0 {
                queue.push_back(target);
            }
        }
    }

    if order.len() != count {
        let stuck = count - order.len();
        let culprit = graph.cycle_member().unwrap_or("<unknown>");
        warn!(stuck, subject = %culprit, "study path blocked by a prerequisite cycle");
        return Err(PlannerError::CycleDetected(format!(
            "{stuck} subject(s) cannot be ordered; cycle involves '{culprit}'"
        )));
    }

    debug!(subjects = count, edges = graph.edge_count(), "study path generated");

    Ok(order
        .into_iter()
        .map(|id| graph.name_of(id).to_string())
        .collect())
}
