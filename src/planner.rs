// src/planner.rs

//! The planner session: one learner's working set.
//!
//! [`Planner`] owns the dependency graph, the recorded marks, the cached
//! study order and the syllabus trees. There is no shared or global state;
//! hosts that serve several callers keep one `Planner` per session and
//! serialize access to it themselves.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use crate::config::PlanFile;
use crate::errors::Result;
use crate::graph::{DependencyGraph, DependencyOutcome, GraphExport, study_path};
use crate::progress::{SubjectProgress, derive_progress};
use crate::ranking::{RankedSubject, ScoreBoard};
use crate::snapshot::ProgressSnapshot;
use crate::syllabus::{ModuleSpec, SyllabusNode, SyllabusTree};
use crate::types::{Score, SubjectName};

#[derive(Debug, Default)]
pub struct Planner {
    graph: DependencyGraph,
    scores: ScoreBoard,
    /// Last successfully generated study order. Not invalidated by graph
    /// mutations; call [`Planner::generate_study_path`] again.
    study_order: Vec<SubjectName>,
    syllabi: HashMap<SubjectName, SyllabusTree>,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a session from a validated plan file.
    pub fn from_plan(plan: &PlanFile) -> Result<Self> {
        let mut planner = Self::new();

        for subject in &plan.subjects {
            planner.add_subject(subject);
        }
        for dep in &plan.dependencies {
            planner.add_dependency(&dep.prerequisite, &dep.dependent);
        }
        planner.submit_marks(plan.marks.iter().map(|(s, &score)| (s.as_str(), score)));
        for syllabus in &plan.syllabi {
            planner.build_syllabus(&syllabus.subject, &syllabus.modules)?;
        }

        info!(
            subjects = planner.graph.len(),
            dependencies = planner.graph.edge_count(),
            marks = planner.scores.len(),
            syllabi = planner.syllabi.len(),
            "planner loaded from plan file"
        );

        Ok(planner)
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Returns `false` if the subject already existed.
    pub fn add_subject(&mut self, name: &str) -> bool {
        self.graph.add_subject(name)
    }

    pub fn add_dependency(&mut self, prerequisite: &str, dependent: &str) -> DependencyOutcome {
        let outcome = self.graph.add_dependency(prerequisite, dependent);
        if !outcome.succeeded() {
            warn!(%prerequisite, %dependent, reason = outcome.reason(), "dependency not added");
        }
        outcome
    }

    /// Generate and cache a study order.
    ///
    /// On a cycle the error is returned and the cached order is left as it
    /// was.
    pub fn generate_study_path(&mut self) -> Result<&[SubjectName]> {
        let order = study_path(&self.graph)?;
        self.study_order = order;
        Ok(&self.study_order)
    }

    /// The cached study order (empty until a path was generated).
    pub fn study_order(&self) -> &[SubjectName] {
        &self.study_order
    }

    pub fn export_graph(&self) -> GraphExport {
        self.graph.export()
    }

    pub fn record_score(&mut self, subject: &str, score: Score) {
        self.scores.record(subject, score);
    }

    /// Apply a batch of marks in iteration order.
    pub fn submit_marks<I, S>(&mut self, marks: I)
    where
        I: IntoIterator<Item = (S, Score)>,
        S: AsRef<str>,
    {
        self.scores.record_all(marks);
    }

    pub fn rank_weakest(&self) -> Vec<RankedSubject> {
        self.scores.rank_weakest()
    }

    /// Build (or replace) the syllabus tree of `subject`.
    pub fn build_syllabus(&mut self, subject: &str, modules: &[ModuleSpec]) -> Result<()> {
        let tree = SyllabusTree::build(subject, modules)?;
        debug!(%subject, modules = modules.len(), topics = tree.topic_count(), "syllabus built");
        if self.syllabi.insert(subject.to_string(), tree).is_some() {
            debug!(%subject, "previous syllabus replaced");
        }
        Ok(())
    }

    pub fn export_syllabus(&self, subject: &str) -> Option<SyllabusNode> {
        self.syllabi.get(subject).map(SyllabusTree::export)
    }

    pub fn render_syllabus(&self, subject: &str) -> Option<String> {
        self.syllabi.get(subject).map(SyllabusTree::render)
    }

    /// Progress of each subject in the cached study order.
    pub fn progress(&self) -> Vec<SubjectProgress> {
        derive_progress(&self.study_order, &self.scores)
    }

    /// Marks follow the study order; marks for subjects outside it come
    /// last, by name.
    pub fn snapshot(&self) -> ProgressSnapshot {
        let mut marks: Vec<(SubjectName, Score)> = self
            .study_order
            .iter()
            .filter_map(|s| self.scores.score_of(s).map(|score| (s.clone(), score)))
            .collect();

        let planned: HashSet<&str> = self.study_order.iter().map(String::as_str).collect();
        marks.extend(
            self.scores
                .iter()
                .filter(|(s, _)| !planned.contains(s))
                .map(|(s, score)| (s.to_string(), score)),
        );

        ProgressSnapshot {
            study_order: self.study_order.clone(),
            marks,
            progress: self.progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PlannerError;
    use crate::types::ProgressStatus;

    fn abc() -> Planner {
        let mut planner = Planner::new();
        for s in ["A", "B", "C"] {
            planner.add_subject(s);
        }
        assert!(planner.add_dependency("A", "B").succeeded());
        assert!(planner.add_dependency("B", "C").succeeded());
        planner
    }

    #[test]
    fn cycle_keeps_previous_study_order() {
        let mut planner = abc();
        assert_eq!(planner.generate_study_path().unwrap(), ["A", "B", "C"]);

        assert!(planner.add_dependency("C", "A").succeeded());
        assert!(matches!(
            planner.generate_study_path(),
            Err(PlannerError::CycleDetected(_))
        ));
        assert_eq!(planner.study_order(), ["A", "B", "C"]);
    }

    #[test]
    fn study_order_is_not_invalidated_automatically() {
        let mut planner = abc();
        planner.generate_study_path().unwrap();
        planner.add_subject("D");
        assert_eq!(planner.study_order().len(), 3);
        assert_eq!(planner.generate_study_path().unwrap().len(), 4);
    }

    #[test]
    fn rebuilding_syllabus_replaces_it() {
        let mut planner = Planner::new();
        planner
            .build_syllabus("Math", &[ModuleSpec::new("Algebra", ["Eq1"])])
            .unwrap();
        planner
            .build_syllabus("Math", &[ModuleSpec::new("Calculus", ["Limits"])])
            .unwrap();

        let tree = planner.export_syllabus("Math").unwrap();
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].name, "Calculus");
        assert!(planner.export_syllabus("Physics").is_none());
    }

    #[test]
    fn snapshot_combines_order_marks_and_progress() {
        let mut planner = abc();
        planner.generate_study_path().unwrap();
        planner.submit_marks([("C", 30), ("A", 75), ("B", 20)]);

        let snapshot = planner.snapshot();
        assert_eq!(snapshot.study_order, vec!["A", "B", "C"]);
        assert_eq!(
            snapshot.marks,
            vec![("A".to_string(), 75), ("B".to_string(), 20), ("C".to_string(), 30)]
        );
        let statuses: Vec<ProgressStatus> = snapshot.progress.iter().map(|p| p.status).collect();
        assert_eq!(
            statuses,
            vec![
                ProgressStatus::Completed,
                ProgressStatus::InProgress,
                ProgressStatus::Pending,
            ]
        );
    }

    #[test]
    fn snapshot_marks_follow_study_order_then_unplanned_by_name() {
        let mut planner = Planner::new();
        for s in ["Zoology", "Biology", "Anatomy"] {
            planner.add_subject(s);
        }
        assert!(planner.add_dependency("Zoology", "Biology").succeeded());
        planner.generate_study_path().unwrap();
        planner.submit_marks([("Latin", 90), ("Anatomy", 55), ("Zoology", 70), ("Greek", 10)]);

        let snapshot = planner.snapshot();
        let marks: Vec<(&str, Score)> = snapshot
            .marks
            .iter()
            .map(|(s, score)| (s.as_str(), *score))
            .collect();
        assert_eq!(
            marks,
            vec![("Zoology", 70), ("Anatomy", 55), ("Greek", 10), ("Latin", 90)]
        );
    }
}
