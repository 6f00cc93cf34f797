// src/progress.rs

//! Progress tracking derived from the study order and recorded marks.

use serde::Serialize;

use crate::ranking::ScoreBoard;
use crate::types::{COMPLETION_THRESHOLD, ProgressStatus, SubjectName};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectProgress {
    pub subject: SubjectName,
    pub status: ProgressStatus,
}

/// Derive the progress of every subject in `order`.
///
/// - score >= [`COMPLETION_THRESHOLD`] is `Completed`, anything else (or no
///   score at all) is `Pending`;
/// - the first `Pending` subject in study order is promoted to `InProgress`.
pub fn derive_progress(order: &[SubjectName], scores: &ScoreBoard) -> Vec<SubjectProgress> {
    let mut progress: Vec<SubjectProgress> = order
        .iter()
        .map(|subject| {
            let status = match scores.score_of(subject) {
                Some(score) if score >= COMPLETION_THRESHOLD => ProgressStatus::Completed,
                _ => ProgressStatus::Pending,
            };
            SubjectProgress {
                subject: subject.clone(),
                status,
            }
        })
        .collect();

    if let Some(next) = progress
        .iter_mut()
        .find(|p| p.status == ProgressStatus::Pending)
    {
        next.status = ProgressStatus::InProgress;
    }

    progress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(names: &[&str]) -> Vec<SubjectName> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn statuses(progress: &[SubjectProgress]) -> Vec<ProgressStatus> {
        progress.iter().map(|p| p.status).collect()
    }

    #[test]
    fn first_pending_subject_is_in_progress() {
        let mut scores = ScoreBoard::new();
        scores.record_all([("A", 70), ("B", 49), ("C", 10)]);

        let progress = derive_progress(&order(&["A", "B", "C"]), &scores);
        assert_eq!(
            statuses(&progress),
            vec![
                ProgressStatus::Completed,
                ProgressStatus::InProgress,
                ProgressStatus::Pending,
            ]
        );
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut scores = ScoreBoard::new();
        scores.record("A", COMPLETION_THRESHOLD);
        let progress = derive_progress(&order(&["A"]), &scores);
        assert_eq!(statuses(&progress), vec![ProgressStatus::Completed]);
    }

    #[test]
    fn unscored_subjects_are_pending() {
        let scores = ScoreBoard::new();
        let progress = derive_progress(&order(&["A", "B"]), &scores);
        assert_eq!(
            statuses(&progress),
            vec![ProgressStatus::InProgress, ProgressStatus::Pending]
        );
    }

    #[test]
    fn all_completed_has_nothing_in_progress() {
        let mut scores = ScoreBoard::new();
        scores.record_all([("A", 90), ("B", 50)]);
        let progress = derive_progress(&order(&["A", "B"]), &scores);
        assert!(progress.iter().all(|p| p.status == ProgressStatus::Completed));
    }
}
