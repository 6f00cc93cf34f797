// src/ranking.rs

//! Weak topic ranking: subjects ordered by ascending score.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::types::{Score, SubjectName};

/// One entry of a weakest-first ranking.
///
/// Serializes as a `[score, subject]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedSubject(pub Score, pub SubjectName);

impl RankedSubject {
    pub fn score(&self) -> Score {
        self.0
    }

    pub fn subject(&self) -> &str {
        &self.1
    }
}

/// Marks recorded per subject. Last write wins.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    scores: BTreeMap<SubjectName, Score>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the mark for `subject`.
    pub fn record(&mut self, subject: &str, score: Score) {
        if let Some(previous) = self.scores.insert(subject.to_string(), score) {
            debug!(%subject, previous, score, "score overwritten");
        } else {
            debug!(%subject, score, "score recorded");
        }
    }

    /// Record several marks, applied in iteration order.
    pub fn record_all<I, S>(&mut self, marks: I)
    where
        I: IntoIterator<Item = (S, Score)>,
        S: AsRef<str>,
    {
        for (subject, score) in marks {
            self.record(subject.as_ref(), score);
        }
    }

    pub fn score_of(&self, subject: &str) -> Option<Score> {
        self.scores.get(subject).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Recorded marks in subject-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Score)> {
        self.scores.iter().map(|(s, &score)| (s.as_str(), score))
    }

    /// All scored subjects, weakest first; ties broken by subject name.
    ///
    /// Does not consume the recorded marks, so repeated calls agree.
    pub fn rank_weakest(&self) -> Vec<RankedSubject> {
        let mut ranked: Vec<RankedSubject> = self
            .scores
            .iter()
            .map(|(subject, &score)| RankedSubject(score, subject.clone()))
            .collect();
        ranked.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_are_broken_alphabetically() {
        let mut board = ScoreBoard::new();
        board.record_all([("Math", 80), ("Physics", 40), ("Chem", 40)]);

        let ranked = board.rank_weakest();
        assert_eq!(
            ranked,
            vec![
                RankedSubject(40, "Chem".into()),
                RankedSubject(40, "Physics".into()),
                RankedSubject(80, "Math".into()),
            ]
        );
    }

    #[test]
    fn ranking_is_repeatable() {
        let mut board = ScoreBoard::new();
        board.record("Bio", 12);
        board.record("Art", -3);
        assert_eq!(board.rank_weakest(), board.rank_weakest());
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn last_write_wins() {
        let mut board = ScoreBoard::new();
        board.record_all([("Math", 10), ("Math", 95)]);
        assert_eq!(board.score_of("Math"), Some(95));
        assert_eq!(board.rank_weakest().len(), 1);
    }

    #[test]
    fn serializes_as_score_subject_pairs() {
        let entry = RankedSubject(40, "Chem".into());
        assert_eq!(serde_json::to_string(&entry).unwrap(), r#"[40,"Chem"]"#);
    }
}
