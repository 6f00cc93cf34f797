// src/snapshot.rs

//! Plain-text progress snapshot (study path, marks, progress).

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::progress::SubjectProgress;
use crate::types::{Score, SubjectName};

/// Default location of the snapshot file.
pub fn default_snapshot_path() -> PathBuf {
    PathBuf::from("progress.txt")
}

/// Everything the snapshot file records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub study_order: Vec<SubjectName>,
    /// Marks in study order, then any subjects outside it by name.
    pub marks: Vec<(SubjectName, Score)>,
    pub progress: Vec<SubjectProgress>,
}

impl ProgressSnapshot {
    /// Render the snapshot as three blank-line separated sections.
    pub fn render(&self) -> String {
        let mut out = String::from("STUDY PATH\n");
        for subject in &self.study_order {
            out.push_str(subject);
            out.push('\n');
        }

        out.push_str("\nMARKS\n");
        for (subject, score) in &self.marks {
            out.push_str(&format!("{subject} : {score}\n"));
        }

        out.push_str("\nPROGRESS\n");
        for entry in &self.progress {
            out.push_str(&format!("{} → {}\n", entry.subject, entry.status));
        }

        out
    }
}

/// Write the rendered snapshot to `path`, replacing any previous file.
pub fn save_snapshot(fs: &dyn FileSystem, path: &Path, snapshot: &ProgressSnapshot) -> Result<()> {
    fs.write(path, snapshot.render().as_bytes())?;
    info!(path = %path.display(), subjects = snapshot.study_order.len(), "progress snapshot saved");
    Ok(())
}
