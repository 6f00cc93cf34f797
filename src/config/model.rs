// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::syllabus::ModuleSpec;
use crate::types::{Score, SubjectName};

/// Plan file as read from TOML, before validation.
///
/// ```toml
/// subjects = ["Math", "Physics"]
///
/// [[dependency]]
/// prerequisite = "Math"
/// dependent = "Physics"
///
/// [marks]
/// Math = 80
/// Physics = 40
///
/// [[syllabus]]
/// subject = "Math"
/// modules = [{ name = "Algebra", topics = ["Eq1", "Eq2"] }]
/// ```
///
/// Every section is optional at this stage; [`PlanFile::try_from`] decides
/// what is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlanFile {
    /// Subjects in the order they are added to the graph.
    #[serde(default)]
    pub subjects: Vec<SubjectName>,

    /// `[[dependency]]` entries.
    #[serde(default, rename = "dependency")]
    pub dependencies: Vec<DependencySpec>,

    /// `[marks]` table: subject -> score.
    #[serde(default)]
    pub marks: BTreeMap<SubjectName, Score>,

    /// `[[syllabus]]` entries.
    #[serde(default, rename = "syllabus")]
    pub syllabi: Vec<SyllabusSpec>,
}

/// One prerequisite relation: `prerequisite` must be studied before `dependent`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DependencySpec {
    pub prerequisite: SubjectName,
    pub dependent: SubjectName,
}

impl DependencySpec {
    pub fn new(prerequisite: &str, dependent: &str) -> Self {
        Self {
            prerequisite: prerequisite.to_string(),
            dependent: dependent.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SyllabusSpec {
    pub subject: SubjectName,
    #[serde(default)]
    pub modules: Vec<ModuleSpec>,
}

/// A validated plan file.
///
/// Only obtainable through `TryFrom<RawPlanFile>`, so holders know that
/// every dependency references a declared subject and no relation is
/// duplicated or self-referential. Cycles are *not* rejected here.
#[derive(Debug, Clone)]
pub struct PlanFile {
    pub subjects: Vec<SubjectName>,
    pub dependencies: Vec<DependencySpec>,
    pub marks: BTreeMap<SubjectName, Score>,
    pub syllabi: Vec<SyllabusSpec>,
}

impl PlanFile {
    pub(crate) fn new_unchecked(raw: RawPlanFile) -> Self {
        Self {
            subjects: raw.subjects,
            dependencies: raw.dependencies,
            marks: raw.marks,
            syllabi: raw.syllabi,
        }
    }
}
