// src/config/validate.rs

use std::collections::HashSet;

use tracing::warn;

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::{PlannerError, Result};
use crate::syllabus::check_limits;

impl TryFrom<RawPlanFile> for PlanFile {
    type Error = crate::errors::PlannerError;

    fn try_from(raw: RawPlanFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_plan(&raw)?;
        Ok(PlanFile::new_unchecked(raw))
    }
}

fn validate_raw_plan(plan: &RawPlanFile) -> Result<()> {
    ensure_has_subjects(plan)?;
    validate_subjects(plan)?;
    validate_dependencies(plan)?;
    validate_syllabi(plan)?;
    warn_on_unplanned_marks(plan);
    Ok(())
}

fn ensure_has_subjects(plan: &RawPlanFile) -> Result<()> {
    if plan.subjects.is_empty() {
        return Err(PlannerError::ConfigError(
            "plan must list at least one subject in `subjects`".to_string(),
        ));
    }
    Ok(())
}

fn validate_subjects(plan: &RawPlanFile) -> Result<()> {
    let mut seen = HashSet::new();
    for subject in plan.subjects.iter() {
        if subject.trim().is_empty() {
            return Err(PlannerError::ConfigError(
                "subject names must not be empty".to_string(),
            ));
        }
        if !seen.insert(subject.as_str()) {
            return Err(PlannerError::ConfigError(format!(
                "subject '{}' is listed more than once",
                subject
            )));
        }
    }
    Ok(())
}

fn validate_dependencies(plan: &RawPlanFile) -> Result<()> {
    let subjects: HashSet<&str> = plan.subjects.iter().map(|s| s.as_str()).collect();
    let mut seen = HashSet::new();

    for dep in plan.dependencies.iter() {
        for name in [&dep.prerequisite, &dep.dependent] {
            if !subjects.contains(name.as_str()) {
                return Err(PlannerError::ConfigError(format!(
                    "dependency '{}' -> '{}' references unknown subject '{}'",
                    dep.prerequisite, dep.dependent, name
                )));
            }
        }
        if dep.prerequisite == dep.dependent {
            return Err(PlannerError::ConfigError(format!(
                "subject '{}' cannot depend on itself",
                dep.prerequisite
            )));
        }
        if !seen.insert((dep.prerequisite.as_str(), dep.dependent.as_str())) {
            return Err(PlannerError::ConfigError(format!(
                "dependency '{}' -> '{}' is listed more than once",
                dep.prerequisite, dep.dependent
            )));
        }
    }
    Ok(())
}

fn validate_syllabi(plan: &RawPlanFile) -> Result<()> {
    for syllabus in plan.syllabi.iter() {
        check_limits(&syllabus.subject, &syllabus.modules)?;
    }
    Ok(())
}

// Marks for subjects outside the graph are kept (they still rank), but they
// never show up in the study path or progress.
fn warn_on_unplanned_marks(plan: &RawPlanFile) {
    for subject in plan.marks.keys() {
        if !plan.subjects.contains(subject) {
            warn!(%subject, "marks recorded for a subject that is not in `subjects`");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::DependencySpec;

    fn raw(subjects: &[&str], deps: &[(&str, &str)]) -> RawPlanFile {
        RawPlanFile {
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            dependencies: deps.iter().map(|(p, d)| DependencySpec::new(p, d)).collect(),
            ..RawPlanFile::default()
        }
    }

    fn config_error(raw: RawPlanFile) -> String {
        match PlanFile::try_from(raw) {
            Err(PlannerError::ConfigError(msg)) => msg,
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn empty_plan_is_rejected() {
        assert!(config_error(raw(&[], &[])).contains("at least one subject"));
    }

    #[test]
    fn duplicate_subject_is_rejected() {
        assert!(config_error(raw(&["A", "A"], &[])).contains("more than once"));
    }

    #[test]
    fn unknown_dependency_is_rejected() {
        let msg = config_error(raw(&["A"], &[("A", "Ghost")]));
        assert!(msg.contains("unknown subject 'Ghost'"));
    }

    #[test]
    fn self_dependency_is_rejected() {
        assert!(config_error(raw(&["A"], &[("A", "A")])).contains("cannot depend on itself"));
    }

    #[test]
    fn repeated_dependency_is_rejected() {
        let msg = config_error(raw(&["A", "B"], &[("A", "B"), ("A", "B")]));
        assert!(msg.contains("listed more than once"));
    }

    #[test]
    fn cycles_are_left_to_path_generation() {
        let plan = PlanFile::try_from(raw(&["A", "B"], &[("A", "B"), ("B", "A")])).unwrap();
        assert_eq!(plan.dependencies.len(), 2);
    }
}
