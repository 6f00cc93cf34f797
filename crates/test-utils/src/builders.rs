use studyplan::config::{DependencySpec, PlanFile, RawPlanFile, SyllabusSpec};
use studyplan::planner::Planner;
use studyplan::syllabus::ModuleSpec;
use studyplan::types::Score;

/// Builder for `PlanFile` to simplify test setup.
pub struct PlanFileBuilder {
    plan: RawPlanFile,
}

impl PlanFileBuilder {
    pub fn new() -> Self {
        Self {
            plan: RawPlanFile::default(),
        }
    }

    pub fn with_subject(mut self, name: &str) -> Self {
        self.plan.subjects.push(name.to_string());
        self
    }

    pub fn with_subjects(mut self, names: &[&str]) -> Self {
        self.plan
            .subjects
            .extend(names.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_dependency(mut self, prerequisite: &str, dependent: &str) -> Self {
        self.plan
            .dependencies
            .push(DependencySpec::new(prerequisite, dependent));
        self
    }

    pub fn with_mark(mut self, subject: &str, score: Score) -> Self {
        self.plan.marks.insert(subject.to_string(), score);
        self
    }

    pub fn with_syllabus(mut self, subject: &str, modules: Vec<ModuleSpec>) -> Self {
        self.plan.syllabi.push(SyllabusSpec {
            subject: subject.to_string(),
            modules,
        });
        self
    }

    pub fn raw(self) -> RawPlanFile {
        self.plan
    }

    pub fn build(self) -> PlanFile {
        PlanFile::try_from(self.plan).expect("Failed to build valid plan from builder")
    }

    pub fn planner(self) -> Planner {
        Planner::from_plan(&self.build()).expect("Failed to build planner from plan")
    }
}

impl Default for PlanFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `A -> B -> C`.
pub fn chain() -> PlanFileBuilder {
    PlanFileBuilder::new()
        .with_subjects(&["A", "B", "C"])
        .with_dependency("A", "B")
        .with_dependency("B", "C")
}

/// Render a plan as TOML, the way a user would write it.
pub fn plan_toml(subjects: &[&str], deps: &[(&str, &str)], marks: &[(&str, Score)]) -> String {
    let quoted: Vec<String> = subjects.iter().map(|s| format!("{s:?}")).collect();
    let mut out = format!("subjects = [{}]\n", quoted.join(", "));

    for (prerequisite, dependent) in deps {
        out.push_str(&format!(
            "\n[[dependency]]\nprerequisite = {prerequisite:?}\ndependent = {dependent:?}\n"
        ));
    }

    if !marks.is_empty() {
        out.push_str("\n[marks]\n");
        for (subject, score) in marks {
            out.push_str(&format!("{subject:?} = {score}\n"));
        }
    }

    out
}
