// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod graph;
pub mod logging;
pub mod planner;
pub mod progress;
pub mod ranking;
pub mod snapshot;
pub mod syllabus;
pub mod types;

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::{PlanFile, load_and_validate};
use crate::errors::PlannerError;
use crate::fs::{FileSystem, RealFileSystem};
use crate::planner::Planner;
use crate::snapshot::save_snapshot;

/// High-level entry point used by `main.rs`.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(args, &RealFileSystem, &mut out)
}

/// Run one CLI command against the given filesystem, writing to `out`.
///
/// This wires together:
/// - plan loading and validation
/// - the planner session
/// - text / JSON rendering of the result
pub fn run_with(args: CliArgs, fs: &dyn FileSystem, out: &mut dyn Write) -> Result<()> {
    let plan = load_and_validate(fs, &args.plan)
        .with_context(|| format!("loading plan {}", args.plan.display()))?;

    let mut planner = Planner::from_plan(&plan)?;

    match args.command {
        Command::Path => {
            let order = planner.generate_study_path()?;
            for (i, subject) in order.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, subject)?;
            }
        }
        Command::Graph { json } => {
            let export = planner.export_graph();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&export)?)?;
            } else {
                writeln!(out, "subjects ({}):", export.vertices.len())?;
                for vertex in &export.vertices {
                    writeln!(out, "  - {}", vertex.label)?;
                }
                writeln!(out, "dependencies ({}):", export.edges.len())?;
                for edge in &export.edges {
                    writeln!(out, "  {} -> {}", edge.source, edge.target)?;
                }
            }
        }
        Command::Weak { json } => {
            let ranked = planner.rank_weakest();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&ranked)?)?;
            } else {
                for entry in &ranked {
                    writeln!(out, "{} - Marks: {}", entry.subject(), entry.score())?;
                }
            }
        }
        Command::Syllabus { subject, json } => {
            let missing = || PlannerError::SubjectNotFound(format!("no syllabus for '{subject}'"));
            if json {
                let tree = planner.export_syllabus(&subject).ok_or_else(missing)?;
                writeln!(out, "{}", serde_json::to_string_pretty(&tree)?)?;
            } else {
                let rendered = planner.render_syllabus(&subject).ok_or_else(missing)?;
                write!(out, "{rendered}")?;
            }
        }
        Command::Progress => {
            planner.generate_study_path()?;
            for entry in planner.progress() {
                writeln!(out, "{} → {}", entry.subject, entry.status)?;
            }
        }
        Command::Save { output } => {
            planner.generate_study_path()?;
            save_snapshot(fs, &output, &planner.snapshot())?;
            writeln!(out, "Progress saved to {}", output.display())?;
        }
        Command::Check => print_check(&plan, out)?,
    }

    debug!("command complete");
    Ok(())
}

/// Summary of a validated plan: subjects, relations, marks and syllabi.
fn print_check(plan: &PlanFile, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "studyplan check")?;
    writeln!(out, "subjects ({}):", plan.subjects.len())?;
    for subject in &plan.subjects {
        writeln!(out, "  - {subject}")?;
    }
    writeln!(out, "dependencies ({}):", plan.dependencies.len())?;
    for dep in &plan.dependencies {
        writeln!(out, "  {} -> {}", dep.prerequisite, dep.dependent)?;
    }
    writeln!(out, "marks ({}):", plan.marks.len())?;
    for (subject, score) in &plan.marks {
        writeln!(out, "  {subject}: {score}")?;
    }
    writeln!(out, "syllabi ({}):", plan.syllabi.len())?;
    for syllabus in &plan.syllabi {
        writeln!(out, "  {} ({} modules)", syllabus.subject, syllabus.modules.len())?;
    }

    info!(subjects = plan.subjects.len(), "plan is valid");
    Ok(())
}
