// src/config/loader.rs

use std::path::{Path, PathBuf};

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::Result;
use crate::fs::FileSystem;

/// Load a plan file and return the raw, unvalidated `RawPlanFile`.
///
/// This only performs TOML deserialization. Use [`load_and_validate`] for
/// reference checks.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawPlanFile> {
    let contents = fs.read_to_string(path.as_ref())?;
    let plan: RawPlanFile = toml::from_str(&contents)?;
    Ok(plan)
}

/// Parse and validate plan TOML held in memory.
pub fn parse_plan(contents: &str) -> Result<PlanFile> {
    let raw: RawPlanFile = toml::from_str(contents)?;
    PlanFile::try_from(raw)
}

/// Load a plan file from path and validate it.
///
/// - Reads TOML.
/// - Checks for:
///   - an empty subject list,
///   - duplicate subjects,
///   - unknown, self-referential or repeated dependencies,
///   - oversized syllabi.
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<PlanFile> {
    let raw = load_from_path(fs, path)?;
    PlanFile::try_from(raw)
}

/// Plan file used when `--plan` is not given: `StudyPlan.toml` in the
/// current working directory.
pub fn default_plan_path() -> PathBuf {
    PathBuf::from("StudyPlan.toml")
}
