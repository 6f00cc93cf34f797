// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Duplicate or missing subjects during graph insertion are *not* errors;
//! they are reported as values (see [`crate::graph::DependencyOutcome`]).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Subject not found: {0}")]
    SubjectNotFound(String),

    #[error("Cycle detected in prerequisites: {0}")]
    CycleDetected(String),

    #[error("Syllabus too large: {0}")]
    SyllabusTooLarge(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PlannerError>;
