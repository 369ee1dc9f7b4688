//! Per-file outcomes and batch summary.

use anyhow::Error;
use std::fmt;
use std::path::{Path, PathBuf};

/// Pipeline step at which a conversion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Source file missing, unreadable or not UTF8.
    Read,
    /// Markdown formatting failed. The renderer writes into memory and
    /// cannot hit I/O errors, so no input is known to reach this stage.
    Render,
    /// Output file could not be written.
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Read => "read",
            Stage::Render => "render",
            Stage::Write => "write",
        };
        f.write_str(name)
    }
}

/// Failed conversion: the stage that failed and its cause.
#[derive(Debug)]
pub struct Failure {
    pub stage: Stage,
    pub error: Error,
}

impl Failure {
    pub fn new(stage: Stage, error: Error) -> Self {
        Self { stage, error }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {:#}", self.stage, self.error)
    }
}

/// Result of converting one candidate file.
#[derive(Debug)]
pub struct Outcome {
    name: String,
    result: Result<PathBuf, Failure>,
}

impl Outcome {
    pub fn new(name: impl Into<String>, result: Result<PathBuf, Failure>) -> Self {
        Self {
            name: name.into(),
            result,
        }
    }

    /// Source filename.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path written, if the conversion succeeded.
    pub fn output(&self) -> Option<&Path> {
        self.result.as_ref().ok().map(PathBuf::as_path)
    }

    /// Failure details, if the conversion failed.
    pub fn failure(&self) -> Option<&Failure> {
        self.result.as_ref().err()
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Summary of one batch run.
///
/// Either the source listing failed and nothing was attempted, or every
/// candidate has an [`Outcome`] in listing order.
#[derive(Debug)]
pub struct BatchReport {
    outcomes: Vec<Outcome>,
    listing_error: Option<Error>,
}

impl BatchReport {
    pub fn completed(outcomes: Vec<Outcome>) -> Self {
        Self {
            outcomes,
            listing_error: None,
        }
    }

    pub fn listing_failed(error: Error) -> Self {
        Self {
            outcomes: Vec::new(),
            listing_error: Some(error),
        }
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Error that prevented the source directory from being listed.
    pub fn listing_error(&self) -> Option<&Error> {
        self.listing_error.as_ref()
    }

    /// Number of files written.
    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of candidates that failed at any stage.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.converted()
    }

    /// Number of candidates attempted.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}
