//! Reduce per-file results to a single monitoring status.

use crate::evaluate::{EvaluationResult, FileStatus};
use std::fmt;

pub const FILES_MATCH: &str = "Files match.";

/// Monitoring severity, ordered from healthy to indeterminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    /// Conventional plugin exit code (0 ok, 1 warning, 2 critical, 3 unknown).
    pub fn exit_code(self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one run: a severity and a possibly multi-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub severity: Severity,
    pub message: String,
}

impl Outcome {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(Severity::Unknown, message)
    }
}

/// Collect one line per non-matching file and pick the severity.
pub fn reduce(results: &[EvaluationResult], warn_only: bool) -> Outcome {
    let errors: Vec<String> = results
        .iter()
        .filter_map(|r| match r.status {
            FileStatus::Matched => None,
            FileStatus::Mismatched => Some(format!("{} does not match", r.path.display())),
            FileStatus::Missing => Some(format!("{} does not exist", r.path.display())),
        })
        .collect();

    if errors.is_empty() {
        Outcome::new(Severity::Ok, FILES_MATCH)
    } else if warn_only {
        Outcome::new(Severity::Warning, errors.join("\n"))
    } else {
        Outcome::new(Severity::Critical, errors.join("\n"))
    }
}
