//! Plugin output: `<check name> <SEVERITY>: <message>` plus exit code.

use ccheck_core::{Outcome, Severity};
use std::fmt;

/// What the monitoring agent sees for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub check_name: String,
    pub outcome: Outcome,
}

impl Report {
    pub fn new(check_name: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            check_name: check_name.into(),
            outcome,
        }
    }

    /// A check that could not run at all is reported as CRITICAL.
    pub fn failed(check_name: impl Into<String>, err: &anyhow::Error) -> Self {
        Self::new(
            check_name,
            Outcome::new(Severity::Critical, format!("Check failed to run: {:#}", err)),
        )
    }

    pub fn exit_code(&self) -> i32 {
        self.outcome.severity.exit_code()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.check_name, self.outcome.severity, self.outcome.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_line() {
        let r = Report::new("Checksum", Outcome::new(Severity::Ok, "Files match."));
        assert_eq!(r.to_string(), "Checksum OK: Files match.");
        assert_eq!(r.exit_code(), 0);
    }

    #[test]
    fn multi_line_message() {
        let r = Report::new(
            "Checksum",
            Outcome::new(Severity::Critical, "/a does not match\n/b does not exist"),
        );
        assert_eq!(
            r.to_string(),
            "Checksum CRITICAL: /a does not match\n/b does not exist"
        );
        assert_eq!(r.exit_code(), 2);
    }

    #[test]
    fn failed_run_is_critical_with_cause() {
        let err = anyhow::anyhow!("permission denied").context("cannot read hash file /h");
        let r = Report::failed("Checksum", &err);
        assert_eq!(r.exit_code(), 2);
        assert_eq!(
            r.to_string(),
            "Checksum CRITICAL: Check failed to run: cannot read hash file /h: permission denied"
        );
    }
}
