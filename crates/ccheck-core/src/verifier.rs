//! Resolve, evaluate, reduce: one checksum run end to end.

use crate::error::{CheckError, Result};
use crate::evaluate::evaluate_files;
use crate::options::CheckOptions;
use crate::outcome::{reduce, Outcome};
use crate::resolver::resolve_expected;

/// Runs a checksum comparison for a fixed set of options.
#[derive(Debug, Clone)]
pub struct ChecksumVerifier {
    options: CheckOptions,
}

impl ChecksumVerifier {
    pub fn new(options: CheckOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Produce the run's outcome.
    ///
    /// Returns `Err` only for fatal I/O (hash file or baseline file
    /// unreadable). Having nothing to compare against is an `Unknown`
    /// outcome and no file is read in that case.
    pub fn run(&self) -> Result<Outcome> {
        let expected = match resolve_expected(&self.options) {
            Ok(hash) => hash,
            Err(e) if e.is_config() => return Ok(Outcome::unknown(e.to_string())),
            Err(e) => return Err(e),
        };
        let results = evaluate_files(self.options.files(), &expected);
        let outcome = reduce(&results, self.options.warn_only());
        tracing::info!("checked {} file(s): {}", results.len(), outcome.severity);
        Ok(outcome)
    }
}

/// Build options from raw CLI-style inputs and run them.
///
/// An empty file list becomes an `Unknown` outcome, the same as any other
/// configuration problem.
pub fn check(
    file_list: impl AsRef<std::ffi::OsStr>,
    expected_hash: Option<String>,
    hash_file: Option<std::path::PathBuf>,
    warn_only: bool,
) -> Result<Outcome> {
    match CheckOptions::from_file_list(file_list, expected_hash, hash_file, warn_only) {
        Ok(options) => ChecksumVerifier::new(options).run(),
        Err(e @ CheckError::NoFiles) => Ok(Outcome::unknown(e.to_string())),
        Err(e) => Err(e),
    }
}
