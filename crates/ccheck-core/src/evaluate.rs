//! Per-file evaluation against the expected digest.

use crate::checksum::sha256_path;
use std::fs;
use std::path::{Path, PathBuf};

/// How a single file compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Matched,
    Mismatched,
    /// Not an existing, readable regular file.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Hash `path` and compare it (exact, case-sensitive) with `expected`.
///
/// Never fails: anything that prevents reading the file, including the file
/// vanishing after the existence check, is reported as `Missing`.
pub fn evaluate_file(path: &Path, expected: &str) -> EvaluationResult {
    let status = match fs::metadata(path) {
        Ok(meta) if meta.is_file() => match sha256_path(path) {
            Ok(actual) if actual == expected => FileStatus::Matched,
            Ok(_) => FileStatus::Mismatched,
            Err(e) => {
                tracing::warn!("{} became unreadable: {}", path.display(), e);
                FileStatus::Missing
            }
        },
        _ => FileStatus::Missing,
    };
    tracing::debug!("{} -> {:?}", path.display(), status);
    EvaluationResult {
        path: path.to_path_buf(),
        status,
    }
}

/// One result per path, in input order.
pub fn evaluate_files(files: &[PathBuf], expected: &str) -> Vec<EvaluationResult> {
    files.iter().map(|p| evaluate_file(p, expected)).collect()
}
