//! Validated, immutable options for one checksum run.

use crate::error::{CheckError, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Everything a run needs, built once before any file is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    files: Vec<PathBuf>,
    expected_hash: Option<String>,
    hash_file: Option<PathBuf>,
    warn_only: bool,
}

impl CheckOptions {
    /// Returns `CheckError::NoFiles` if `files` is empty.
    pub fn new(
        files: Vec<PathBuf>,
        expected_hash: Option<String>,
        hash_file: Option<PathBuf>,
        warn_only: bool,
    ) -> Result<Self> {
        if files.is_empty() {
            return Err(CheckError::NoFiles);
        }
        Ok(Self {
            files,
            expected_hash,
            hash_file,
            warn_only,
        })
    }

    /// Build options from the comma-separated `--files` value.
    pub fn from_file_list(
        list: impl AsRef<OsStr>,
        expected_hash: Option<String>,
        hash_file: Option<PathBuf>,
        warn_only: bool,
    ) -> Result<Self> {
        Self::new(parse_file_list(list), expected_hash, hash_file, warn_only)
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn expected_hash(&self) -> Option<&str> {
        self.expected_hash.as_deref()
    }

    pub fn hash_file(&self) -> Option<&Path> {
        self.hash_file.as_deref()
    }

    pub fn warn_only(&self) -> bool {
        self.warn_only
    }
}

/// Split a comma-separated file list.
///
/// Trailing empty entries are dropped; interior empty entries are kept and
/// later report as missing. Paths need not be UTF-8.
pub fn parse_file_list(list: impl AsRef<OsStr>) -> Vec<PathBuf> {
    let mut parts = split_commas(list.as_ref());
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts.into_iter().map(PathBuf::from).collect()
}

#[cfg(unix)]
fn split_commas(list: &OsStr) -> Vec<OsString> {
    use std::os::unix::ffi::OsStrExt;
    list.as_bytes()
        .split(|b| *b == b',')
        .map(|p| OsStr::from_bytes(p).to_os_string())
        .collect()
}

#[cfg(not(unix))]
fn split_commas(list: &OsStr) -> Vec<OsString> {
    list.to_string_lossy().split(',').map(OsString::from).collect()
}
