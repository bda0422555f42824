//! Resolve the single digest every file is compared against.

use crate::checksum::sha256_path;
use crate::error::{CheckError, Result};
use crate::options::CheckOptions;
use std::fs;
use std::path::Path;

/// Returns the expected digest, in priority order: hash file, explicit hash,
/// digest of the first file.
///
/// A single file with no hash source is `CheckError::NothingToCompare`; this
/// is decided before any I/O.
pub fn resolve_expected(opts: &CheckOptions) -> Result<String> {
    if opts.files().len() == 1 && opts.expected_hash().is_none() && opts.hash_file().is_none() {
        return Err(CheckError::NothingToCompare);
    }

    if let Some(path) = opts.hash_file() {
        let hash = read_hash_file(path)?;
        tracing::debug!("expected hash from hash file {}", path.display());
        return Ok(hash);
    }

    if let Some(hash) = opts.expected_hash() {
        tracing::debug!("expected hash given explicitly");
        return Ok(hash.to_string());
    }

    // files is non-empty by construction
    let first = &opts.files()[0];
    let hash = sha256_path(first).map_err(|source| CheckError::Baseline {
        path: first.clone(),
        source,
    })?;
    tracing::debug!("expected hash taken from first file {}", first.display());
    Ok(hash)
}

/// Read a hash file, stripping one trailing line terminator.
///
/// Only a failed read is an error. Bytes that are not UTF-8 are replaced, so
/// such a file simply never matches any digest.
pub fn read_hash_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| CheckError::HashFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(chomp(&String::from_utf8_lossy(&bytes)).to_string())
}

fn chomp(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .or_else(|| s.strip_suffix('\r'))
        .unwrap_or(s)
}
