//! Error types for a checksum run.

use std::path::PathBuf;
use thiserror::Error;

/// Message reported when a single file is given with nothing to compare it to.
pub const NOTHING_TO_COMPARE: &str = "We have nothing to compare this file with.";

#[derive(Error, Debug)]
pub enum CheckError {
    /// The file list was empty after parsing.
    #[error("No files given to check.")]
    NoFiles,

    /// One file and neither an explicit hash nor a hash file.
    #[error("{}", NOTHING_TO_COMPARE)]
    NothingToCompare,

    /// The hash file could not be read.
    #[error("cannot read hash file {}", path.display())]
    HashFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The first file could not be hashed to serve as the baseline.
    #[error("cannot hash baseline file {}", path.display())]
    Baseline {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    /// True for configuration problems that are reported as Unknown rather
    /// than aborting the run.
    pub fn is_config(&self) -> bool {
        matches!(self, CheckError::NoFiles | CheckError::NothingToCompare)
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
