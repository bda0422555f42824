//! Verify files against an expected SHA-256 digest and reduce the result to a
//! monitoring status (OK, WARNING, CRITICAL, UNKNOWN).

pub mod config;
pub mod logging;

pub mod checksum;
pub mod error;
pub mod evaluate;
pub mod options;
pub mod outcome;
pub mod resolver;
pub mod verifier;

pub use error::{CheckError, NOTHING_TO_COMPARE};
pub use evaluate::{EvaluationResult, FileStatus};
pub use options::CheckOptions;
pub use outcome::{Outcome, Severity};
pub use verifier::{check, ChecksumVerifier};
