//! CLI for the check-checksums monitoring plugin.

mod report;

use anyhow::Result;
use ccheck_core::config::{self, Settings};
use ccheck_core::Outcome;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

pub use report::Report;

/// Verify that files hash to an expected SHA-256 digest.
///
/// Without --hash or --hashfile, every file is compared to the first one.
#[derive(Debug, Parser)]
#[command(name = "check-checksums", version)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Comma separated list of files to check.
    #[arg(short = 'f', long = "files", value_name = "FILES")]
    pub files: OsString,

    /// The hash these files must hash as.
    #[arg(short = 'h', long = "hash", value_name = "SHA2HASH")]
    pub hash: Option<String>,

    /// File containing the hash these files must hash as.
    #[arg(short = 'H', long = "hashfile", value_name = "SHA2HASHFILE")]
    pub hashfile: Option<PathBuf>,

    /// Warn instead of critical if they don't match.
    #[arg(short = 'w', long = "warn-only")]
    pub warn_only: bool,

    /// Settings file (defaults to ~/.config/ccheck/config.toml if present).
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Cli {
    /// Parse process arguments and run the check. Always yields a report;
    /// argument errors exit through clap before this returns.
    pub fn run_from_args() -> Report {
        Cli::parse().run()
    }

    pub fn run(self) -> Report {
        let settings = match config::load(self.config.as_deref()) {
            Ok(s) => s,
            Err(err) => {
                tracing::error!("settings: {:#}", err);
                return Report::failed(Settings::default().check_name, &err);
            }
        };

        match self.check(&settings) {
            Ok(outcome) => Report::new(settings.check_name, outcome),
            Err(err) => {
                tracing::error!("check failed: {:#}", err);
                Report::failed(settings.check_name, &err)
            }
        }
    }

    fn check(&self, settings: &Settings) -> Result<Outcome> {
        let warn_only = self.warn_only || settings.warn_only;
        tracing::debug!(
            "files={:?} hash_given={} hashfile={:?} warn_only={}",
            self.files,
            self.hash.is_some(),
            self.hashfile,
            warn_only
        );
        let outcome = ccheck_core::check(
            &self.files,
            self.hash.clone(),
            self.hashfile.clone(),
            warn_only,
        )?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests;
