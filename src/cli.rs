//! CLI definition and parsing.
//! Defines Args and turns them into a validated Config.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug and wins over it.
//! - --ext accepts `txt` or `.txt`; matching is case-insensitive.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel, TraversalConfig};
use crate::config::{DEST_DEFAULT, EXT_DEFAULT, SOURCE_DEFAULT};
use crate::errors::ExtMoveError;

/// Gather files with one extension into a single directory, never overwriting.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Move every file with a given extension into one directory without overwriting"
)]
pub struct Args {
    /// Root directory to scan.
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath, default_value = SOURCE_DEFAULT)]
    pub source: PathBuf,

    /// Destination directory; created with parents when missing.
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath, default_value = DEST_DEFAULT)]
    pub dest: PathBuf,

    /// Only look at files directly inside the source directory.
    #[arg(long)]
    pub no_recursive: bool,

    /// Extension to collect, e.g. `.txt` (case-insensitive).
    #[arg(long, value_name = "EXT", default_value = EXT_DEFAULT)]
    pub ext: String,

    /// Report what would be moved without touching the filesystem.
    #[arg(
        long,
        help = "Show what would be done, but do not modify files/directories"
    )]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Build the immutable traversal description from the flags.
    pub fn traversal(&self) -> Result<TraversalConfig, ExtMoveError> {
        TraversalConfig::new(&self.source, &self.dest, !self.no_recursive, &self.ext)
    }

    /// Build the full run configuration. Fails only on an invalid `--ext`.
    pub fn to_config(&self) -> Result<Config, ExtMoveError> {
        let mut cfg = Config::new(self.traversal()?);
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        cfg.log_file = self.log_file.clone();
        cfg.json = self.json;
        cfg.dry_run = self.dry_run;
        Ok(cfg)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
