//! Core configuration types.
//! - TraversalConfig is the immutable description of one run's walk.
//! - Config wraps it with logging and dry-run options.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::ExtMoveError;

use super::{DEST_DEFAULT, EXT_DEFAULT, SOURCE_DEFAULT};

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings and errors only (default); the per-move report still prints
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Normalize a user-supplied extension filter to lowercase `.ext` form.
///
/// `txt`, `.txt` and `.TXT` all become `.txt`. Empty filters, multi-part
/// filters like `.tar.gz` and filters containing a path separator are rejected.
pub fn normalize_extension(raw: &str) -> Result<String, ExtMoveError> {
    let trimmed = raw.trim();
    let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if bare.is_empty() {
        return Err(ExtMoveError::InvalidExtension {
            ext: raw.to_string(),
            reason: "extension must not be empty",
        });
    }
    if bare.contains(['/', '\\']) {
        return Err(ExtMoveError::InvalidExtension {
            ext: raw.to_string(),
            reason: "extension must not contain a path separator",
        });
    }
    if bare.contains('.') {
        return Err(ExtMoveError::InvalidExtension {
            ext: raw.to_string(),
            reason: "only the last suffix of a file name is compared",
        });
    }
    Ok(format!(".{}", bare.to_lowercase()))
}

/// Immutable description of one traversal. Built once, then only borrowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalConfig {
    source_root: PathBuf,
    dest_root: PathBuf,
    recursive: bool,
    target_extension: String,
}

impl TraversalConfig {
    pub fn new(
        source_root: impl Into<PathBuf>,
        dest_root: impl Into<PathBuf>,
        recursive: bool,
        extension: &str,
    ) -> Result<Self, ExtMoveError> {
        Ok(Self {
            source_root: source_root.into(),
            dest_root: dest_root.into(),
            recursive,
            target_extension: normalize_extension(extension)?,
        })
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn dest_root(&self) -> &Path {
        &self.dest_root
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }

    /// Lowercase, dot-prefixed extension (e.g. `.txt`).
    pub fn target_extension(&self) -> &str {
        &self.target_extension
    }
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from(SOURCE_DEFAULT),
            dest_root: PathBuf::from(DEST_DEFAULT),
            recursive: true,
            target_extension: EXT_DEFAULT.to_string(),
        }
    }
}

/// Runtime configuration for one invocation.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// What to walk and where to put matches
    pub traversal: TraversalConfig,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Emit logs as JSON
    pub json: bool,
    /// If true, report planned moves but do not modify the filesystem
    pub dry_run: bool,
}

impl Config {
    /// Construct a Config around a traversal; other fields use defaults.
    pub fn new(traversal: TraversalConfig) -> Self {
        Self {
            traversal,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_gets_leading_dot_and_lowercase() {
        assert_eq!(normalize_extension("txt").unwrap(), ".txt");
        assert_eq!(normalize_extension(".TXT").unwrap(), ".txt");
        assert_eq!(normalize_extension(" .Md ").unwrap(), ".md");
    }

    #[test]
    fn empty_or_separator_extension_rejected() {
        assert!(normalize_extension("").is_err());
        assert!(normalize_extension(".").is_err());
        let err = normalize_extension("a/b").unwrap_err();
        assert!(err.to_string().contains("path separator"));
        assert!(normalize_extension(".tar.gz").is_err());
    }

    #[test]
    fn default_traversal_matches_cli_defaults() {
        let t = TraversalConfig::default();
        assert_eq!(t.source_root(), Path::new("."));
        assert_eq!(t.dest_root(), Path::new("./organized"));
        assert!(t.recursive());
        assert_eq!(t.target_extension(), ".txt");
    }

    #[test]
    fn log_level_round_trips_through_display() {
        for lvl in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Info, LogLevel::Debug] {
            assert_eq!(lvl.to_string().parse::<LogLevel>().unwrap(), lvl);
        }
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
