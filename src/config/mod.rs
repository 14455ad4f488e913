//! Config module.
//! Provides the immutable traversal configuration, run options, log-path
//! helpers, and pre-run validation of the source and destination roots.

pub mod paths;
pub mod types;
mod validate;

pub use paths::{absolute_or_relaxed, path_has_symlink_ancestor};
pub use types::{Config, LogLevel, TraversalConfig, normalize_extension};
pub use validate::{ensure_source_dir, prepare_destination};

/// Defaults applied when the corresponding flag is absent.
pub const SOURCE_DEFAULT: &str = ".";
pub const DEST_DEFAULT: &str = "./organized";
pub const EXT_DEFAULT: &str = ".txt";
