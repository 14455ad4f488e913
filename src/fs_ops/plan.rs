//! Traversal planner.
//!
//! Walks the source tree top-down with walkdir and yields candidate files one
//! at a time. Each visited entry gets a single decision:
//! - `Prune`: a directory whose subtree is skipped entirely
//! - `Ignore`: nothing to yield, keep walking
//! - `Candidate`: a regular file with a matching extension
//!
//! Rules, first match wins:
//! 1. a directory that canonicalizes to the destination is pruned
//! 2. without recursion, every directory below the source root is pruned
//! 3. anything inside the destination is ignored (symlink aliases included)
//! 4. directories and non-regular files are ignored
//! 5. files whose extension differs are ignored
//!
//! Per-entry read/stat failures are logged and skipped. A failure on the root
//! itself ends the sequence with a fatal error.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::{TraversalConfig, absolute_or_relaxed, ensure_source_dir};
use crate::errors::ExtMoveError;

/// Decision for one visited entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Yield this entry as a candidate.
    Candidate,
    /// Produce nothing, continue into children if any.
    Ignore,
    /// Skip this directory and everything under it.
    Prune,
}

/// Lazy sequence of candidate paths for one traversal.
///
/// Items are `Err` only for fatal failures; once one is returned the
/// sequence is exhausted.
pub struct Planner<'a> {
    config: &'a TraversalConfig,
    dest_real: PathBuf,
    dest_abs: PathBuf,
    walker: walkdir::IntoIter,
    skipped: usize,
    finished: bool,
}

impl<'a> Planner<'a> {
    /// Start a walk. Fails if the source root is missing or unreadable.
    pub fn new(config: &'a TraversalConfig) -> Result<Self, ExtMoveError> {
        ensure_source_dir(config.source_root())?;

        let dest = config.dest_root();
        let dest_abs = std::path::absolute(dest).unwrap_or_else(|_| dest.to_path_buf());
        let dest_real = absolute_or_relaxed(dest);
        debug!(dest = %dest_real.display(), "destination excluded from traversal");

        let walker = WalkDir::new(config.source_root())
            .follow_links(false)
            .into_iter();

        Ok(Self {
            config,
            dest_real,
            dest_abs,
            walker,
            skipped: 0,
            finished: false,
        })
    }

    /// Number of entries skipped because they could not be read.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Apply the skip rules to one entry.
    pub fn decide(&self, entry: &DirEntry) -> Visit {
        let path = entry.path();
        let is_dir = entry.file_type().is_dir();
        let real = if is_dir || entry.file_type().is_file() {
            Some(absolute_or_relaxed(path))
        } else {
            None
        };

        if is_dir && real.as_deref() == Some(self.dest_real.as_path()) {
            return Visit::Prune;
        }
        if is_dir && entry.depth() > 0 && !self.config.recursive() {
            return Visit::Prune;
        }
        if self.inside_dest(path, real.as_deref()) {
            return Visit::Ignore;
        }
        if !entry.file_type().is_file() {
            return Visit::Ignore;
        }
        if matches_extension(entry.file_name(), self.config.target_extension()) {
            Visit::Candidate
        } else {
            Visit::Ignore
        }
    }

    fn inside_dest(&self, path: &Path, real: Option<&Path>) -> bool {
        if real.is_some_and(|r| r.starts_with(&self.dest_real)) {
            return true;
        }
        std::path::absolute(path).is_ok_and(|abs| abs.starts_with(&self.dest_abs))
    }
}

impl Iterator for Planner<'_> {
    type Item = Result<PathBuf, ExtMoveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.config.source_root().to_path_buf());
                    if err.depth() == 0 {
                        self.finished = true;
                        return Some(Err(ExtMoveError::WalkStart {
                            path,
                            source: err.into(),
                        }));
                    }
                    self.skipped += 1;
                    warn!(path = %path.display(), error = %err, "Error accessing entry; skipping");
                    continue;
                }
            };

            match self.decide(&entry) {
                Visit::Candidate => {
                    trace!(path = %entry.path().display(), "candidate");
                    return Some(Ok(entry.into_path()));
                }
                Visit::Ignore => {}
                Visit::Prune => {
                    debug!(path = %entry.path().display(), "pruned directory");
                    self.walker.skip_current_dir();
                }
            }
        }
    }
}

/// Case-insensitive comparison of a file name's last suffix against `target`
/// (which must already be lowercase and dot-prefixed).
///
/// The suffix starts at the last `.` of the name, so `.txt` as a whole file
/// name has suffix `.txt` and `notes.TXT` matches `.txt`.
pub fn matches_extension(file_name: &OsStr, target: &str) -> bool {
    dotted_extension(file_name).is_some_and(|ext| ext == target)
}

fn dotted_extension(file_name: &OsStr) -> Option<String> {
    let name = file_name.to_string_lossy();
    name.rfind('.').map(|i| name[i..].to_lowercase())
}
