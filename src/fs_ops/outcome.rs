//! Per-file outcomes and the run tally built from them.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::errors::ExtMoveError;

/// Result of handling one candidate. Used for reporting only.
#[derive(Debug)]
pub enum MoveResult {
    /// The file was renamed into the destination.
    Moved { from: PathBuf, to: PathBuf },
    /// Dry-run: the file would have been renamed to `to`.
    Planned { from: PathBuf, to: PathBuf },
    /// The file stayed where it was.
    Failed { from: PathBuf, reason: ExtMoveError },
}

impl MoveResult {
    pub fn source(&self) -> &Path {
        match self {
            MoveResult::Moved { from, .. }
            | MoveResult::Planned { from, .. }
            | MoveResult::Failed { from, .. } => from,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, MoveResult::Failed { .. })
    }
}

/// Counts accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub moved: usize,
    pub planned: usize,
    pub failed: usize,
    /// Entries the walk could not read
    pub skipped: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &MoveResult) {
        match result {
            MoveResult::Moved { .. } => self.moved += 1,
            MoveResult::Planned { .. } => self.planned += 1,
            MoveResult::Failed { .. } => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.moved + self.planned + self.failed
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.planned > 0 {
            write!(f, "{} planned, {} failed", self.planned, self.failed)?;
        } else {
            write!(f, "{} moved, {} failed", self.moved, self.failed)?;
        }
        if self.skipped > 0 {
            write!(f, ", {} unreadable entries skipped", self.skipped)?;
        }
        Ok(())
    }
}
