//! Move one candidate into the destination directory.
//! Resolves a collision-free name, then performs a single rename. Failures are
//! returned as a `MoveResult::Failed` so the caller can keep going.

use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::errors::ExtMoveError;

use super::atomic::rename_into_place;
use super::duplicate::resolve_destination;
use super::helpers::describe_io_error;
use super::outcome::MoveResult;
use super::util::is_cross_device;

/// Move `src` into `dest_dir` under a name that does not collide.
///
/// With `dry_run` the name is resolved against the current directory state
/// and reported as `Planned`; nothing is renamed.
pub fn move_candidate(src: &Path, dest_dir: &Path, dry_run: bool) -> MoveResult {
    let outcome = resolve_for(src, dest_dir).and_then(|dest| {
        if dry_run {
            info!(src = %src.display(), dest = %dest.display(), "dry-run: would move file");
            return Ok(MoveResult::Planned {
                from: src.to_path_buf(),
                to: dest,
            });
        }
        rename_candidate(src, &dest)?;
        info!(src = %src.display(), dest = %dest.display(), "Moved file");
        Ok(MoveResult::Moved {
            from: src.to_path_buf(),
            to: dest,
        })
    });

    outcome.unwrap_or_else(|reason| {
        error!(code = reason.code(), src = %src.display(), error = %reason, "Failed to move file");
        MoveResult::Failed {
            from: src.to_path_buf(),
            reason,
        }
    })
}

fn resolve_for(src: &Path, dest_dir: &Path) -> Result<PathBuf, ExtMoveError> {
    let name = src
        .file_name()
        .ok_or_else(|| ExtMoveError::MissingFileName(src.to_path_buf()))?;
    resolve_destination(dest_dir, name)
}

fn rename_candidate(src: &Path, dest: &Path) -> Result<(), ExtMoveError> {
    rename_into_place(src, dest).map_err(|source| {
        if is_cross_device(&source) {
            warn!(src = %src.display(), dest = %dest.display(), "cross-filesystem rename is not supported; file left in place");
        }
        ExtMoveError::Rename {
            from: src.to_path_buf(),
            to: dest.to_path_buf(),
            detail: describe_io_error("rename", src, &source),
            source,
        }
    })
}
