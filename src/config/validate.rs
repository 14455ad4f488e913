//! Pre-run validation.
//! Confirms the source root can be walked and makes sure the destination
//! directory exists before the first candidate is produced.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, error, info};

use crate::errors::ExtMoveError;

use super::types::Config;

impl Config {
    /// Create the destination (unless dry-run) and check the source root.
    ///
    /// Destination creation runs first: a run that cannot create its
    /// destination fails before anything is read.
    pub fn validate(&self) -> Result<(), ExtMoveError> {
        let t = &self.traversal;
        prepare_destination(t.dest_root(), self.dry_run)?;
        ensure_source_dir(t.source_root())?;
        info!(
            source = %t.source_root().display(),
            dest = %t.dest_root().display(),
            ext = t.target_extension(),
            recursive = t.recursive(),
            dry_run = self.dry_run,
            "Config validated"
        );
        Ok(())
    }
}

/// Ensure `path` exists, is a directory, and can be listed.
pub fn ensure_source_dir(path: &Path) -> Result<(), ExtMoveError> {
    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            error!("source does not exist: {}", path.display());
            return Err(ExtMoveError::SourceNotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(ExtMoveError::SourceUnreadable {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    if !meta.is_dir() {
        error!("source is not a directory: {}", path.display());
        return Err(ExtMoveError::SourceNotDirectory(path.to_path_buf()));
    }
    fs::read_dir(path).map_err(|source| ExtMoveError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("source readable: {}", path.display());
    Ok(())
}

/// Ensure the destination directory exists, creating parents as needed.
/// In dry-run mode a missing destination is reported but left uncreated.
pub fn prepare_destination(path: &Path, dry_run: bool) -> Result<(), ExtMoveError> {
    if path.exists() {
        if !path.is_dir() {
            error!("destination exists but isn't a directory: {}", path.display());
            return Err(ExtMoveError::DestinationNotDirectory(path.to_path_buf()));
        }
        return Ok(());
    }
    if dry_run {
        info!(action = "mkdir -p", path = %path.display(), "dry-run");
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| ExtMoveError::DestinationCreate {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Created destination directory: {}", path.display());
    Ok(())
}
