//! Path helpers.
//! Lexical absolutization for comparisons and symlink-ancestor detection for
//! log file safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Canonicalize `path` when it exists; otherwise make it absolute lexically.
/// Never fails: the relaxed form falls back to the input unchanged.
pub fn absolute_or_relaxed(path: &Path) -> PathBuf {
    dunce::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
