//! Duplicate-name resolution.
//!
//! Policy: keep the original base name when the destination slot is free;
//! otherwise prefix it with `<epoch-nanos>_<attempt>_` and retry with a fresh
//! timestamp and the next attempt number until a free slot is found.
//!
//! Notes:
//! - "Occupied" means any directory entry, including a dangling symlink.
//! - The check and the later rename are separate syscalls; another process can
//!   still claim the name in between. Single-instance use is assumed.
//! - The retry loop is unbounded. The attempt counter changes every round, so
//!   each round tests a different name.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::trace;

use crate::errors::ExtMoveError;

/// Pick a destination path inside `dst_dir` for `name` that does not collide
/// with any existing entry, using the system clock for disambiguation.
///
/// A failed existence check is reported against the exact candidate that was
/// being probed, which may be a generated name rather than `name` itself.
pub fn resolve_destination(dst_dir: &Path, name: &OsStr) -> Result<PathBuf, ExtMoveError> {
    resolve_destination_with(dst_dir, name, epoch_nanos)
}

/// Same as [`resolve_destination`] with an injectable clock returning
/// nanoseconds since the Unix epoch.
pub fn resolve_destination_with<F>(
    dst_dir: &Path,
    name: &OsStr,
    mut now: F,
) -> Result<PathBuf, ExtMoveError>
where
    F: FnMut() -> u128,
{
    let mut candidate = dst_dir.join(name);
    let mut attempt: u64 = 1;
    while is_occupied(&candidate).map_err(|source| ExtMoveError::DestinationProbe {
        path: candidate.clone(),
        source,
    })? {
        candidate = dst_dir.join(disambiguated_name(now(), attempt, name));
        if attempt == 3 {
            trace!(name = ?name, dir = %dst_dir.display(), "duplicate: multiple collisions, still searching");
        }
        attempt += 1;
    }
    Ok(candidate)
}

/// `<nanos>_<attempt>_<name>`, preserving non-UTF-8 names.
pub fn disambiguated_name(nanos: u128, attempt: u64, name: &OsStr) -> OsString {
    let mut out = OsString::from(format!("{nanos}_{attempt}_"));
    out.push(name);
    out
}

fn is_occupied(path: &Path) -> io::Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

fn epoch_nanos() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn free_slot_keeps_name() {
        let td = tempdir().unwrap();
        let dst = resolve_destination_with(td.path(), OsStr::new("a.txt"), || 7).unwrap();
        assert_eq!(dst, td.path().join("a.txt"));
    }

    #[test]
    fn frozen_clock_still_advances_attempt() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("a.txt"), b"0").unwrap();
        fs::write(td.path().join("42_1_a.txt"), b"1").unwrap();
        fs::write(td.path().join("42_2_a.txt"), b"2").unwrap();
        let dst = resolve_destination_with(td.path(), OsStr::new("a.txt"), || 42).unwrap();
        assert_eq!(dst, td.path().join("42_3_a.txt"));
    }

    #[test]
    fn clock_is_read_on_every_retry() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("a.txt"), b"0").unwrap();
        fs::write(td.path().join("100_1_a.txt"), b"1").unwrap();
        let mut tick = 99u128;
        let dst = resolve_destination_with(td.path(), OsStr::new("a.txt"), || {
            tick += 1;
            tick
        })
        .unwrap();
        assert_eq!(dst, td.path().join("101_2_a.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn failed_existence_check_names_the_generated_candidate() {
        let td = tempdir().unwrap();
        // Fits NAME_MAX on its own; the `<nanos>_1_` prefix pushes it over.
        let name = format!("{}.txt", "n".repeat(246));
        fs::write(td.path().join(&name), b"old").unwrap();
        let nanos = 1_700_000_000_000_000_000u128;

        let err = resolve_destination_with(td.path(), OsStr::new(&name), || nanos).unwrap_err();
        match err {
            ExtMoveError::DestinationProbe { path, .. } => {
                assert_eq!(path, td.path().join(disambiguated_name(nanos, 1, OsStr::new(&name))));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn name_layout() {
        assert_eq!(
            disambiguated_name(1_700_000_000_123_456_789, 1, OsStr::new("x.md")),
            OsString::from("1700000000123456789_1_x.md")
        );
    }
}
