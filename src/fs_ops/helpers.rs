//! I/O error descriptions.
//!
//! Turns a raw io::Error into a one-line message naming the operation and the
//! path, followed by a short platform-aware hint when one is known.
//!
//! Usage:
//!   fs::rename(a, b).map_err(|e| describe_io_error("rename", a, &e))

use std::io;
use std::path::Path;

/// Hint text for well-known failures, keyed by raw OS code first.
pub fn hint_for(e: &io::Error) -> Option<&'static str> {
    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            let hint = match code {
                libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
                libc::EXDEV => Some("source and destination are on different filesystems; rename cannot cross them"),
                libc::EBUSY => Some("resource busy; another process is using it"),
                libc::ENOENT => Some("path not found; it may have been removed during the run"),
                libc::ENOSPC => Some("insufficient space on device"),
                libc::EROFS => Some("read-only filesystem"),
                libc::ENAMETOOLONG => Some("file name too long for the destination filesystem"),
                libc::ELOOP => Some("too many levels of symbolic links"),
                _ => None,
            };
            if hint.is_some() {
                return hint;
            }
        }
        #[cfg(windows)]
        {
            let hint = match code {
                5 => Some("access denied; check permissions"),
                17 => Some("not the same device; rename cannot cross volumes"),
                32 => Some("sharing violation; file is in use"),
                2 | 3 => Some("path not found; it may have been removed during the run"),
                206 => Some("file name or path too long"),
                _ => None,
            };
            if hint.is_some() {
                return hint;
            }
        }
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; it may have been removed during the run"),
        io::ErrorKind::AlreadyExists => Some("already exists"),
        _ => None,
    }
}

/// Format `<op> '<path>': <error>[ — <hint>][ [os code: N]]`.
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    if let Some(hint) = hint_for(e) {
        msg.push_str(" — ");
        msg.push_str(hint);
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}
