//! User-facing console output.
//! Stdout carries the per-move report lines; notices go to stderr. Colors are
//! enabled only when the target stream is a TTY.

use owo_colors::OwoColorize;
use std::path::Path;

fn stdout_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn stderr_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_info(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "info:".cyan().bold(), msg);
    } else {
        eprintln!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if stdout_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Plain line, no prefix or color. Scripts may parse these.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// `Moved: <from> → <to>`
pub fn moved_line(from: &Path, to: &Path) -> String {
    format!("Moved: {} → {}", from.display(), to.display())
}

/// `Would move: <from> → <to>`
pub fn planned_line(from: &Path, to: &Path) -> String {
    format!("Would move: {} → {}", from.display(), to.display())
}
