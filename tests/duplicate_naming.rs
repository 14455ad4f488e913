use std::ffi::OsStr;
use std::fs;
use tempfile::tempdir;

use ext_mover::fs_ops::{resolve_destination, resolve_destination_with};

#[test]
fn no_collision_returns_requested_name() {
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    let dst = resolve_destination(dst_dir, OsStr::new("file.txt")).unwrap();
    assert_eq!(dst, dst_dir.join("file.txt"));
}

#[test]
fn single_collision_gets_timestamp_and_counter_prefix() {
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    fs::write(dst_dir.join("file.txt"), b"x").unwrap();
    let dst = resolve_destination(dst_dir, OsStr::new("file.txt")).unwrap();

    let name = dst.file_name().unwrap().to_str().unwrap().to_string();
    let mut parts = name.splitn(3, '_');
    let nanos = parts.next().unwrap();
    assert!(!nanos.is_empty() && nanos.bytes().all(|b| b.is_ascii_digit()), "name was {name}");
    assert_eq!(parts.next(), Some("1"));
    assert_eq!(parts.next(), Some("file.txt"));
    assert_eq!(dst.parent(), Some(dst_dir));
    assert!(!dst.exists());
}

#[test]
fn repeated_collisions_increment_counter() {
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    fs::write(dst_dir.join("file.txt"), b"1").unwrap();
    fs::write(dst_dir.join("5_1_file.txt"), b"2").unwrap();
    fs::write(dst_dir.join("5_2_file.txt"), b"3").unwrap();
    let dst = resolve_destination_with(dst_dir, OsStr::new("file.txt"), || 5).unwrap();
    assert_eq!(dst, dst_dir.join("5_3_file.txt"));
}

#[test]
fn existing_directory_counts_as_collision() {
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    fs::create_dir(dst_dir.join("notes.txt")).unwrap();
    let dst = resolve_destination_with(dst_dir, OsStr::new("notes.txt"), || 9).unwrap();
    assert_eq!(dst, dst_dir.join("9_1_notes.txt"));
}

#[cfg(unix)]
#[test]
fn dangling_symlink_counts_as_collision() {
    use std::os::unix::fs::symlink;
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    symlink(dst_dir.join("missing-target"), dst_dir.join("a.txt")).unwrap();
    let dst = resolve_destination_with(dst_dir, OsStr::new("a.txt"), || 1).unwrap();
    assert_eq!(dst, dst_dir.join("1_1_a.txt"));
}

#[cfg(unix)]
#[test]
fn non_utf8_name_is_preserved() {
    use std::os::unix::ffi::OsStrExt;
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    let raw = [0xff, 0xfe, b'.', b't', b'x', b't'];
    let name = OsStr::from_bytes(&raw);
    fs::write(dst_dir.join(name), b"x").unwrap();
    let dst = resolve_destination_with(dst_dir, name, || 3).unwrap();
    let mut expected = b"3_1_".to_vec();
    expected.extend_from_slice(&raw);
    assert_eq!(dst.file_name().unwrap().as_bytes(), expected.as_slice());
}
