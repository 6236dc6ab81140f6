//! Integration tests for 7z format extraction.
//!
//! Archives are built at test time from a scratch directory with the
//! `sevenz-rust2` compressor.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tempfile::TempDir;
use unarc_core::AlwaysOverwrite;
use unarc_core::ExtractionError;
use unarc_core::ExtractionRequest;
use unarc_core::NeverOverwrite;
use unarc_core::extract;
use unarc_core::test_utils::create_test_zip;

/// Builds `<dir>/<name>` from a tree of files.
fn build_7z(dir: &Path, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
    build_7z_with_dirs(dir, name, files, &[])
}

/// Like [`build_7z`], also adding empty directories.
fn build_7z_with_dirs(
    dir: &Path,
    name: &str,
    files: &[(&str, &[u8])],
    empty_dirs: &[&str],
) -> PathBuf {
    let src = dir.join(format!("{name}-src"));
    fs::create_dir_all(&src).unwrap();
    for empty in empty_dirs {
        fs::create_dir_all(src.join(empty)).unwrap();
    }
    for (path, data) in files {
        let full = src.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, data).unwrap();
    }
    let archive = dir.join(name);
    sevenz_rust2::compress_to_path(&src, &archive).expect("7z compression should succeed");
    fs::remove_dir_all(&src).unwrap();
    archive
}

/// Finds a directory named `dir_name` anywhere under `root`.
fn find_dir(root: &Path, dir_name: &str) -> Option<PathBuf> {
    for entry in fs::read_dir(root).ok()? {
        let path = entry.ok()?.path();
        if path.is_dir() {
            if path.file_name().is_some_and(|n| n == dir_name) {
                return Some(path);
            }
            if let Some(found) = find_dir(&path, dir_name) {
                return Some(found);
            }
        }
    }
    None
}

/// Finds `file_name` anywhere under `root`; the compressor decides whether
/// entries carry the source folder name.
fn find_file(root: &Path, file_name: &str) -> Option<PathBuf> {
    for entry in fs::read_dir(root).ok()? {
        let path = entry.ok()?.path();
        if path.is_dir() {
            if let Some(found) = find_file(&path, file_name) {
                return Some(found);
            }
        } else if path.file_name().is_some_and(|n| n == file_name) {
            return Some(path);
        }
    }
    None
}

#[test]
fn test_7z_extraction() {
    let temp = TempDir::new().unwrap();
    let archive = build_7z(
        temp.path(),
        "bundle.7z",
        &[("file1.txt", b"hello world\n"), ("nested/file2.txt", b"second")],
    );

    let request = ExtractionRequest::new(&archive).unwrap();
    let report = extract(&request, &mut NeverOverwrite).unwrap();

    assert_eq!(report.files_extracted, 2);
    let dest = temp.path().join("bundle");
    let file1 = find_file(&dest, "file1.txt").expect("file1.txt extracted");
    let file2 = find_file(&dest, "file2.txt").expect("file2.txt extracted");
    assert_eq!(fs::read(file1).unwrap(), b"hello world\n");
    assert_eq!(fs::read(&file2).unwrap(), b"second");
    assert!(file2.parent().unwrap().ends_with("nested"));
}

#[test]
fn test_7z_directory_entries_become_directories() {
    let temp = TempDir::new().unwrap();
    let archive = build_7z_with_dirs(
        temp.path(),
        "tree.7z",
        &[("docs/readme.txt", b"read me")],
        &["emptydir"],
    );

    let report = extract(&ExtractionRequest::new(&archive).unwrap(), &mut NeverOverwrite).unwrap();

    assert_eq!(report.files_extracted, 1);
    assert!(report.directories_created >= 1);
    let dest = temp.path().join("tree");
    let empty = find_dir(&dest, "emptydir").expect("emptydir extracted");
    assert!(empty.is_dir());
    assert_eq!(fs::read_dir(&empty).unwrap().count(), 0);
    assert!(find_file(&dest, "readme.txt").is_some());
}

#[test]
fn test_7z_overwrite_policy_applies() {
    let temp = TempDir::new().unwrap();
    let archive = build_7z(temp.path(), "pack.7z", &[("only.txt", b"fresh")]);

    let first = extract(&ExtractionRequest::new(&archive).unwrap(), &mut NeverOverwrite).unwrap();
    assert_eq!(first.files_extracted, 1);
    let extracted = find_file(&temp.path().join("pack"), "only.txt").unwrap();
    fs::write(&extracted, b"edited").unwrap();

    let skipped = extract(&ExtractionRequest::new(&archive).unwrap(), &mut NeverOverwrite).unwrap();
    assert_eq!(skipped.files_extracted, 0);
    assert_eq!(skipped.files_skipped, 1);
    assert_eq!(fs::read(&extracted).unwrap(), b"edited");

    let replaced =
        extract(&ExtractionRequest::new(&archive).unwrap(), &mut AlwaysOverwrite).unwrap();
    assert_eq!(replaced.files_extracted, 1);
    assert_eq!(fs::read(&extracted).unwrap(), b"fresh");
}

#[test]
fn test_7z_delete_source() {
    let temp = TempDir::new().unwrap();
    let archive = build_7z(temp.path(), "gone.7z", &[("a.txt", b"a")]);

    let request = ExtractionRequest::new(&archive)
        .unwrap()
        .delete_source(true);
    let report = extract(&request, &mut NeverOverwrite).unwrap();

    assert!(report.source_deleted);
    assert!(!archive.exists());
}

#[test]
fn test_zip_named_7z_is_open_error() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("fake.7z");
    fs::write(&archive, create_test_zip(&[("a.txt", b"a")])).unwrap();

    let request = ExtractionRequest::new(&archive).unwrap();
    let err = extract(&request, &mut NeverOverwrite).unwrap_err();

    assert!(matches!(err, ExtractionError::ArchiveOpen { .. }));
    assert!(temp.path().join("fake").is_dir());
}

#[test]
fn test_7z_quota_exceeded() {
    let temp = TempDir::new().unwrap();
    let archive = build_7z(temp.path(), "big.7z", &[("big.bin", &[7u8; 4096])]);

    let request = ExtractionRequest::new(&archive)
        .unwrap()
        .config(unarc_core::ExtractionConfig {
            max_file_size: 1024,
            ..Default::default()
        });
    let err = extract(&request, &mut NeverOverwrite).unwrap_err();

    assert_eq!(err.error_code(), "QUOTA_EXCEEDED");
    assert_eq!(err.entries_written(), 0);
}
