//! Tests for the FileSystem boundary used by the record store

use std::fs;

use tempfile::TempDir;

use empman::infrastructure::traits::{FileSystem, RealFileSystem};

#[test]
fn given_nested_missing_dirs_when_ensure_parent_then_creates_them() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("a").join("b").join("employees.json");
    let fs = RealFileSystem;

    // Act
    fs.ensure_parent(&file).unwrap();

    // Assert
    assert!(temp.path().join("a").join("b").is_dir());
    assert!(!file.exists());
}

#[test]
fn given_bare_file_name_when_ensure_parent_then_noop() {
    let fs = RealFileSystem;

    fs.ensure_parent(std::path::Path::new("employees.json"))
        .unwrap();
}

#[test]
fn given_existing_file_when_write_then_content_replaced() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("employees.json");
    fs::write(&file, "old content that is longer").unwrap();
    let rfs = RealFileSystem;

    // Act
    rfs.write(&file, "[]").unwrap();

    // Assert
    assert_eq!(rfs.read_to_string(&file).unwrap(), "[]");
}

#[test]
fn given_directory_when_checking_is_file_then_false() {
    let temp = TempDir::new().unwrap();
    let fs = RealFileSystem;

    assert!(fs.exists(temp.path()));
    assert!(!fs.is_file(temp.path()));
}
