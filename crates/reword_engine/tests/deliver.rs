use std::fs;

use reword_engine::{ensure_download_dir, ArtifactWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_download_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("downloads");
    assert!(!new_dir.exists());
    ensure_download_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_download() {
    let temp = TempDir::new().unwrap();
    let writer = ArtifactWriter::new(temp.path().to_path_buf());

    let first = writer
        .write("example.com-2024-03-01T12:00:00.000Z.mhtml", b"first")
        .unwrap();
    assert_eq!(fs::read(&first).unwrap(), b"first");

    let second = writer
        .write("example.com-2024-03-01T12:00:00.000Z.mhtml", b"second")
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read(&second).unwrap(), b"second");
}

#[test]
fn handles_binary_payloads() {
    let temp = TempDir::new().unwrap();
    let writer = ArtifactWriter::new(temp.path().to_path_buf());
    let payload: Vec<u8> = (0u8..=255).collect();

    let path = writer.write("blob.mhtml", &payload).unwrap();
    assert_eq!(fs::read(path).unwrap(), payload);
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = ArtifactWriter::new(file_path.clone());
    let result = writer.write("doc.mhtml", b"data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("doc.mhtml").exists());
}
