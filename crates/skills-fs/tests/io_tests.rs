use skills_fs::{checksum, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("test.txt");

    io::write_atomic(&path, b"hello world").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "hello world");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("test.txt");
    fs::write(&path, "original").unwrap();

    io::write_atomic(&path, b"updated").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
}

#[test]
fn test_write_atomic_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp
        .path()
        .join(".agent-skills")
        .join("project-management-with-beads")
        .join("SKILL.md");

    io::write_atomic(&path, b"# Skill\n").unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"# Skill\n");
}

#[test]
fn test_write_atomic_roundtrip_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("payload.bin");
    let payload: Vec<u8> = (0..=255u8).cycle().take(4096).collect();

    io::write_atomic(&path, &payload).unwrap();

    let read_back = fs::read(&path).unwrap();
    assert_eq!(
        checksum::compute_checksum(&read_back),
        checksum::compute_checksum(&payload)
    );
}

#[test]
fn test_write_atomic_leaves_no_temp_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("target.md");

    io::write_atomic(&path, b"content").unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "found temp files: {:?}", leftovers);
}

#[test]
fn test_read_text_or_empty_missing_file() {
    let temp = TempDir::new().unwrap();
    let content = io::read_text_or_empty(&temp.path().join("AGENTS.md")).unwrap();
    assert_eq!(content, "");
}

#[test]
fn test_read_text_or_empty_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("AGENTS.md");
    fs::write(&path, "# Agents\r\n").unwrap();

    assert_eq!(io::read_text_or_empty(&path).unwrap(), "# Agents\r\n");
}

#[test]
fn test_read_text_nonexistent_file() {
    let temp = TempDir::new().unwrap();
    assert!(io::read_text(&temp.path().join("nope.txt")).is_err());
}

#[test]
fn test_write_text_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("test.txt");

    io::write_text(&path, "hello world").unwrap();

    assert_eq!(io::read_text(&path).unwrap(), "hello world");
}
