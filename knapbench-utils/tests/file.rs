use anyhow::anyhow;
use knapbench_utils::*;
use std::{fs, io::Write};
use tempfile::tempdir;

#[test]
fn test_write_atomic_creates_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("out.txt");
    write_atomic(&path, |w| {
        writeln!(w, "hello")?;
        Ok(())
    })
    .unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
}

#[test]
fn test_write_atomic_keeps_old_file_on_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "old").unwrap();

    let result = write_atomic(&path, |w| {
        writeln!(w, "partial")?;
        Err(anyhow!("boom"))
    });
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "old");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_read_inline_or_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"seed": 1}"#).unwrap();

    assert_eq!(
        read_inline_or_file(path.to_str().unwrap(), ".json").unwrap(),
        r#"{"seed": 1}"#
    );
    assert_eq!(read_inline_or_file("{}", ".json").unwrap(), "{}");
    assert!(read_inline_or_file("missing.json", ".json").is_err());
}
