use std::fs;
use std::io::Cursor;

use file_sniff::{load_signature_set, read_paths};
use tempfile::tempdir;

#[test]
fn read_paths_skips_empty_lines_and_keeps_spaces() {
    let input = Cursor::new("a.txt\n\n  b.bin  \r\nc\n");
    let paths = read_paths(input).expect("read paths");
    assert_eq!(paths, vec!["a.txt", "  b.bin  ", "c"]);
}

#[test]
fn read_paths_handles_empty_input() {
    assert!(read_paths(Cursor::new("")).unwrap().is_empty());
}

#[test]
fn load_signature_set_defaults_to_builtin_tables() {
    let text = load_signature_set(None, false).unwrap();
    assert_eq!(text.len(), 11);
    let extended = load_signature_set(None, true).unwrap();
    assert_eq!(extended.len(), 23);
    assert_eq!(extended.labels().last(), Some(&"ZIP"));
}

#[test]
fn custom_table_replaces_text_block_and_keeps_binary_block() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("sigs.json");
    fs::write(&table, r#"{"signatures":[{"label":"PDF","sequences":["25-50-44-46"]}]}"#).unwrap();

    let set = load_signature_set(Some(table.as_path()), true).unwrap();
    assert_eq!(set.labels()[0], "PDF");
    assert!(set.get("UTF8").is_none());
    assert!(set.get("PNG").is_some());
}

#[test]
fn malformed_custom_table_is_an_error() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("sigs.yaml");
    fs::write(&table, "signatures:\n  - label: BAD\n    sequences: [\"ZZ\"]\n").unwrap();

    let err = load_signature_set(Some(table.as_path()), false).unwrap_err();
    assert!(format!("{err:#}").contains("ZZ"));
}
