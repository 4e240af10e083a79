use std::fs;

use sniff_core::{ConfigurationError, SignatureSet, SignatureTable};
use tempfile::tempdir;

#[test]
fn json_table_preserves_file_order() {
    let body = r#"{
        "signatures": [
            { "label": "WIDE", "sequences": ["FF-FE-00-00"] },
            { "label": "NARROW", "sequences": ["FF FE"] }
        ]
    }"#;
    let set = SignatureTable::from_json(body).unwrap().to_signature_set().unwrap();
    assert_eq!(set.labels(), vec!["WIDE", "NARROW"]);
    assert_eq!(set.max_len(), 4);
}

#[test]
fn yaml_table_loads_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("table.yml");
    fs::write(
        &path,
        concat!(
            "signatures:\n",
            "  - label: PDF\n",
            "    sequences: [\"25-50-44-46\"]\n",
            "  - label: UTF8\n",
            "    sequences: [\"EF BB BF\"]\n",
        ),
    )
    .unwrap();

    let set = SignatureTable::load(&path).unwrap().to_signature_set().unwrap();
    assert_eq!(set.labels(), vec!["PDF", "UTF8"]);
    assert_eq!(set.get("PDF").unwrap().alternatives()[0], b"%PDF".to_vec());
}

#[test]
fn load_rejects_unknown_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("table.toml");
    fs::write(&path, "").unwrap();
    assert!(matches!(SignatureTable::load(&path), Err(ConfigurationError::UnsupportedFormat(_))));
}

#[test]
fn load_reports_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");
    assert!(matches!(SignatureTable::load(&path), Err(ConfigurationError::Read { .. })));
}

#[test]
fn parse_errors_are_configuration_errors() {
    assert!(matches!(SignatureTable::from_json("{"), Err(ConfigurationError::Parse(_))));
    let bad_hex = r#"{ "signatures": [ { "label": "X", "sequences": ["0G"] } ] }"#;
    let table = SignatureTable::from_json(bad_hex).unwrap();
    assert!(matches!(table.to_signature_set(), Err(ConfigurationError::InvalidHex { .. })));
}

#[test]
fn table_from_set_renders_canonical_hex() {
    let set = SignatureSet::build_default().unwrap();
    let table = SignatureTable::from(&set);
    assert_eq!(table.signatures[0].label, "UTF32-LE");
    assert_eq!(table.signatures[0].sequences, vec!["FF-FE-00-00".to_string()]);
    assert_eq!(table.to_signature_set().unwrap(), set);
}
