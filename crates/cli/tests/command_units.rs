use std::fs;

use file_sniff::commands::{render_outcomes, DetectSummary};
use sniff_core::{Classifier, ClassifyOptions};
use tempfile::tempdir;

fn classifier() -> Classifier {
    Classifier::from_options(ClassifyOptions { include_binary: true }).unwrap()
}

#[test]
fn text_output_lists_labels_and_reports_errors_separately() {
    let dir = tempdir().unwrap();
    let bom = dir.path().join("bom.txt");
    let plain = dir.path().join("plain.txt");
    fs::write(&bom, b"\xEF\xBB\xBFx").unwrap();
    fs::write(&plain, b"x").unwrap();
    let missing = dir.path().join("gone.txt");

    let outcomes = classifier().classify_batch(&[&bom, &plain, &missing]);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = render_outcomes(outcomes, false, &mut out, &mut err).unwrap();

    assert_eq!(summary, DetectSummary { classified: 2, failed: 1 });
    assert!(!summary.all_failed());

    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("bom.txt: UTF8"));
    assert!(lines[1].ends_with("plain.txt: (unknown)"));

    let err = String::from_utf8(err).unwrap();
    assert!(err.starts_with("error: Path does not exist: "));
    assert_eq!(err.matches("gone.txt").count(), 1);
}

#[test]
fn json_output_keeps_failures_in_order() {
    let dir = tempdir().unwrap();
    let png = dir.path().join("pic.png");
    fs::write(&png, [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]).unwrap();

    let outcomes = classifier().classify_batch(&[png.clone(), dir.path().to_path_buf()]);
    let mut out = Vec::new();
    let mut err = Vec::new();
    render_outcomes(outcomes, true, &mut out, &mut err).unwrap();
    assert!(err.is_empty());

    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["Encoding"], "PNG");
    assert_eq!(records[0]["Extension"], ".png");
    assert_eq!(records[1]["Kind"], "PathError");
    assert!(records[1]["Error"].as_str().unwrap().contains("not a file"));
}

#[test]
fn summary_all_failed_requires_inputs() {
    assert!(!DetectSummary::default().all_failed());
    assert!(DetectSummary { classified: 0, failed: 3 }.all_failed());
}

#[cfg(unix)]
#[test]
fn json_output_tags_read_failures_as_io_errors() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, b"x").unwrap();
    // Treating a regular file as a directory fails with ENOTDIR, not NotFound.
    let bogus = file.join("child");

    let outcomes = classifier().classify_batch(&[bogus]);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = render_outcomes(outcomes, true, &mut out, &mut err).unwrap();
    assert!(summary.all_failed());

    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed[0]["Kind"], "IOError");
    assert!(parsed[0]["Path"].as_str().unwrap().ends_with("child"));
}
