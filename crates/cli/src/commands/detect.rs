use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use sniff_core::{ClassificationResult, Classifier, Outcome};
use tracing::info;

use crate::load_signature_set;

/// Structured error entry emitted alongside successful classifications.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FailureRecord {
    pub path: String,
    pub error: String,
    pub kind: String,
}

/// One line of JSON output: either a classification or a per-file failure.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DetectRecord {
    Classified(ClassificationResult),
    Failed(FailureRecord),
}

impl From<Outcome> for DetectRecord {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Ok(result) => DetectRecord::Classified(result),
            Err(err) => DetectRecord::Failed(FailureRecord {
                path: err.path().display().to_string(),
                error: err.to_string(),
                kind: err.kind().to_string(),
            }),
        }
    }
}

/// Counts reported back to `main` to pick the exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectSummary {
    pub classified: usize,
    pub failed: usize,
}

impl DetectSummary {
    /// True when there was at least one input and none of them could be classified.
    pub fn all_failed(&self) -> bool {
        self.failed > 0 && self.classified == 0
    }
}

/// Classify every path and print one record per input to stdout.
pub fn detect_command(
    paths: &[String],
    include_binary: bool,
    signatures: Option<&Path>,
    json: bool,
) -> Result<DetectSummary> {
    let set = load_signature_set(signatures, include_binary)?;
    let classifier = Classifier::new(set);
    info!(inputs = paths.len(), window = classifier.window(), "classifying files");

    let outcomes = classifier.classify_batch(paths);

    let stdout = io::stdout();
    let stderr = io::stderr();
    render_outcomes(outcomes, json, &mut stdout.lock(), &mut stderr.lock())
}

/// Write outcomes in input order. Text mode sends failures to `err` as
/// `error: <message>`; JSON mode
/// keeps them in the array so consumers see partial success.
pub fn render_outcomes<W: Write, E: Write>(
    outcomes: Vec<Outcome>,
    json: bool,
    out: &mut W,
    err: &mut E,
) -> Result<DetectSummary> {
    let mut summary = DetectSummary::default();
    for outcome in &outcomes {
        match outcome {
            Ok(_) => summary.classified += 1,
            Err(_) => summary.failed += 1,
        }
    }

    if json {
        let records: Vec<DetectRecord> = outcomes.into_iter().map(DetectRecord::from).collect();
        let serialized = serde_json::to_string_pretty(&records)?;
        writeln!(out, "{}", serialized).context("Failed to write output")?;
        return Ok(summary);
    }

    for outcome in outcomes {
        match outcome {
            Ok(result) => {
                let label = result.encoding.as_deref().unwrap_or("(unknown)");
                writeln!(out, "{}: {}", result.path, label).context("Failed to write output")?;
            }
            Err(e) => {
                // The message already names the path.
                writeln!(err, "error: {}", e)
                    .context("Failed to write error output")?;
            }
        }
    }

    Ok(summary)
}
