use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{format_hex_sequence, ConfigurationError, SignatureSet};

/// Serializable form of a signature table, as stored in a JSON or YAML file.
///
/// ```yaml
/// signatures:
///   - label: UTF8
///     sequences: ["EF-BB-BF"]
/// ```
///
/// Entries are evaluated in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureTable {
    pub signatures: Vec<SignatureEntry>,
}

/// One labelled row of a [`SignatureTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureEntry {
    pub label: String,
    pub sequences: Vec<String>,
}

impl SignatureTable {
    pub fn from_json(body: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(body).map_err(|e| ConfigurationError::Parse(e.to_string()))
    }

    pub fn from_yaml(body: &str) -> Result<Self, ConfigurationError> {
        serde_yaml::from_str(body).map_err(|e| ConfigurationError::Parse(e.to_string()))
    }

    /// Read a table from disk, choosing the format from the file extension.
    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let ext =
            path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
        if !matches!(ext.as_str(), "json" | "yaml" | "yml") {
            return Err(ConfigurationError::UnsupportedFormat(ext));
        }

        let body = fs::read_to_string(path)
            .map_err(|source| ConfigurationError::Read { path: path.to_path_buf(), source })?;
        if ext == "json" {
            Self::from_json(&body)
        } else {
            Self::from_yaml(&body)
        }
    }

    /// Parse every sequence and build the ordered set.
    pub fn to_signature_set(&self) -> Result<SignatureSet, ConfigurationError> {
        SignatureSet::from_table(
            self.signatures.iter().map(|entry| (entry.label.as_str(), entry.sequences.iter())),
        )
    }
}

impl From<&SignatureSet> for SignatureTable {
    fn from(set: &SignatureSet) -> Self {
        let signatures = set
            .iter()
            .map(|sig| SignatureEntry {
                label: sig.label().to_string(),
                sequences: sig.alternatives().iter().map(|alt| format_hex_sequence(alt)).collect(),
            })
            .collect();
        Self { signatures }
    }
}
