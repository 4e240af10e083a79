//! Signature registry: the ordered table of named byte signatures.
//!
//! A [`SignatureSet`] is an ordered list of [`Signature`] entries. Order is the
//! disambiguation policy: when two entries could match the same prefix, the one
//! appearing earlier wins. Longer, more specific sequences (e.g. the UTF-32LE
//! BOM `FF FE 00 00`) must therefore be placed before shorter, more general ones
//! that they extend (the UTF-16LE BOM `FF FE`).
//!
//! Sequences are written as hyphen- or space-delimited hex octets and parsed once
//! when the set is built. Sets are immutable afterwards.

mod builtin;
mod table;

use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;

pub use builtin::{BINARY_SIGNATURES, TEXT_SIGNATURES};
pub use table::{SignatureEntry, SignatureTable};

/// Error raised while building a signature table.
///
/// These are fatal: detection cannot proceed with a broken table.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// An octet was not exactly two hex digits.
    #[error("Invalid hex octet '{octet}' in signature sequence '{sequence}'")]
    InvalidHex { sequence: String, octet: String },

    /// A sequence contained no octets at all.
    #[error("Signature sequence '{sequence}' contains no octets")]
    EmptySequence { sequence: String },

    /// A decoded alternative for a label was empty.
    #[error("Signature '{label}' has an empty alternative sequence")]
    EmptyAlternative { label: String },

    /// A label was declared without any alternative sequences.
    #[error("Signature '{label}' has no alternative sequences")]
    NoAlternatives { label: String },

    /// Labels must be unique within a set.
    #[error("Duplicate signature label '{label}'")]
    DuplicateLabel { label: String },

    /// The signature table file could not be read.
    #[error("Failed to read signature table {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The signature table document could not be deserialized.
    #[error("Failed to parse signature table: {0}")]
    Parse(String),

    /// The signature table file extension is not one we know how to read.
    #[error("Unsupported signature table format '{0}' (expected json, yaml or yml)")]
    UnsupportedFormat(String),
}

/// Parse a human-readable hex sequence such as `"FF-FE-00-00"` or `"EF BB BF"`.
///
/// Octets are separated by hyphens and/or whitespace and must be exactly two hex
/// digits each. Lowercase digits are accepted.
pub fn parse_hex_sequence(text: &str) -> Result<Vec<u8>, ConfigurationError> {
    let mut bytes = Vec::new();
    for octet in text.split(|c: char| c == '-' || c.is_whitespace()).filter(|s| !s.is_empty()) {
        let invalid = || ConfigurationError::InvalidHex {
            sequence: text.to_string(),
            octet: octet.to_string(),
        };
        if octet.len() != 2 {
            return Err(invalid());
        }
        let mut out = [0u8; 1];
        hex::decode_to_slice(octet, &mut out).map_err(|_| invalid())?;
        bytes.push(out[0]);
    }

    if bytes.is_empty() {
        return Err(ConfigurationError::EmptySequence { sequence: text.to_string() });
    }
    Ok(bytes)
}

/// Render bytes in the canonical table form: uppercase octets joined by hyphens.
pub fn format_hex_sequence(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect::<Vec<_>>().join("-")
}

/// A named signature with one or more alternative byte sequences.
///
/// Any alternative matching is sufficient; order among alternatives carries no
/// precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    label: String,
    alternatives: Vec<Vec<u8>>,
}

impl Signature {
    /// Create a signature from already-decoded alternatives.
    pub fn new(
        label: impl Into<String>,
        alternatives: Vec<Vec<u8>>,
    ) -> Result<Self, ConfigurationError> {
        let label = label.into();
        if alternatives.is_empty() {
            return Err(ConfigurationError::NoAlternatives { label });
        }
        if alternatives.iter().any(Vec::is_empty) {
            return Err(ConfigurationError::EmptyAlternative { label });
        }
        Ok(Self { label, alternatives })
    }

    /// Create a signature from hex-encoded alternatives.
    pub fn from_hex<I, S>(
        label: impl Into<String>,
        sequences: I,
    ) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives = sequences
            .into_iter()
            .map(|s| parse_hex_sequence(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(label, alternatives)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn alternatives(&self) -> &[Vec<u8>] {
        &self.alternatives
    }

    /// Length of the longest alternative.
    pub fn max_len(&self) -> usize {
        self.alternatives.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Ordered, immutable collection of signatures.
///
/// Stored as a `Vec` rather than a map: iteration order is the tie-break rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureSet {
    entries: Vec<Signature>,
}

impl SignatureSet {
    /// Build a set from signatures in precedence order, rejecting duplicate labels.
    pub fn new(entries: Vec<Signature>) -> Result<Self, ConfigurationError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.label()) {
                return Err(ConfigurationError::DuplicateLabel { label: entry.label().to_string() });
            }
        }
        Ok(Self { entries })
    }

    /// Build a set from `(label, [hex, ...])` pairs in the order given.
    pub fn from_table<I, L, A, S>(table: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (L, A)>,
        L: Into<String>,
        A: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = table
            .into_iter()
            .map(|(label, sequences)| Signature::from_hex(label, sequences))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// The base text-encoding (BOM) signatures.
    pub fn build_default() -> Result<Self, ConfigurationError> {
        Self::from_table(TEXT_SIGNATURES.iter().map(|(label, seqs)| (*label, seqs.iter())))
    }

    /// The binary container signatures on their own, in precedence order.
    pub fn build_binary() -> Result<Self, ConfigurationError> {
        Self::from_table(BINARY_SIGNATURES.iter().map(|(label, seqs)| (*label, seqs.iter())))
    }

    /// A new set equal to `self` with the binary-format block appended after it.
    pub fn with_binary_extensions(&self) -> Result<Self, ConfigurationError> {
        self.extend(&Self::build_binary()?)
    }

    /// A new set with `other`'s entries appended after this set's entries.
    pub fn extend(&self, other: &SignatureSet) -> Result<Self, ConfigurationError> {
        let mut entries = self.entries.clone();
        entries.extend(other.entries.iter().cloned());
        Self::new(entries)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Signature> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in precedence order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(Signature::label).collect()
    }

    pub fn get(&self, label: &str) -> Option<&Signature> {
        self.entries.iter().find(|entry| entry.label() == label)
    }

    /// Longest alternative across the whole set; the number of leading bytes worth reading.
    pub fn max_len(&self) -> usize {
        self.entries.iter().map(Signature::max_len).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a SignatureSet {
    type Item = &'a Signature;
    type IntoIter = std::slice::Iter<'a, Signature>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
