//! sniff-core
//!
//! Core library for classifying files by the byte signatures at their start:
//! byte-order marks for text encodings and, optionally, magic numbers for
//! common binary container formats.
//!
//! The pieces, in dependency order:
//! - [`signatures`]: the ordered signature registry and its table formats.
//! - [`detect`]: the pure prefix-matching algorithm.
//! - [`classify`]: reading a file's leading bytes and producing a result record.
//!
//! Frontends (the `file-sniff` CLI) only supply paths and render results.

pub mod classify;
pub mod detect;
pub mod signatures;

pub use classify::{
    ClassificationResult, Classifier, ClassifyError, ClassifyOptions, Outcome, PathError,
};
pub use detect::{detect, detect_match, SignatureMatch};
pub use signatures::{ConfigurationError, Signature, SignatureSet, SignatureTable};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
