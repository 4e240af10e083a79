//! File classification: read the leading bytes of a file and run the detector.
//!
//! This is the boundary between the filesystem and the pure [`crate::detect`]
//! logic. Per-file failures are returned as values so a batch keeps going.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::detect::detect;
use crate::signatures::{ConfigurationError, SignatureSet};

/// Outcome of classifying one file.
///
/// Serialized with PascalCase keys: `{ "Name", "Extension", "Encoding", "Path" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassificationResult {
    /// File name including extension, as given (not the symlink target).
    pub name: String,
    /// Extension with its leading dot (`.txt`), or empty when there is none.
    pub extension: String,
    /// Matched signature label; `None` when no signature matched.
    pub encoding: Option<String>,
    /// Fully resolved path.
    pub path: String,
}

/// The supplied path is not something we can classify.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("Path does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Path is not a file: {}", path.display())]
    NotAFile { path: PathBuf },
}

/// Per-file classification failure.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ClassifyError {
    /// Path of the input that failed.
    pub fn path(&self) -> &Path {
        match self {
            ClassifyError::Path(PathError::NotFound { path })
            | ClassifyError::Path(PathError::NotAFile { path })
            | ClassifyError::Io { path, .. } => path.as_path(),
        }
    }

    /// Stable name of the error kind, used in structured output.
    pub fn kind(&self) -> &'static str {
        match self {
            ClassifyError::Path(_) => "PathError",
            ClassifyError::Io { .. } => "IOError",
        }
    }
}

/// Result for one input of a batch.
pub type Outcome = Result<ClassificationResult, ClassifyError>;

/// Options selecting the active built-in signature set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyOptions {
    /// Append the binary container signatures after the text encodings.
    pub include_binary: bool,
}

/// Classifies files against a fixed [`SignatureSet`].
///
/// The set is read-only, so one classifier can be shared across threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    signatures: SignatureSet,
}

impl Classifier {
    pub fn new(signatures: SignatureSet) -> Self {
        Self { signatures }
    }

    /// Build a classifier over the built-in tables.
    pub fn from_options(options: ClassifyOptions) -> Result<Self, ConfigurationError> {
        let base = SignatureSet::build_default()?;
        let signatures = if options.include_binary { base.with_binary_extensions()? } else { base };
        Ok(Self::new(signatures))
    }

    pub fn signatures(&self) -> &SignatureSet {
        &self.signatures
    }

    /// Number of leading bytes read per file.
    pub fn window(&self) -> usize {
        self.signatures.max_len()
    }

    /// Read up to [`Self::window`] bytes. The returned buffer is exactly as long
    /// as what was read; short files give short buffers.
    pub fn read_window<R: Read>(&self, reader: R) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.window());
        reader.take(self.window() as u64).read_to_end(&mut buffer)?;
        Ok(buffer)
    }

    /// Classify the leading bytes of any reader.
    pub fn classify_reader<R: Read>(&self, reader: R) -> io::Result<Option<&str>> {
        let buffer = self.read_window(reader)?;
        Ok(detect(&buffer, &self.signatures))
    }

    /// Validate, resolve, read and classify a single path.
    pub fn classify_path(&self, path: &Path) -> Outcome {
        let io_err = |source: io::Error| ClassifyError::Io { path: path.to_path_buf(), source };

        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PathError::NotFound { path: path.to_path_buf() }.into());
            }
            Err(e) => return Err(io_err(e)),
        };
        if !metadata.is_file() {
            return Err(PathError::NotAFile { path: path.to_path_buf() }.into());
        }

        let resolved = fs::canonicalize(path).map_err(io_err)?;
        let file = File::open(&resolved).map_err(io_err)?;
        let buffer = self.read_window(file).map_err(io_err)?;
        let encoding = detect(&buffer, &self.signatures).map(str::to_string);

        debug!(
            path = %resolved.display(),
            bytes_read = buffer.len(),
            encoding = encoding.as_deref().unwrap_or("-"),
            "classified file"
        );

        Ok(ClassificationResult {
            name: path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default(),
            extension: path
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_default(),
            encoding,
            path: resolved.to_string_lossy().to_string(),
        })
    }

    /// Classify many paths in parallel. Results come back in input order.
    pub fn classify_batch<P>(&self, paths: &[P]) -> Vec<Outcome>
    where
        P: AsRef<Path> + Sync,
    {
        paths
            .par_iter()
            .map(|path| {
                let outcome = self.classify_path(path.as_ref());
                if let Err(err) = &outcome {
                    debug!(kind = err.kind(), "{err}");
                }
                outcome
            })
            .collect()
    }
}
