use std::io::{BufRead, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use sniff_core::{SignatureSet, SignatureTable};
use tracing::Level;

pub mod commands;

/// Install the stderr log subscriber. `verbosity` is the number of `-v` flags.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}

/// Read newline-delimited paths (e.g. piped from `find`), skipping empty lines.
///
/// Only the line terminator is stripped; surrounding spaces belong to the name.
pub fn read_paths<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read paths from stdin")?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if !line.is_empty() {
            paths.push(line.to_string());
        }
    }
    Ok(paths)
}

/// Build the active signature set: the built-in text table (or a custom table
/// file in its place), optionally followed by the binary block.
pub fn load_signature_set(custom: Option<&Path>, include_binary: bool) -> Result<SignatureSet> {
    let base = match custom {
        Some(path) => SignatureTable::load(path)
            .and_then(|table| table.to_signature_set())
            .with_context(|| format!("Failed to load signature table {}", path.display()))?,
        None => SignatureSet::build_default().context("Built-in signature table is malformed")?,
    };

    if include_binary {
        base.with_binary_extensions().context("Failed to append binary signatures")
    } else {
        Ok(base)
    }
}
