use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use file_sniff::commands::{detect_command, list_signatures_command};
use file_sniff::{init_logging, read_paths};

/// Byte-signature file classifier.
///
/// This CLI is a thin wrapper around `sniff-core` (exposed in code as `sniff_core`).
/// It only gathers paths and prints results; matching lives in the library.
#[derive(Parser, Debug)]
#[command(
    name = "file-sniff",
    version,
    about = "Classify files by their leading byte-order marks and magic numbers",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Detect the encoding or format of one or more files.
    ///
    /// Paths come from the arguments, or from stdin (one per line) when none
    /// are given or the only argument is `-`. A file that cannot be read is
    /// reported and the run continues.
    Detect {
        /// Files to classify.
        paths: Vec<String>,

        /// Also match binary container signatures (PNG, ZIP, MSEXE, ...).
        #[arg(long, default_value_t = false)]
        binary: bool,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// JSON or YAML signature table used instead of the built-in text encodings.
        #[arg(long)]
        signatures: Option<PathBuf>,
    },

    /// List the active signatures in precedence order.
    Signatures {
        /// Include the binary container signatures.
        #[arg(long, default_value_t = false)]
        binary: bool,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// JSON or YAML signature table used instead of the built-in text encodings.
        #[arg(long)]
        signatures: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Detect { paths, binary, json, signatures } => {
            let paths = if paths.is_empty() || paths == ["-"] {
                read_paths(io::stdin().lock())?
            } else {
                paths
            };
            let summary = detect_command(&paths, binary, signatures.as_deref(), json)?;
            if summary.all_failed() {
                std::process::exit(1);
            }
        }
        Command::Signatures { binary, json, signatures } => {
            list_signatures_command(binary, signatures.as_deref(), json)?
        }
    }

    Ok(())
}
