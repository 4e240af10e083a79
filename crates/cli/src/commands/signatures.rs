use std::path::Path;

use anyhow::Result;
use sniff_core::signatures::format_hex_sequence;
use sniff_core::SignatureTable;

use crate::load_signature_set;

/// List the active signature table in precedence order.
pub fn list_signatures_command(
    include_binary: bool,
    signatures: Option<&Path>,
    json: bool,
) -> Result<()> {
    let set = load_signature_set(signatures, include_binary)?;

    if json {
        let table = SignatureTable::from(&set);
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    if set.is_empty() {
        println!("Signatures: (none)");
        return Ok(());
    }

    println!("Signatures ({}, window {} bytes):", set.len(), set.max_len());
    for sig in &set {
        let sequences: Vec<String> =
            sig.alternatives().iter().map(|alt| format_hex_sequence(alt)).collect();
        println!("- {}: {}", sig.label(), sequences.join(", "));
    }

    Ok(())
}
