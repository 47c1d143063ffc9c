//! Writer für LJSON-Snapshots.

use crate::core::LJson;
use anyhow::Result;

/// Schreibt einen Snapshot als eingerücktes LJSON (mit abschließendem Newline).
pub fn write_ljson(ljson: &LJson) -> Result<String> {
    let mut output = serde_json::to_string_pretty(ljson)?;
    output.push('\n');
    Ok(output)
}
