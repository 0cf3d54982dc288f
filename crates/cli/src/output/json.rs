//! JSON output

use anyhow::Result;
use serde::Serialize;

/// Pretty-print any serializable value on stdout.
pub fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
