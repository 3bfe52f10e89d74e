use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads the raw sales export into memory.
///
/// Legacy exports are not always UTF-8, so invalid byte sequences fall back
/// to a Latin-1 interpretation instead of failing the run. Only an actual
/// I/O failure surfaces as an error, and the caller treats that as "source
/// unavailable" rather than fatal.
pub fn load_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("cannot read sales export at {}", path.display()))?;

    Ok(decode(bytes))
}

pub(super) fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        // Latin-1 maps each byte directly to the same Unicode code point
        Err(error) => error.into_bytes().iter().map(|&byte| byte as char).collect(),
    }
}
