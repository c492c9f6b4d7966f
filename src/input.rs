use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Source name that selects standard input.
pub const STDIN_SOURCE: &str = "-";

/// Read a whole input source into memory. Surrounding whitespace is dropped so
/// a trailing newline does not count as an extra, empty record.
pub fn read_input(source: &str) -> Result<String> {
    let raw = if source == STDIN_SOURCE {
        let mut buf = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        let path = Path::new(source);
        fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))?
    };
    Ok(raw.trim().to_string())
}
