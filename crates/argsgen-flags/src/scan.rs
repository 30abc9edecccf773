//! Reading flag lines back out of a generated artifact.

use serde::Serialize;

use crate::{Flag, FlagError};

/// A flag together with the 1-based line it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedFlag {
    pub line: usize,
    #[serde(flatten)]
    pub flag: Flag,
}

/// Parse every flag line of `text`, skipping blank lines and `#` comments.
pub fn scan(text: &str) -> Result<Vec<ScannedFlag>, FlagError> {
    let mut flags = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let line = idx + 1;
        let flag = Flag::parse(trimmed).map_err(|e| e.at_line(line))?;
        flags.push(ScannedFlag { line, flag });
    }

    Ok(flags)
}
