//! Reading datasets from text.
//!
//! Values are separated by any mix of whitespace and commas. Blank lines and
//! lines starting with `#` are skipped.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Parse a dataset from text.
pub fn parse_dataset(text: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value: f64 = token
                .parse()
                .with_context(|| format!("line {}: invalid number '{}'", idx + 1, token))?;
            if !value.is_finite() {
                bail!("line {}: non-finite number '{}'", idx + 1, token);
            }
            values.push(value);
        }
    }

    Ok(values)
}

/// Read a dataset from `path`, or from stdin when `path` is `-`.
pub fn read_dataset(path: &Path) -> Result<Vec<f64>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read dataset from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset: {}", path.display()))?
    };

    let values = parse_dataset(&text)
        .with_context(|| format!("failed to parse dataset: {}", path.display()))?;
    if values.is_empty() {
        bail!("dataset {} contains no values", path.display());
    }
    debug!(path = %path.display(), n = values.len(), "Read dataset");
    Ok(values)
}
