use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Read a file and drop blank lines and `#`-prefixed comment lines.
///
/// Returns the surviving lines in file order. A missing file is an error;
/// use [`read_clean_lines_optional`] for sourced files that are allowed to
/// be absent.
pub fn read_clean_lines(file: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read rc file: {}", file.display()))?;
    Ok(clean_lines(&content))
}

/// Like [`read_clean_lines`], but a missing file contributes zero lines.
/// Any other read failure still propagates.
pub fn read_clean_lines_optional(file: &Path) -> Result<Vec<String>> {
    match fs::read_to_string(file) {
        Ok(content) => Ok(clean_lines(&content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to read rc file: {}", file.display()))
        }
    }
}

fn clean_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
