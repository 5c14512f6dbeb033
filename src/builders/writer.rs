use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Persist `lines` to `file`, newline-joined with no trailing newline.
///
/// The file is truncated and rewritten in a single call, so a concurrent
/// reader observes either the previous content or the new content in full.
pub fn write_lines(lines: &[String], file: &Path) -> Result<()> {
    fs::write(file, lines.join("\n"))
        .with_context(|| format!("Failed to write env file: {}", file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::snapshot::matches_existing_file;
    use std::fs;

    #[test]
    fn test_lines_are_newline_joined_without_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(".env");
        let lines = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        write_lines(&lines, &file).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "a\nb\nc");
    }

    #[test]
    fn test_write_fully_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(".env");
        fs::write(&file, "old=1\nstale=2\nmore=3").unwrap();

        write_lines(&["new=1".to_string()], &file).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "new=1");
    }

    #[test]
    fn test_written_file_round_trips_through_snapshot_comparison() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(".env");
        let lines = vec!["hello world".to_string(), "foo bar".to_string()];

        write_lines(&lines, &file).unwrap();
        assert!(matches_existing_file(&file, &lines));
    }
}
