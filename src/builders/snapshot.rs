use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Check whether the existing env file already holds exactly the same set of
/// lines as the freshly computed variable sequence.
///
/// The comparison is unordered, so a reordering alone never forces a
/// rewrite. A missing or unreadable file yields `false`, never an error.
pub fn matches_existing_file(env: &Path, variables: &[String]) -> bool {
    let Ok(content) = fs::read_to_string(env) else {
        return false;
    };

    let existing: HashSet<&str> = content.lines().collect();
    let candidate: HashSet<&str> = variables.iter().map(String::as_str).collect();
    existing == candidate
}
