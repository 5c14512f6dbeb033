use anyhow::{Context, Result};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Policy for variables already present in the environment when a generated
/// env file is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverridePolicy {
    /// A loaded `NAME=VALUE` replaces any existing value for `NAME`.
    OverwriteExisting,
    /// Existing values win; the env file only fills in missing names.
    PreserveExisting,
}

/// Parse a `NAME=VALUE`-per-line env file into ordered pairs.
///
/// Blank lines and `#` comments are skipped; lines without an `=` are
/// ignored. File order is preserved so later duplicates of a name can win
/// at merge time.
pub fn parse_env_file(file: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read env file: {}", file.display()))?;

    let mut pairs = Vec::new();
    for line in content.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((name, value)) = line.split_once('=') {
            pairs.push((name.to_string(), value.to_string()));
        }
    }
    Ok(pairs)
}

/// Merge parsed pairs into a snapshot of an environment, without touching
/// process state.
///
/// Pairs are applied in file order, so under
/// [`OverridePolicy::OverwriteExisting`] a later assignment of the same name
/// supersedes an earlier one.
pub fn merged_environment(
    pairs: &[(String, String)],
    existing: &HashMap<String, String>,
    policy: OverridePolicy,
) -> HashMap<String, String> {
    let mut merged = existing.clone();
    for (name, value) in pairs {
        match policy {
            OverridePolicy::OverwriteExisting => {
                merged.insert(name.clone(), value.clone());
            }
            OverridePolicy::PreserveExisting => {
                merged.entry(name.clone()).or_insert_with(|| value.clone());
            }
        }
    }
    merged
}

/// Load an env file into the process environment under the given policy.
pub fn apply_env_file(file: &Path, policy: OverridePolicy) -> Result<()> {
    for (name, value) in parse_env_file(file)? {
        if policy == OverridePolicy::PreserveExisting && env::var_os(&name).is_some() {
            continue;
        }
        // SAFETY: the pipeline runs single-threaded at process startup; no
        // other thread reads or writes the environment concurrently.
        unsafe { env::set_var(&name, &value) };
    }
    Ok(())
}
