use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::builders::substitute::Replacements;

/// Default rc-file name at the project root.
pub const DEFAULT_ENVRC: &str = ".envrc";
/// Default generated env-file name at the project root.
pub const DEFAULT_ENV: &str = ".env";
/// Optional project configuration file read by the CLI.
pub const CONFIG_FILE: &str = "dotenvrc.toml";
/// Environment variable naming the project root explicitly.
pub const ROOT_ENV_VAR: &str = "DOTENVRC_ROOT";

/// Optional on-disk configuration, `dotenvrc.toml` at the project root.
///
/// Every field falls back to the built-in default when absent, so an empty
/// or missing file is equivalent to no configuration at all.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Path to the rc file, relative to the project root.
    pub envrc: Option<PathBuf>,
    /// Path to the generated env file, relative to the project root.
    pub env: Option<PathBuf>,
    /// Literal-text replacements, applied in document order.
    pub replacements: Option<Replacements>,
}

impl FileConfig {
    /// Load the config file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Resolve the project root: an explicit path wins, then the
/// `DOTENVRC_ROOT` environment variable, then an ancestor walk from the
/// current directory looking for a directory that contains the rc file.
pub fn resolve_project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }
    if let Some(root) = env::var_os(ROOT_ENV_VAR) {
        return Ok(PathBuf::from(root));
    }
    find_project_root()
}

fn find_project_root() -> Result<PathBuf> {
    let current_dir = env::current_dir()?;
    let mut dir = current_dir.as_path();

    loop {
        if dir.join(DEFAULT_ENVRC).exists() {
            return Ok(dir.to_path_buf());
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => anyhow::bail!(
                "No {DEFAULT_ENVRC} found in the current directory or any ancestor"
            ),
        }
    }
}

/// The built-in replacement mapping.
///
/// `$(pwd)` resolves to the project root's absolute path. `$PYTHONPATH:`
/// resolves to `"<existing>:"` (`";"` on Windows) when `PYTHONPATH` is set
/// and non-empty, else to the empty string so the placeholder disappears
/// and the exported value starts fresh.
pub fn default_replacements(project_root: &Path) -> Replacements {
    let separator = if cfg!(windows) { ';' } else { ':' };
    let pythonpath = match env::var("PYTHONPATH") {
        Ok(existing) if !existing.is_empty() => format!("{existing}{separator}"),
        _ => String::new(),
    };

    Replacements::new(vec![
        ("$(pwd)".to_string(), project_root.display().to_string()),
        ("$PYTHONPATH:".to_string(), pythonpath),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_root_wins() {
        let dir = tempfile::tempdir().unwrap();
        let root = resolve_project_root(Some(dir.path())).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_missing_config_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert!(config.envrc.is_none());
        assert!(config.env.is_none());
        assert!(config.replacements.is_none());
    }

    #[test]
    fn test_config_file_parses_paths_and_replacements() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "envrc = \"env/.envrc\"\nenv = \"env/.env\"\n\n[replacements]\n\"$(abc)\" = \"5\"\n",
        )
        .unwrap();

        let config = FileConfig::load(&path).unwrap();
        assert_eq!(config.envrc, Some(PathBuf::from("env/.envrc")));
        assert_eq!(config.env, Some(PathBuf::from("env/.env")));
        assert_eq!(
            config.replacements,
            Some(Replacements::new(vec![("$(abc)".to_string(), "5".to_string())]))
        );
    }

    #[test]
    fn test_config_file_rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "unknown = true\n").unwrap();
        assert!(FileConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_replacements_resolve_pwd_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let replacements = default_replacements(dir.path());
        let line = replacements.apply("export DIR_DATA=$(pwd)/data");
        assert_eq!(
            line,
            format!("export DIR_DATA={}/data", dir.path().display())
        );
    }
}
