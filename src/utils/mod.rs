use anyhow::Result;
use std::path::Path;

use crate::core::config::{self, FileConfig};
use crate::core::engine::RcEngine;

/// Build an engine from the CLI flags and the optional `dotenvrc.toml`.
///
/// The project root comes from the `--root` flag, the `DOTENVRC_ROOT`
/// environment variable, or an ancestor walk, in that order. Paths from the
/// config file are resolved relative to the root.
pub fn build_engine(root: Option<&Path>, config_path: Option<&Path>) -> Result<RcEngine> {
    let root = config::resolve_project_root(root)?;
    let config_path = match config_path {
        Some(path) => path.to_path_buf(),
        None => root.join(config::CONFIG_FILE),
    };
    let file_config = FileConfig::load(&config_path)?;

    let mut engine = RcEngine::new(&root);
    if let Some(envrc) = file_config.envrc {
        engine = engine.with_envrc(root.join(envrc));
    }
    if let Some(env) = file_config.env {
        engine = engine.with_env(root.join(env));
    }
    if let Some(replacements) = file_config.replacements {
        engine = engine.with_replacements(replacements);
    }
    Ok(engine)
}

pub fn convert(engine: &RcEngine) -> Result<()> {
    if engine.convert()? {
        println!("✓ Wrote {}", engine.env_path().display());
    } else {
        println!("✓ {} is already up to date", engine.env_path().display());
    }
    Ok(())
}

pub fn show(engine: &RcEngine) -> Result<()> {
    for variable in engine.resolve_variables()? {
        println!("{variable}");
    }
    Ok(())
}

pub fn check(engine: &RcEngine) -> Result<()> {
    if engine.is_up_to_date()? {
        println!("✓ {} is up to date", engine.env_path().display());
        Ok(())
    } else {
        anyhow::bail!(
            "{} is out of date; run `dotenvrc convert`",
            engine.env_path().display()
        )
    }
}
