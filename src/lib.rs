//! Convert a direnv-style `.envrc` file into a flat `.env` file and load it
//! into the process environment.
//!
//! The rc file may `source_env` (or `source_env_if_exists`) other rc-format
//! files, one level deep; `export NAME=value` assignments from the root file
//! and every sourced file are collected in order, run through an ordered
//! literal-text replacement pass (for example `$(pwd)` to the project root),
//! and written out as plain `NAME=VALUE` lines. The env file is only
//! rewritten when its content actually changed, and duplicate names are
//! resolved at load time, where later assignments win unless existing
//! environment variables are being preserved.

pub mod builders;
pub mod core;
pub mod utils;


pub use crate::builders::loader::OverridePolicy;
pub use crate::builders::substitute::Replacements;
pub use crate::core::engine::RcEngine;

use anyhow::Result;

/// Convert and load with all defaults.
///
/// The project root is resolved from `DOTENVRC_ROOT` or an ancestor walk,
/// `.envrc` is read, `.env` is (re)generated, and the result is loaded with
/// existing environment variables overwritten.
pub fn load() -> Result<()> {
    let root = core::config::resolve_project_root(None)?;
    RcEngine::new(&root).load(OverridePolicy::OverwriteExisting)
}
