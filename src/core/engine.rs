use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::builders::directives::{parse_export_directive, parse_source_directive};
use crate::builders::loader::{self, OverridePolicy};
use crate::builders::reader::{read_clean_lines, read_clean_lines_optional};
use crate::builders::snapshot::matches_existing_file;
use crate::builders::substitute::Replacements;
use crate::builders::writer::write_lines;
use crate::core::config;

/// The rc-resolution engine.
///
/// Reads the root rc file, pulls in its sourced files one level deep, and
/// materializes the surviving export assignments as a flat `.env`-style
/// file, which can then be loaded into the process environment.
pub struct RcEngine {
    envrc: PathBuf,
    env: PathBuf,
    replacements: Replacements,
}

impl RcEngine {
    /// Engine with the default file names and built-in replacements for the
    /// given project root.
    pub fn new(project_root: &Path) -> Self {
        Self {
            envrc: project_root.join(config::DEFAULT_ENVRC),
            env: project_root.join(config::DEFAULT_ENV),
            replacements: config::default_replacements(project_root),
        }
    }

    pub fn with_envrc(mut self, envrc: PathBuf) -> Self {
        self.envrc = envrc;
        self
    }

    pub fn with_env(mut self, env: PathBuf) -> Self {
        self.env = env;
        self
    }

    pub fn with_replacements(mut self, replacements: Replacements) -> Self {
        self.replacements = replacements;
        self
    }

    pub fn envrc_path(&self) -> &Path {
        &self.envrc
    }

    pub fn env_path(&self) -> &Path {
        &self.env
    }

    /// Compute the ordered variable sequence without touching the env file.
    ///
    /// The replacement mapping is validated before any file is read.
    /// Inclusion directives are recognized on the raw line, before any
    /// replacement, and their paths resolve relative to the root rc file's
    /// directory. Sourced files are read but never scanned for further
    /// inclusion directives; the one-level depth limit is deliberate.
    ///
    /// Duplicate names are kept positionally. Later assignments win only at
    /// load time, so the persisted file retains every line.
    pub fn resolve_variables(&self) -> Result<Vec<String>> {
        self.replacements.validate()?;

        let root_lines = read_clean_lines(&self.envrc)?;
        let parent = self.envrc.parent().unwrap_or_else(|| Path::new("."));

        let mut sourced_lines = Vec::new();
        for line in &root_lines {
            let Some(directive) = parse_source_directive(line)? else {
                continue;
            };
            let path = parent.join(&directive.path);
            let lines = if directive.optional {
                read_clean_lines_optional(&path)?
            } else {
                read_clean_lines(&path)?
            };
            sourced_lines.extend(lines);
        }

        let mut variables = Vec::new();
        for line in root_lines.iter().chain(sourced_lines.iter()) {
            let substituted = self.replacements.apply(line);
            if let Some(pair) = parse_export_directive(&substituted)? {
                variables.push(pair);
            }
        }
        Ok(variables)
    }

    /// Run the pipeline up to the write step.
    ///
    /// Returns true when the env file was (re)written, false when its
    /// existing content already matched the resolved sequence.
    pub fn convert(&self) -> Result<bool> {
        let variables = self.resolve_variables()?;
        if matches_existing_file(&self.env, &variables) {
            return Ok(false);
        }
        write_lines(&variables, &self.env)?;
        Ok(true)
    }

    /// Full pipeline: convert, then load the env file into the process
    /// environment under the given override policy.
    pub fn load(&self, policy: OverridePolicy) -> Result<()> {
        self.convert()?;
        loader::apply_env_file(&self.env, policy)
    }

    /// True when the existing env file already matches the rc content.
    pub fn is_up_to_date(&self) -> Result<bool> {
        let variables = self.resolve_variables()?;
        Ok(matches_existing_file(&self.env, &variables))
    }
}
