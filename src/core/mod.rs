// This file is the module declaration file for the `core` module.

// `config` module:
// Default file names, project-root resolution (explicit path, then the
// DOTENVRC_ROOT environment variable, then an ancestor walk), the built-in
// replacement mapping, and the optional `dotenvrc.toml` file configuration.
pub mod config;

// `engine` module:
// The rc-resolution engine, the sole orchestrator: it composes the builder
// components into the read -> source -> substitute -> extract -> compare ->
// write -> load pipeline.
pub mod engine;
