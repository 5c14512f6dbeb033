// This file is the module declaration file for the `builders` module.
// It declares the leaf components the rc-resolution engine composes; each is
// a small, independently testable unit with no knowledge of the others.

// `reader` module:
// Reads an rc-format file and strips blank lines and `#` comment lines,
// returning the remaining lines in file order. Also provides the variant
// that tolerates a missing file, used for `source_env_if_exists` targets.
pub mod reader;

// `directives` module:
// Whole-line grammar matching for the two directive shapes an rc file can
// contain: file inclusion (`source_env` / `source_env_if_exists`) and
// variable assignment (`export NAME=value`). Non-matching lines yield
// `None` rather than an error.
pub mod directives;

// `substitute` module:
// The ordered literal-text replacement mapping applied to every candidate
// line before export extraction, plus its validation rule (no replacement
// value may also be a key).
pub mod substitute;

// `snapshot` module:
// Unordered comparison of a freshly computed variable sequence against the
// content of the previously generated env file, used to skip redundant
// writes.
pub mod snapshot;

// `writer` module:
// Persists the variable sequence as a newline-joined file with no trailing
// newline, fully overwriting any previous content.
pub mod writer;

// `loader` module:
// Parses a generated `NAME=VALUE` env file and merges it into the process
// environment under an explicit override policy. The merge itself is a pure
// function; a thin adapter applies it to real process state.
pub mod loader;
