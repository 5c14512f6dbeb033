use anyhow::Result;
use regex::Regex;

/// A parsed `source_env` / `source_env_if_exists` inclusion directive.
///
/// Carries only the unquoted path argument and whether the directive
/// tolerates a missing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDirective {
    /// The path argument with its surrounding quote pair removed. Resolved
    /// relative to the root rc file's directory by the engine.
    pub path: String,
    /// True for `source_env_if_exists`; a missing file then contributes
    /// zero lines instead of failing the run.
    pub optional: bool,
}

/// Recognize an inclusion directive on a whole line.
///
/// The grammar is strict: the keyword, exactly one space, then the path
/// wrapped in a single matching pair of `'` or `"` quotes, consuming the
/// entire line. Anything else, including an unquoted path or trailing text,
/// is not a directive and yields `None`.
pub fn parse_source_directive(line: &str) -> Result<Option<SourceDirective>> {
    let pattern = Regex::new(
        r#"^source_env(?P<opt>_if_exists)? (?:'(?P<single>.+)'|"(?P<double>.+)")$"#,
    )?;
    let Some(captures) = pattern.captures(line) else {
        return Ok(None);
    };

    let path = captures
        .name("single")
        .or_else(|| captures.name("double"))
        .map(|m| m.as_str().to_string());

    Ok(path.map(|path| SourceDirective {
        path,
        optional: captures.name("opt").is_some(),
    }))
}

/// Extract a `NAME=VALUE` pair from an `export` assignment on a whole line.
///
/// Two value forms are accepted: a value wrapped in a matching pair of `'`
/// or `"` quotes that runs to end of line (the quotes are stripped, inner
/// quotes of the other style are kept), or an unquoted value taken verbatim
/// to end of line. The value capture is greedy, so embedded `=` characters
/// stay in the value. Returns the joined `name=value` string, or `None`
/// when neither form matches the full line.
pub fn parse_export_directive(line: &str) -> Result<Option<String>> {
    let quoted = Regex::new(
        r#"^export (?P<name>\w+)=(?:'(?P<single>.+)'|"(?P<double>.+)")$"#,
    )?;
    if let Some(captures) = quoted.captures(line) {
        let value = captures.name("single").or_else(|| captures.name("double"));
        if let Some(value) = value {
            return Ok(Some(format!("{}={}", &captures["name"], value.as_str())));
        }
    }

    let unquoted = Regex::new(r"^export (?P<name>\w+)=(?P<value>.+)$")?;
    Ok(unquoted
        .captures(line)
        .map(|captures| format!("{}={}", &captures["name"], &captures["value"])))
}
