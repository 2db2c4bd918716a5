//! Marker invocation matching.
//!
//! A marker invocation is the marker name, optional whitespace, and a
//! parenthesized argument list that must not itself contain `)`.

use std::borrow::Cow;

use regex::Regex;

use reflectgen_core::{MarkerKind, ReflectError, ReflectResult};

/// Compiled matcher for one reflection marker.
#[derive(Debug, Clone)]
pub struct MacroPattern {
    name: String,
    invocation: Regex,
}

impl MacroPattern {
    pub fn new(kind: MarkerKind, name: &str) -> ReflectResult<Self> {
        let pattern = format!(r"{}\s*\(([^)]*)\)", regex::escape(name));
        let invocation = Regex::new(&pattern).map_err(|err| ReflectError::InvalidMarker {
            kind,
            name: format!("{name} ({err})"),
        })?;
        Ok(Self {
            name: name.to_string(),
            invocation,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the marker token appears anywhere on the line.
    pub fn occurs_in(&self, line: &str) -> bool {
        line.contains(&self.name)
    }

    /// Trimmed, non-empty comma-separated arguments of the first invocation.
    pub fn args<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let Some(captures) = self.invocation.captures(line) else {
            return Vec::new();
        };
        captures
            .get(1)
            .map(|raw| {
                raw.as_str()
                    .split(',')
                    .map(str::trim)
                    .filter(|arg| !arg.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The registration-name override given as the first argument, unquoted.
    pub fn explicit_name(&self, line: &str) -> Option<String> {
        self.args(line).first().map(|arg| unquote(arg).to_string())
    }

    /// Remove every invocation of this marker from the line.
    pub fn strip<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.invocation.replace_all(line, "")
    }

    /// Skip invocations of this marker (and the whitespace after them) at the
    /// start of `text`, returning what follows.
    pub fn skip_leading<'a>(&self, text: &'a str) -> &'a str {
        let mut rest = text.trim_start();
        while let Some(found) = self.invocation.find(rest) {
            if found.start() != 0 {
                break;
            }
            rest = rest[found.end()..].trim_start();
        }
        rest
    }
}

/// Strip the surrounding double quotes of a string-literal argument.
/// Anything else is returned verbatim.
pub fn unquote(arg: &str) -> &str {
    if arg.len() >= 2 && arg.starts_with('"') && arg.ends_with('"') {
        &arg[1..arg.len() - 1]
    } else {
        arg
    }
}
