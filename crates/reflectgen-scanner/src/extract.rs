//! Declaration identifier heuristics.
//!
//! Both extractors look at one line in isolation and return `None` when the
//! line does not look like the declaration they expect.

use crate::cursor::identifiers;
use crate::normalize::{blank_literals, blank_numbers};

/// Keywords that look like calls but never name a declaration.
const CONTROL_KEYWORDS: &[&str] = &["if", "for", "while", "switch", "return"];

/// Access specifiers that may sit between a marker and its declaration.
const ACCESS_SPECIFIERS: &[&str] = &["public", "private", "protected"];

/// Name of the data member declared on `line`.
///
/// Lines containing `(` are treated as functions and rejected. Literal and
/// numeric text is blanked, then the last identifier wins, so type names and
/// qualifiers in front of the variable are passed over.
pub fn member_identifier(line: &str) -> Option<String> {
    if line.contains('(') {
        return None;
    }
    let literals_blanked = blank_literals(line);
    let sanitized = blank_numbers(&literals_blanked);
    identifiers(&sanitized)
        .last()
        .map(|(ident, _)| ident.to_string())
}

/// Name of the function declared on `line`: the first identifier directly
/// followed by `(`, unless it is a control-flow keyword.
pub fn function_identifier(line: &str) -> Option<String> {
    let (name, _) = identifiers(line)
        .find(|&(_, end)| line[end..].trim_start().starts_with('('))?;
    if CONTROL_KEYWORDS.contains(&name) {
        return None;
    }
    Some(name.to_string())
}

/// Lines a pending marker waits past without trying to resolve: blank
/// lines, preprocessor directives and access specifiers.
pub fn is_transparent_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#') || starts_with_access_specifier(trimmed)
}

fn starts_with_access_specifier(trimmed: &str) -> bool {
    ACCESS_SPECIFIERS.iter().any(|keyword| {
        trimmed.strip_prefix(*keyword).is_some_and(|rest| {
            !rest
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        })
    })
}
