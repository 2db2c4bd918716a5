//! Comment stripping and literal blanking.
//!
//! Two independent passes:
//! - [`clean_lines`] removes `//` and `/* */` comments from a whole header and
//!   drops lines left blank. String-literal state and block-comment state
//!   carry across lines.
//! - [`blank_literals`] and [`blank_numbers`] replace literal text on a single
//!   line with spaces before identifiers are collected from it.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::cursor::Cursor;

static NUMBER_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?[fFlLuU]*\b").expect("number literal pattern")
});

/// Comment stripper carrying string and block-comment state between lines.
///
/// A `"` toggles the string state; escaped quotes are not special-cased, so
/// a `\"` inside a literal ends it early. Comment openers inside a string
/// are kept.
#[derive(Debug, Default)]
pub struct CommentStripper {
    in_string: bool,
    in_block_comment: bool,
}

impl CommentStripper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a block comment is still open after the last line.
    pub fn in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    /// Strip comments from one line.
    pub fn strip_line(&mut self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        let mut cursor = Cursor::new(line);

        while let Some(ch) = cursor.peek() {
            if self.in_block_comment {
                if cursor.eat_str("*/") {
                    self.in_block_comment = false;
                } else {
                    cursor.advance();
                }
                continue;
            }

            if ch == '"' {
                self.in_string = !self.in_string;
            } else if !self.in_string {
                if cursor.check_str("//") {
                    break;
                }
                if cursor.eat_str("/*") {
                    self.in_block_comment = true;
                    continue;
                }
            }

            out.push(ch);
            cursor.advance();
        }

        out
    }
}

/// Strip comments from a header and drop lines that end up blank.
///
/// Trailing whitespace is trimmed. Original line numbers are not kept; only
/// the relative order of the remaining lines matters to the scanner.
pub fn clean_lines(source: &str) -> Vec<String> {
    let mut stripper = CommentStripper::new();
    source
        .lines()
        .filter_map(|line| {
            let mut stripped = stripper.strip_line(line);
            let len = stripped.trim_end().len();
            stripped.truncate(len);
            (!stripped.is_empty()).then_some(stripped)
        })
        .collect()
}

/// Replace every character of string and character literals with a space.
///
/// A backslash blanks itself and the character after it, inside or outside a
/// literal. Everything else outside literals is preserved.
pub fn blank_literals(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut quote: Option<char> = None;
    let mut escape = false;

    for ch in line.chars() {
        if escape {
            escape = false;
            out.push(' ');
            continue;
        }
        if ch == '\\' {
            escape = true;
            out.push(' ');
            continue;
        }
        match quote {
            Some(open) => {
                if ch == open {
                    quote = None;
                }
                out.push(' ');
            }
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                out.push(' ');
            }
            None => out.push(ch),
        }
    }

    out
}

/// Replace integer and floating point literals (with optional exponent and
/// type suffixes) with a space.
pub fn blank_numbers(line: &str) -> Cow<'_, str> {
    NUMBER_LITERAL.replace_all(line, " ")
}
