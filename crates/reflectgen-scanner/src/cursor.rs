//! Character cursor and identifier scanning for header lines.

/// Forward-only position in a line of header text.
///
/// Offsets are byte offsets into the line; multi-byte characters are
/// stepped over as a whole.
pub struct Cursor<'src> {
    line: &'src str,
    rest: &'src str,
    offset: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(line: &'src str) -> Self {
        Self {
            line,
            rest: line,
            offset: 0,
        }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Character under the cursor. ASCII is read straight from the bytes.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        match self.rest.as_bytes().first()? {
            &byte if byte.is_ascii() => Some(byte as char),
            _ => self.rest.chars().next(),
        }
    }

    #[inline]
    pub fn check(&self, pred: impl Fn(char) -> bool) -> bool {
        self.peek().is_some_and(pred)
    }

    #[inline]
    pub fn check_str(&self, text: &str) -> bool {
        self.rest.starts_with(text)
    }

    /// Step over one character and return it.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.skip(ch.len_utf8());
        Some(ch)
    }

    /// Step over `text` if the line continues with it.
    pub fn eat_str(&mut self, text: &str) -> bool {
        let matched = self.check_str(text);
        if matched {
            self.skip(text.len());
        }
        matched
    }

    /// Step over the longest run of characters matching `pred`.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let start = self.offset;
        while self.check(&pred) {
            self.advance();
        }
        self.slice_from(start)
    }

    #[inline]
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.line[start..self.offset]
    }

    fn skip(&mut self, len: usize) {
        self.rest = &self.rest[len..];
        self.offset += len;
    }
}

#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Identifiers of a line in order, each with the byte offset just past it.
///
/// Word tokens that start with a digit (`0x1F`, `2nd`) are numbers and are
/// skipped whole.
pub fn identifiers(line: &str) -> impl Iterator<Item = (&str, usize)> {
    let mut cursor = Cursor::new(line);
    std::iter::from_fn(move || {
        while let Some(ch) = cursor.peek() {
            if is_ident_start(ch) {
                let start = cursor.offset();
                cursor.eat_while(is_ident_continue);
                return Some((cursor.slice_from(start), cursor.offset()));
            }
            if ch.is_ascii_digit() {
                cursor.eat_while(is_ident_continue);
            } else {
                cursor.advance();
            }
        }
        None
    })
}
