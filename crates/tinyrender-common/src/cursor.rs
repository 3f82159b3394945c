//! Character cursor over a source string.
//!
//! Both the markup parser and the stylesheet parser are recursive-descent
//! scanners that peek at and consume one character at a time. `Cursor` holds
//! the shared scanning state: the source text and a byte offset into it.

/// A forward-only scanner over a UTF-8 source string.
///
/// The position is always on a `char` boundary.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    input: String,
    pos: usize,
}

impl Cursor {
    /// Create a cursor positioned at the start of `input`.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            pos: 0,
        }
    }

    /// Current byte offset into the source.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Peek at the next character without consuming it.
    ///
    /// Returns `None` at end of input.
    #[must_use]
    pub fn next_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Does the remaining input start with `s`?
    #[must_use]
    pub fn starts_with(&self, s: &str) -> bool {
        self.input[self.pos..].starts_with(s)
    }

    /// Has all input been consumed?
    #[must_use]
    pub const fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Consume and return the next character.
    ///
    /// Returns `None` at end of input, leaving the position unchanged.
    pub fn consume_char(&mut self) -> Option<char> {
        let c = self.next_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume characters while `test` holds and return them.
    pub fn consume_while(&mut self, test: impl Fn(char) -> bool) -> String {
        let mut result = String::new();
        while let Some(c) = self.next_char() {
            if !test(c) {
                break;
            }
            result.push(c);
            self.pos += c.len_utf8();
        }
        result
    }

    /// Consume up to `count` characters and return them.
    ///
    /// Fewer characters are returned if the input ends first.
    pub fn consume_n(&mut self, count: usize) -> String {
        let mut result = String::with_capacity(count);
        for _ in 0..count {
            match self.consume_char() {
                Some(c) => result.push(c),
                None => break,
            }
        }
        result
    }

    /// Skip over any whitespace.
    pub fn consume_whitespace(&mut self) {
        let _ = self.consume_while(char::is_whitespace);
    }
}
