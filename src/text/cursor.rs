use crate::error::ParseError;

/// Character cursor over the text being parsed.
///
/// Tracks the current byte offset so errors can point at the failing
/// position.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }

    /// Current byte offset.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns whether all input has been consumed.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Peeks at the current character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    /// Consumes and returns the current character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Skips any whitespace characters.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Consumes the current character if it is `c`.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `expected`, or fails without consuming anything.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedCharacter`] or
    /// [`ParseError::UnexpectedEnd`] if the current character is not `expected`.
    pub fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance();
                Ok(())
            }
            Some(found) => Err(ParseError::UnexpectedCharacter {
                expected,
                found,
                offset: self.offset,
            }),
            None => Err(ParseError::UnexpectedEnd {
                expected,
                offset: self.offset,
            }),
        }
    }

    /// Consumes characters while `pred` holds and returns them as a slice.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let source = self.source;
        let start = self.offset;
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
        &source[start..self.offset]
    }

    /// Fails unless only whitespace remains.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::TrailingCharacters`] if non-whitespace input remains.
    pub fn finish(&mut self) -> Result<(), ParseError> {
        self.skip_whitespace();
        if self.is_eof() {
            Ok(())
        } else {
            Err(ParseError::TrailingCharacters {
                offset: self.offset,
            })
        }
    }
}
