use std::str::Chars;

/// Forward-only read position over a borrowed buffer.
///
/// Every read is bounded by the end of the buffer: past the end `first()` yields [`EOF`]
/// and `bump()` yields `None`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    chars: Chars<'a>,
    token_start: usize,
}

pub const EOF: char = '\0';

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.chars(),
            token_start: 0,
        }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn first(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF)
    }

    pub fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// Byte offset of the next unread character.
    pub fn pos(&self) -> usize {
        self.src.len() - self.chars.as_str().len()
    }

    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Marks the current position as the start of the next token.
    pub fn reset_pos_within_token(&mut self) {
        self.token_start = self.pos();
    }

    /// Rewinds to the start of the buffer.
    pub fn rewind(&mut self) {
        self.chars = self.src.chars();
        self.token_start = 0;
    }

    pub fn bump(&mut self) -> Option<char> {
        self.chars.next()
    }

    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_eof() && predicate(self.first()) {
            self.bump();
        }
    }
}
