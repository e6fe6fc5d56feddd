pub mod cursor;
pub mod keywords;
pub mod punct;
pub mod tokens;

use cursor::Cursor;
use keywords::is_reserved_word;
use log::{debug, trace};
use punct::punctuation_kind;
use tokens::{Token, TokenKind};

pub fn tokenize(input: &str) -> impl Iterator<Item = Token<'_>> + '_ {
    Scanner::new(input)
}

/// Splits a borrowed buffer into tokens, one per call, moving forward only.
///
/// The tokens partition the buffer: their texts, concatenated in order, are the buffer.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    len: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            cursor: Cursor::new(src),
            len: src.len(),
        }
    }

    pub fn src(&self) -> &'src str {
        self.cursor.src()
    }

    /// Byte offset of the next token.
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_more(&self) -> bool {
        self.cursor.pos() < self.len
    }

    /// Rewinds to the start of the same buffer.
    pub fn reset(&mut self) {
        trace!("scanner rewound from byte {}", self.cursor.pos());
        self.cursor.rewind();
    }

    /// Binds the scanner to another buffer, starting from its beginning.
    pub fn reset_to(&mut self, src: &'src str) {
        trace!("scanner rebound to a buffer of {} bytes", src.len());
        self.cursor = Cursor::new(src);
        self.len = src.len();
    }

    /// Returns the token at the cursor, or `None` once the buffer is exhausted.
    ///
    /// At the end of input nothing is consumed, so repeated calls keep returning `None`.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        let first_char = self.cursor.bump()?;

        let token_kind = match first_char {
            '#' => self.preprocessor_directive(),

            c if is_whitespace(c) => self.whitespace(),

            c if is_identifier_start(c) => self.identifier(),

            c if c.is_ascii_digit() => self.number(),

            '\'' => self.char_literal(),

            '"' => self.string_literal(),

            // One symbol tokens, or Unknown
            c => punctuation_kind(c),
        };

        let start = self.cursor.token_start();
        let text = &self.cursor.src()[start..self.cursor.pos()];
        self.cursor.reset_pos_within_token();
        Some(Token::new(token_kind, start, text))
    }

    fn preprocessor_directive(&mut self) -> TokenKind {
        self.cursor.eat_while(|c| c != '\n');
        TokenKind::PreprocessorDirective
    }

    fn whitespace(&mut self) -> TokenKind {
        self.cursor.eat_while(is_whitespace);
        TokenKind::Whitespace
    }

    fn identifier(&mut self) -> TokenKind {
        self.cursor.eat_while(is_identifier_continue);
        let ident = &self.cursor.src()[self.cursor.token_start()..self.cursor.pos()];
        if is_reserved_word(ident) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        }
    }

    fn number(&mut self) -> TokenKind {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        TokenKind::Number
    }

    /// The opening quote is already consumed. An optional backslash is followed by
    /// exactly two characters: the body and the closing quote.
    fn char_literal(&mut self) -> TokenKind {
        if self.cursor.first() == '\\' {
            self.cursor.bump();
        }
        for _ in 0..2 {
            if self.cursor.bump().is_none() {
                debug!(
                    "character literal at byte {} cut off by end of input",
                    self.cursor.token_start()
                );
                break;
            }
        }
        TokenKind::CharLiteral
    }

    fn string_literal(&mut self) -> TokenKind {
        while let Some(c) = self.cursor.bump() {
            match c {
                '"' => return TokenKind::StringLiteral,
                // The escaped character can never close the literal.
                '\\' => {
                    self.cursor.bump();
                }
                _ => {}
            }
        }
        debug!(
            "unterminated string literal at byte {}",
            self.cursor.token_start()
        );
        TokenKind::StringLiteral
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        self.next_token()
    }
}

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t')
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

pub fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}
