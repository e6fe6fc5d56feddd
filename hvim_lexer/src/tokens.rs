use std::fmt::Display;
use std::ops::Range;

/// A classified span of the source buffer. The text is borrowed, never copied.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Byte offset of the first character of `text` in the buffer.
    pub start: usize,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, start: usize, text: &'src str) -> Self {
        Self { kind, start, text }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Unknown,
    Whitespace,
    PreprocessorDirective,
    CharLiteral,
    StringLiteral,
    Identifier,
    Keyword,
    Number,
    /// Part of the taxonomy for highlighters, the scanner never produces it.
    Comment,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    LeftParen,
    RightParen,
    Asterisk,
    SemiColon,
    Colon,
    Comma,
    LessThan,
    GreaterThan,
    Percent,
    Caret,
    Ampersand,
    Pipe,
    ExclamationMark,
    Minus,
    Plus,
    Equals,
    Dot,
}

impl TokenKind {
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Unknown => "Unknown",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::PreprocessorDirective => "PreprocessorDirective",
            TokenKind::CharLiteral => "CharLiteral",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::Number => "Number",
            TokenKind::Comment => "Comment",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::LeftBracket => "LeftBracket",
            TokenKind::RightBracket => "RightBracket",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::Asterisk => "Asterisk",
            TokenKind::SemiColon => "SemiColon",
            TokenKind::Colon => "Colon",
            TokenKind::Comma => "Comma",
            TokenKind::LessThan => "LessThan",
            TokenKind::GreaterThan => "GreaterThan",
            TokenKind::Percent => "Percent",
            TokenKind::Caret => "Caret",
            TokenKind::Ampersand => "Ampersand",
            TokenKind::Pipe => "Pipe",
            TokenKind::ExclamationMark => "ExclamationMark",
            TokenKind::Minus => "Minus",
            TokenKind::Plus => "Plus",
            TokenKind::Equals => "Equals",
            TokenKind::Dot => "Dot",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
