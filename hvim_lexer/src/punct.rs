use phf::phf_map;

use crate::tokens::TokenKind;

/// Single-character tokens. Anything not listed scans as [`TokenKind::Unknown`].
pub static PUNCTUATION: phf::Map<char, TokenKind> = phf_map! {
    '{' => TokenKind::LeftBrace,
    '}' => TokenKind::RightBrace,
    '[' => TokenKind::LeftBracket,
    ']' => TokenKind::RightBracket,
    '(' => TokenKind::LeftParen,
    ')' => TokenKind::RightParen,
    '*' => TokenKind::Asterisk,
    ';' => TokenKind::SemiColon,
    ':' => TokenKind::Colon,
    ',' => TokenKind::Comma,
    '<' => TokenKind::LessThan,
    '>' => TokenKind::GreaterThan,
    '%' => TokenKind::Percent,
    '^' => TokenKind::Caret,
    '&' => TokenKind::Ampersand,
    '|' => TokenKind::Pipe,
    '!' => TokenKind::ExclamationMark,
    '-' => TokenKind::Minus,
    '+' => TokenKind::Plus,
    '=' => TokenKind::Equals,
    '.' => TokenKind::Dot,
};

pub fn punctuation_kind(c: char) -> TokenKind {
    PUNCTUATION.get(&c).copied().unwrap_or(TokenKind::Unknown)
}
