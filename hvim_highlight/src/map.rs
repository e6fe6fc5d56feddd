use hvim_lexer::{
    tokenize,
    tokens::{Token, TokenKind},
};
use log::trace;

/// Token stream of one buffer, indexed for position lookups by the highlighter.
#[derive(Debug, Clone)]
pub struct TokenMap<'src> {
    src: &'src str,
    tokens: Vec<Token<'src>>,
    /// Byte offset where each row begins.
    line_starts: Vec<usize>,
}

impl<'src> TokenMap<'src> {
    pub fn new(src: &'src str) -> Self {
        let tokens: Vec<Token<'src>> = tokenize(src).collect();
        let line_starts: Vec<usize> = if src.is_empty() {
            vec![]
        } else {
            std::iter::once(0)
                .chain(
                    src.match_indices('\n')
                        .map(|(i, _)| i + 1)
                        .filter(|start| *start < src.len()),
                )
                .collect()
        };
        trace!(
            "token map: {} tokens over {} rows",
            tokens.len(),
            line_starts.len()
        );
        Self {
            src,
            tokens,
            line_starts,
        }
    }

    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset of `(row, col)`, if the row exists and `col` falls within its text or its
    /// terminating newline.
    pub fn offset_of(&self, row: usize, col: usize) -> Option<usize> {
        let start = *self.line_starts.get(row)?;
        let end = self
            .line_starts
            .get(row + 1)
            .copied()
            .unwrap_or(self.src.len());
        let offset = start.checked_add(col)?;
        (offset < end).then_some(offset)
    }

    pub fn token_at(&self, row: usize, col: usize) -> Option<&Token<'src>> {
        let offset = self.offset_of(row, col)?;
        let idx = self
            .tokens
            .partition_point(|t| t.start <= offset)
            .checked_sub(1)?;
        self.tokens.get(idx).filter(|t| t.range().contains(&offset))
    }

    pub fn kind_at(&self, row: usize, col: usize) -> Option<TokenKind> {
        self.token_at(row, col).map(|t| t.kind)
    }
}

#[cfg(test)]
mod tests {
    use hvim_lexer::tokens::TokenKind;
    use pretty_assertions::assert_eq;

    use super::TokenMap;

    const SRC: &str = "#include <x>\nint a = \"s\";\n\tb;\n";

    #[test]
    fn rows_match_editor_lines() {
        assert_eq!(TokenMap::new(SRC).line_count(), 3);
        assert_eq!(TokenMap::new("").line_count(), 0);
        assert_eq!(TokenMap::new("\n").line_count(), 1);
        assert_eq!(TokenMap::new("a\nb").line_count(), 2);
    }

    #[test]
    fn kind_at_positions() {
        let map = TokenMap::new(SRC);
        assert_eq!(map.kind_at(0, 0), Some(TokenKind::PreprocessorDirective));
        assert_eq!(map.kind_at(0, 11), Some(TokenKind::PreprocessorDirective));
        assert_eq!(map.kind_at(1, 0), Some(TokenKind::Keyword));
        assert_eq!(map.kind_at(1, 2), Some(TokenKind::Keyword));
        assert_eq!(map.kind_at(1, 3), Some(TokenKind::Whitespace));
        assert_eq!(map.kind_at(1, 4), Some(TokenKind::Identifier));
        assert_eq!(map.kind_at(1, 6), Some(TokenKind::Equals));
        assert_eq!(map.kind_at(1, 9), Some(TokenKind::StringLiteral));
        assert_eq!(map.kind_at(1, 11), Some(TokenKind::SemiColon));
        assert_eq!(map.kind_at(2, 1), Some(TokenKind::Identifier));
    }

    #[test]
    fn whitespace_spanning_rows() {
        let map = TokenMap::new(SRC);
        // "\n\t" after the semicolon is one token covering the end of row 1 and the start of row 2.
        let end_of_row = map.token_at(1, 12).map(|t| t.range());
        let start_of_next = map.token_at(2, 0).map(|t| t.range());
        assert_eq!(map.kind_at(1, 12), Some(TokenKind::Whitespace));
        assert_eq!(end_of_row, start_of_next);
    }

    #[test]
    fn out_of_range_positions() {
        let map = TokenMap::new(SRC);
        assert_eq!(map.kind_at(0, 13), None);
        assert_eq!(map.kind_at(3, 0), None);
        assert_eq!(map.kind_at(0, usize::MAX), None);
        assert_eq!(TokenMap::new("").kind_at(0, 0), None);
    }

    #[test]
    fn offsets() {
        let map = TokenMap::new(SRC);
        assert_eq!(map.offset_of(0, 0), Some(0));
        assert_eq!(map.offset_of(1, 0), Some(13));
        assert_eq!(map.offset_of(2, 2), Some(28));
        assert_eq!(map.tokens().last().map(|t| t.end()), Some(SRC.len()));
    }
}
