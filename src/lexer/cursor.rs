use super::{Lexer, LineBreaks, Span, Token, TokenKind};

/// Forward-only view over the token stream that remembers the token most
/// recently consumed.
///
/// Nothing is consumed on construction: the first call to [`Cursor::advance`]
/// yields the first token. Once the stream runs dry `current` stays `None`.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    lexer: Lexer<'src>,
    current: Option<Token>,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: Lexer::new(source),
            current: None,
        }
    }

    pub fn advance(&mut self) -> Option<Token> {
        self.current = self.lexer.next_token();
        if let Some(token) = self.current {
            tracing::trace!(kind = %token.kind, lexeme = self.lexeme(&token), "advanced");
        }
        self.current
    }

    pub fn current(&self) -> Option<Token> {
        self.current
    }

    pub fn current_lexeme(&self) -> Option<&'src str> {
        self.current.map(|token| self.lexeme(&token))
    }

    /// Exact, case-sensitive comparison against the current token.
    pub fn matches(&self, expected: &str) -> bool {
        self.current_lexeme() == Some(expected)
    }

    pub fn is_at(&self, keyword: TokenKind) -> bool {
        keyword
            .keyword()
            .is_some_and(|expected| self.matches(expected))
    }

    pub fn lexeme(&self, token: &Token) -> &'src str {
        // Tokens only ever come from this cursor's own lexer.
        self.lexer.get_lexeme(&token.span).unwrap_or_default()
    }

    pub fn get_line_breaks(&self) -> LineBreaks {
        self.lexer.get_line_breaks()
    }

    pub fn eof_span(&self) -> Span {
        self.lexer.eof_span()
    }
}
