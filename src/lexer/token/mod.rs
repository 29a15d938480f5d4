mod span;

pub use span::{SpanIndex, SpanLength};
use std::collections::HashMap;
use std::fmt::Display;
use std::ops::Range;
use std::sync::LazyLock;

/// The hashmap for keywords. Keywords are case-sensitive.
pub static KEYWORD_HASHMAP: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert("PROGRAM", TokenKind::KeywordProgram);
    map.insert("END", TokenKind::KeywordEnd);
    map.insert("FOR", TokenKind::KeywordFor);
    map.insert("FROM", TokenKind::KeywordFrom);
    map.insert("TO", TokenKind::KeywordTo);
    map.insert("PRINTLN", TokenKind::KeywordPrintln);
    map
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// The byte position of the start of the token.
    pub start: SpanIndex,
    /// The length of the token in bytes.
    pub length: SpanLength,
}

impl Span {
    /// A zero-length span sitting at `offset`, used to point at the end of input.
    pub fn empty_at(offset: SpanIndex) -> Self {
        Self {
            start: offset,
            length: SpanLength::new(0),
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start.into()..(self.start + self.length).into()
    }

    pub fn end(&self) -> SpanIndex {
        self.start + self.length
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    KeywordProgram,
    KeywordEnd,
    KeywordFor,
    KeywordFrom,
    KeywordTo,
    KeywordPrintln,
    /// Any token that is not a keyword: loop variables, bounds and print text.
    Word,
}

impl TokenKind {
    pub fn classify(lexeme: &str) -> Self {
        KEYWORD_HASHMAP
            .get(lexeme)
            .copied()
            .unwrap_or(TokenKind::Word)
    }

    /// The exact source text of a keyword, `None` for words.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            TokenKind::KeywordProgram => Some("PROGRAM"),
            TokenKind::KeywordEnd => Some("END"),
            TokenKind::KeywordFor => Some("FOR"),
            TokenKind::KeywordFrom => Some("FROM"),
            TokenKind::KeywordTo => Some("TO"),
            TokenKind::KeywordPrintln => Some("PRINTLN"),
            TokenKind::Word => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.keyword() {
            Some(keyword) => write!(f, "{keyword}"),
            None => write!(f, "WORD"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}
