mod cursor;
pub mod formatter;
mod token;

pub use cursor::Cursor;
use std::rc::Rc;
pub use token::{Span, SpanIndex, SpanLength, Token, TokenKind, KEYWORD_HASHMAP};

#[derive(Debug, Clone)]
pub struct LineBreaks {
    line_starts: Rc<[SpanIndex]>,
}

impl LineBreaks {
    pub fn new(text: &str) -> Self {
        let line_starts: Vec<SpanIndex> = std::iter::once(SpanIndex::new(0))
            .chain(text.match_indices('\n').map(|(offset, _)| (offset + 1).into()))
            .collect();
        Self {
            line_starts: line_starts.into(),
        }
    }

    pub fn get_max_line(&self) -> usize {
        self.line_starts.len()
    }

    pub fn get_line(&self, offset: SpanIndex) -> usize {
        // The first line always starts at 0 so the count is at least one.
        self.line_starts.partition_point(|start| *start <= offset)
    }

    pub fn get_line_from_span(&self, span: Span) -> usize {
        self.get_line(span.start)
    }
}

/// Splits source text into whitespace-delimited tokens.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    offset: SpanIndex,
    line_breaks: LineBreaks,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: SpanIndex::new(0),
            line_breaks: LineBreaks::new(source),
        }
    }

    pub fn get_source(&self) -> &'src str {
        self.source
    }

    pub fn get_line_breaks(&self) -> LineBreaks {
        self.line_breaks.clone()
    }

    pub fn get_lexeme(&self, span: &Span) -> Option<&'src str> {
        self.source.get(span.range())
    }

    /// Zero-length span just past the last byte of the source.
    pub fn eof_span(&self) -> Span {
        Span::empty_at(self.source.len().into())
    }

    pub fn next_token(&mut self) -> Option<Token> {
        let rest = &self.source[self.offset.to_usize()..];
        let Some(skipped) = rest.find(|c: char| !c.is_whitespace()) else {
            self.offset = self.source.len().into();
            return None;
        };

        let rest = &rest[skipped..];
        let length = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let start = self.offset + skipped;
        self.offset = start + length;

        Some(Token {
            kind: TokenKind::classify(&rest[..length]),
            span: Span {
                start,
                length: length.into(),
            },
        })
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
