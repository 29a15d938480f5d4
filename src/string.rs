use crate::lexer::Span;
use compact_str::CompactString;

/// The text of a single source token together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    pub text: CompactString,
    pub span: Span,
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
