use crate::lexer::Span;
use compact_str::CompactString;
use thiserror::Error;

/// Which end of a loop range a malformed bound belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopBound {
    From,
    To,
}

impl std::fmt::Display for LoopBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoopBound::From => write!(f, "FROM"),
            LoopBound::To => write!(f, "TO"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParserErrorKind {
    #[error("Expected 'PROGRAM' at the start of the program.")]
    MissingProgramKeyword { found: Option<CompactString> },
    #[error("Expected 'END' before the end of input.")]
    MissingEnd,
    #[error("Expected an integer after '{bound}'.")]
    MalformedForBound {
        bound: LoopBound,
        found: Option<CompactString>,
    },
    #[error("Expected a loop variable after 'FOR'.")]
    MissingLoopVariable,
    #[error("Expected text after 'PRINTLN'.")]
    MissingPrintArgument,
    #[error("Loops may not be nested more than {limit} deep.")]
    NestingTooDeep { limit: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct ParserError {
    #[source]
    pub kind: ParserErrorKind,
    pub span: Span,
}

impl ParserError {
    pub fn code(&self) -> &'static str {
        match self.kind {
            ParserErrorKind::MissingProgramKeyword { .. } => "P001",
            ParserErrorKind::MissingEnd => "P002",
            ParserErrorKind::MalformedForBound { .. } => "P003",
            ParserErrorKind::MissingLoopVariable => "P004",
            ParserErrorKind::MissingPrintArgument => "P005",
            ParserErrorKind::NestingTooDeep { .. } => "P006",
        }
    }
}
