use super::{
    token::{Token, TokenKind},
    LineBreaks,
};
use crate::lexer::Lexer;

/// Interface for creating new token formatters.
pub trait TokenFormatter {
    /// Formats a token into a string.
    fn format(&self, token: &Token) -> String;
    /// Formats the end of the token stream.
    fn format_eof(&self) -> String;
}

pub trait ToFormatter<F>
where
    F: TokenFormatter,
{
    fn create_formatter(&self) -> F;
}

pub struct DebugFormatter;

impl<'src> ToFormatter<DebugFormatter> for Lexer<'src> {
    fn create_formatter(&self) -> DebugFormatter {
        DebugFormatter
    }
}

impl TokenFormatter for DebugFormatter {
    fn format(&self, token: &Token) -> String {
        format!("{token:?}")
    }

    fn format_eof(&self) -> String {
        "Eof".into()
    }
}

/// `KEYWORD <lexeme>` for the six keywords, `WORD <lexeme>` for everything else.
fn format_basic(text: &str, token: &Token) -> String {
    let lexeme = text.get(token.span.range()).unwrap_or_default();
    match token.kind {
        TokenKind::Word => format!("WORD {lexeme}"),
        _ => format!("KEYWORD {lexeme}"),
    }
}

pub struct BasicFormatter<'src> {
    text: &'src str,
}

impl<'src> ToFormatter<BasicFormatter<'src>> for Lexer<'src> {
    fn create_formatter(&self) -> BasicFormatter<'src> {
        BasicFormatter {
            text: self.get_source(),
        }
    }
}

impl<'src> TokenFormatter for BasicFormatter<'src> {
    fn format(&self, token: &Token) -> String {
        format_basic(self.text, token)
    }

    fn format_eof(&self) -> String {
        "EOF".into()
    }
}

pub struct LineFormatter<'src> {
    text: &'src str,
    line_breaks: LineBreaks,
}

impl<'src> ToFormatter<LineFormatter<'src>> for Lexer<'src> {
    fn create_formatter(&self) -> LineFormatter<'src> {
        LineFormatter {
            text: self.get_source(),
            line_breaks: self.get_line_breaks(),
        }
    }
}

impl<'src> TokenFormatter for LineFormatter<'src> {
    fn format(&self, token: &Token) -> String {
        let line = self.line_breaks.get_line_from_span(token.span);
        format!("({line}) {}", format_basic(self.text, token))
    }

    fn format_eof(&self) -> String {
        let line = self.line_breaks.get_max_line();
        format!("({line}) EOF")
    }
}
