mod error;
pub mod formatter;
pub mod tree;

pub use error::{LoopBound, ParserError, ParserErrorKind};
use tree::{Command, ForLoop, Primitive, Program, StatementList};

use crate::{
    lexer::{Cursor, LineBreaks, Span, Token, TokenKind},
    string::Word,
};
use compact_str::ToCompactString;

/// Everything a single parse pass produced.
///
/// `program` is `None` only when the source does not start with `PROGRAM`.
/// Any other structural problem still yields a (possibly partial) tree.
#[derive(Debug)]
pub struct ParseOutcome {
    pub program: Option<Program>,
    pub errors: Vec<ParserError>,
}

impl ParseOutcome {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// How many loops may enclose one another. Deeper loops are reported and
/// skipped so neither parsing nor interpretation recurses without bound.
pub const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser<'src> {
    cursor: Cursor<'src>,
    errors: Vec<ParserError>,
    loop_depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            errors: Vec::new(),
            loop_depth: 0,
        }
    }

    pub fn get_line_breaks(&self) -> LineBreaks {
        self.cursor.get_line_breaks()
    }

    pub fn parse(mut self) -> ParseOutcome {
        let program = self.parse_program();
        ParseOutcome {
            program,
            errors: self.errors,
        }
    }

    fn report(&mut self, kind: ParserErrorKind, span: Span) {
        let error = ParserError { kind, span };
        tracing::debug!(code = error.code(), %error, "reported");
        self.errors.push(error);
    }

    fn word(&self, token: &Token) -> Word {
        Word {
            text: self.cursor.lexeme(token).to_compact_string(),
            span: token.span,
        }
    }
}

impl<'src> Parser<'src> {
    fn parse_program(&mut self) -> Option<Program> {
        let first = self.cursor.advance();
        if !self.cursor.is_at(TokenKind::KeywordProgram) {
            let (found, span) = match first {
                Some(token) => (Some(self.word(&token).text), token.span),
                None => (None, self.cursor.eof_span()),
            };
            self.report(ParserErrorKind::MissingProgramKeyword { found }, span);
            return None;
        }
        self.cursor.advance();

        let body = self.parse_statement_list();
        Some(Program { body })
    }

    fn parse_statement_list(&mut self) -> StatementList {
        let mut commands = Vec::new();
        loop {
            match self.cursor.current() {
                None => {
                    let span = self.cursor.eof_span();
                    self.report(ParserErrorKind::MissingEnd, span);
                    return StatementList {
                        commands,
                        terminated: false,
                    };
                }
                Some(_) if self.cursor.is_at(TokenKind::KeywordEnd) => {
                    self.cursor.advance();
                    return StatementList {
                        commands,
                        terminated: true,
                    };
                }
                Some(token)
                    if token.kind == TokenKind::KeywordFor
                        && self.loop_depth >= MAX_NESTING_DEPTH =>
                {
                    self.skip_nested_loop(token)
                }
                Some(token) => commands.push(self.parse_command(token)),
            }
        }
    }

    fn parse_command(&mut self, token: Token) -> Command {
        if self.cursor.is_at(TokenKind::KeywordFor) {
            Command::ForLoop(self.parse_for_loop(token))
        } else {
            Command::Primitive(self.parse_primitive(token))
        }
    }

    fn parse_for_loop(&mut self, keyword: Token) -> ForLoop {
        let (variable, start, end) = self.parse_loop_header(keyword);

        self.loop_depth += 1;
        let body = self.parse_statement_list();
        self.loop_depth -= 1;

        ForLoop {
            variable,
            start,
            end,
            body,
        }
    }

    /// Consumes `FOR` through the bound after `TO`, stopping early if the input
    /// runs out.
    fn parse_loop_header(&mut self, keyword: Token) -> (Option<Word>, i64, i64) {
        let mut variable: Option<Word> = None;
        let mut start = 0;
        let mut end = 0;

        self.cursor.advance();
        while let Some(token) = self.cursor.current() {
            match token.kind {
                TokenKind::KeywordFrom => {
                    if let Some(value) = self.parse_bound(LoopBound::From) {
                        start = value;
                    }
                }
                TokenKind::KeywordTo => {
                    if let Some(value) = self.parse_bound(LoopBound::To) {
                        end = value;
                    }
                    break;
                }
                _ => {
                    // Only the first word names the variable, the rest are skipped.
                    if variable.is_none() {
                        variable = Some(self.word(&token));
                    }
                    self.cursor.advance();
                }
            }
        }

        if variable.is_none() {
            self.report(ParserErrorKind::MissingLoopVariable, keyword.span);
        }
        tracing::debug!(
            variable = variable.as_ref().map(|word| word.text.as_str()),
            start,
            end,
            "parsed loop header"
        );
        (variable, start, end)
    }

    /// Steps over a loop that would nest past [`MAX_NESTING_DEPTH`], together
    /// with everything nested inside it, without recursing.
    fn skip_nested_loop(&mut self, keyword: Token) {
        self.report(
            ParserErrorKind::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            },
            keyword.span,
        );

        let mut open: usize = 0;
        loop {
            let Some(token) = self.cursor.current() else {
                let span = self.cursor.eof_span();
                for _ in 0..open {
                    self.report(ParserErrorKind::MissingEnd, span);
                }
                return;
            };
            match token.kind {
                TokenKind::KeywordFor => {
                    self.parse_loop_header(token);
                    open += 1;
                }
                TokenKind::KeywordEnd => {
                    self.cursor.advance();
                    open -= 1;
                    if open == 0 {
                        return;
                    }
                }
                TokenKind::KeywordPrintln => {
                    // The print text may itself be a keyword such as `END`.
                    if self.cursor.advance().is_some() {
                        self.cursor.advance();
                    }
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// Consumes the token after `FROM`/`TO` and parses it as an integer. The
    /// cursor always ends up past the bound token, valid or not.
    fn parse_bound(&mut self, bound: LoopBound) -> Option<i64> {
        let Some(token) = self.cursor.advance() else {
            let span = self.cursor.eof_span();
            self.report(ParserErrorKind::MalformedForBound { bound, found: None }, span);
            return None;
        };

        let lexeme = self.cursor.lexeme(&token);
        let value = match lexeme.parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                let found = Some(lexeme.to_compact_string());
                self.report(ParserErrorKind::MalformedForBound { bound, found }, token.span);
                None
            }
        };
        self.cursor.advance();
        value
    }

    fn parse_primitive(&mut self, token: Token) -> Primitive {
        let keyword = self.word(&token);
        self.cursor.advance();

        if token.kind != TokenKind::KeywordPrintln {
            tracing::trace!(command = keyword.text.as_str(), "skipping unrecognized command");
            return Primitive::Unrecognized(keyword);
        }

        let text = self.cursor.current().map(|token| self.word(&token));
        if text.is_some() {
            self.cursor.advance();
        } else {
            self.report(ParserErrorKind::MissingPrintArgument, keyword.span);
        }
        Primitive::Println { keyword, text }
    }
}
