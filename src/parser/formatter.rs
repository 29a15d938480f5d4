use super::{
    tree::{Command, ForLoop, Primitive, Program, StatementList},
    LoopBound, Parser, ParserError, ParserErrorKind,
};
use crate::lexer::LineBreaks;
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::{fmt::Write, path::Path};

const WRITE_FMT_MSG: &'static str =
    "Encountered an error while attempting to write format string to buffer.";
const ARIADNE_MSG: &'static str = "Ariadne produces valid utf-8 strings";
const ARIADNE_WRITE_MSG: &'static str = "Write into buffer should not fail.";

pub trait ParserFormatter {
    fn format(&self, program: &Program) -> String;
    fn format_error(&self, error: &ParserError) -> String;

    fn format_error_in_place(&self, buffer: &mut String, error: &ParserError) {
        write!(buffer, "{}", self.format_error(error)).expect(WRITE_FMT_MSG);
    }
}

pub trait ToFormatter<F>
where
    F: ParserFormatter,
{
    fn create_formatter(&self) -> F;
}

pub struct DebugParserFormatter;

impl ParserFormatter for DebugParserFormatter {
    fn format(&self, program: &Program) -> String {
        format!("{program:?}")
    }

    fn format_error(&self, error: &ParserError) -> String {
        format!("{error:?}")
    }
}

/// Renders a tree as a single-line S-expression.
pub struct SExpressionFormatter;

impl SExpressionFormatter {
    pub fn format_program(program: &Program) -> String {
        let mut buffer = String::from("(program");
        Self::format_statement_list(&mut buffer, &program.body);
        buffer.push(')');
        buffer
    }

    fn format_statement_list(buffer: &mut String, list: &StatementList) {
        for command in list.commands.iter() {
            buffer.push(' ');
            Self::format_command(buffer, command);
        }
    }

    fn format_command(buffer: &mut String, command: &Command) {
        match command {
            Command::ForLoop(for_loop) => Self::format_for_loop(buffer, for_loop),
            Command::Primitive(primitive) => Self::format_primitive(buffer, primitive),
        }
    }

    fn format_for_loop(buffer: &mut String, for_loop: &ForLoop) {
        let ForLoop {
            variable,
            start,
            end,
            body,
        } = for_loop;
        let variable = variable.as_ref().map_or("_", |word| word.text.as_str());
        write!(buffer, "(for {variable} {start} {end}").expect(WRITE_FMT_MSG);
        Self::format_statement_list(buffer, body);
        buffer.push(')');
    }

    fn format_primitive(buffer: &mut String, primitive: &Primitive) {
        match primitive {
            Primitive::Println {
                text: Some(text), ..
            } => write!(buffer, "(println {text})").expect(WRITE_FMT_MSG),
            Primitive::Println { text: None, .. } => buffer.push_str("(println)"),
            Primitive::Unrecognized(keyword) => {
                write!(buffer, "(noop {keyword})").expect(WRITE_FMT_MSG)
            }
        }
    }
}

/// One diagnostic per line, prefixed with the line it was found on.
pub struct BasicParserFormatter {
    line_breaks: LineBreaks,
}

impl BasicParserFormatter {
    pub fn new(text: &str) -> Self {
        Self {
            line_breaks: LineBreaks::new(text),
        }
    }
}

impl<'src> ToFormatter<BasicParserFormatter> for Parser<'src> {
    fn create_formatter(&self) -> BasicParserFormatter {
        BasicParserFormatter {
            line_breaks: self.get_line_breaks(),
        }
    }
}

impl ParserFormatter for BasicParserFormatter {
    fn format(&self, program: &Program) -> String {
        SExpressionFormatter::format_program(program)
    }

    fn format_error(&self, error: &ParserError) -> String {
        let line = self.line_breaks.get_line_from_span(error.span);
        format!("({line}) [Parser] {error}")
    }
}

pub struct PrettyParserFormatter<'src> {
    text: &'src str,
    path: &'src Path,
    color: bool,
}

impl<'src> PrettyParserFormatter<'src> {
    pub fn new(text: &'src str, path: &'src Path) -> Self {
        Self {
            text,
            path,
            color: true,
        }
    }

    /// Disables ANSI colour codes, e.g. when the output is not a terminal.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn label_message(kind: &ParserErrorKind) -> String {
        match kind {
            ParserErrorKind::MissingProgramKeyword { found: Some(found) } => {
                format!("Expected PROGRAM but got {found}")
            }
            ParserErrorKind::MissingProgramKeyword { found: None } => "The source is empty".into(),
            ParserErrorKind::MissingEnd => "File ends here...".into(),
            ParserErrorKind::MalformedForBound {
                bound,
                found: Some(found),
            } => format!("{found} is not an integer {}", Self::bound_name(bound)),
            ParserErrorKind::MalformedForBound { found: None, .. } => "File ends here...".into(),
            ParserErrorKind::MissingLoopVariable => "This loop binds no variable".into(),
            ParserErrorKind::MissingPrintArgument => "Nothing follows this PRINTLN".into(),
            ParserErrorKind::NestingTooDeep { .. } => "This loop and its body are skipped".into(),
        }
    }

    fn bound_name(bound: &LoopBound) -> &'static str {
        match bound {
            LoopBound::From => "start",
            LoopBound::To => "end",
        }
    }
}

impl<'src> ParserFormatter for PrettyParserFormatter<'src> {
    fn format(&self, program: &Program) -> String {
        SExpressionFormatter::format_program(program)
    }

    fn format_error(&self, error: &ParserError) -> String {
        let path = &self.path.to_string_lossy();
        let span = error.span.range();
        let mut output = std::io::Cursor::new(Vec::new());
        Report::build(ReportKind::Error, (path, span.clone()))
            .with_config(Config::default().with_color(self.color))
            .with_code(error.code())
            .with_message(error.to_string())
            .with_label(
                Label::new((path, span))
                    .with_message(Self::label_message(&error.kind))
                    .with_color(Color::BrightRed),
            )
            .finish()
            .write((path, Source::from(self.text)), &mut output)
            .expect(ARIADNE_WRITE_MSG);
        String::from_utf8(output.into_inner()).expect(ARIADNE_MSG)
    }
}
