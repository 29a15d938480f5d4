use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use std::path::{Path, PathBuf};
use std::{fs::read_to_string, process::ExitCode};

#[derive(Debug, Parser)]
#[clap(name = "printloop", version)]
pub struct CLArgs {
    #[clap(subcommand)]
    pub routine: PrintloopCommand,
}

#[derive(Debug, Subcommand)]
pub enum PrintloopCommand {
    Tokenize {
        path: PathBuf,
        #[clap(long = "format", value_enum, default_value = "basic")]
        format: TokenFormat,
    },
    Parse {
        path: PathBuf,
        #[clap(long = "format", value_enum, default_value = "sexpr")]
        format: TreeFormat,
        #[clap(long = "errors", value_enum, default_value = "pretty")]
        errors: ErrorFormat,
    },
    Run {
        path: PathBuf,
        #[clap(long = "errors", value_enum, default_value = "pretty")]
        errors: ErrorFormat,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum TokenFormat {
    Debug,
    Basic,
    Line,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum TreeFormat {
    Debug,
    #[clap(name = "sexpr")]
    SExpr,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ErrorFormat {
    Debug,
    Basic,
    Pretty,
}

fn main() -> ExitCode {
    printloop_main().expect("Encountered an error!")
}

/// Tracing output is only wired up when `RUST_LOG` is set, e.g.
/// `RUST_LOG=printloop=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn printloop_main() -> Result<ExitCode> {
    color_eyre::install().expect("Can't fail at first call!");
    init_tracing();
    let args = CLArgs::parse();
    let succeeded = match args.routine {
        PrintloopCommand::Tokenize { path, format } => {
            eprintln!("Tokenizing {:?}...", path);
            let src = read_to_string(&path)?;
            tokenize(&src, &format)
        }
        PrintloopCommand::Parse {
            path,
            format,
            errors,
        } => {
            eprintln!("Parsing {:?}...", path);
            let src = read_to_string(&path)?;
            parse(&src, &path, &format, &errors)
        }
        PrintloopCommand::Run { path, errors } => {
            eprintln!("Running {:?}...", path);
            let src = read_to_string(&path)?;
            run(&src, &path, &errors)
        }
    };

    match succeeded {
        true => Ok(ExitCode::SUCCESS),
        false => Ok(ExitCode::from(65)),
    }
}

fn tokenize(src: &str, format: &TokenFormat) -> bool {
    use printloop::lexer::formatter::{
        BasicFormatter, DebugFormatter, LineFormatter, ToFormatter, TokenFormatter,
    };
    use printloop::lexer::Lexer;

    let scanner = Lexer::new(src);
    let formatter: Box<dyn TokenFormatter + '_> = match format {
        TokenFormat::Debug => Box::new(ToFormatter::<DebugFormatter>::create_formatter(&scanner)),
        TokenFormat::Basic => Box::new(ToFormatter::<BasicFormatter>::create_formatter(&scanner)),
        TokenFormat::Line => Box::new(ToFormatter::<LineFormatter>::create_formatter(&scanner)),
    };
    for token in scanner {
        println!("{}", formatter.format(&token));
    }
    println!("{}", formatter.format_eof());
    true
}

fn create_error_formatter<'src>(
    src: &'src str,
    path: &'src Path,
    format: &ErrorFormat,
) -> Box<dyn printloop::parser::formatter::ParserFormatter + 'src> {
    use printloop::parser::formatter::{
        BasicParserFormatter, DebugParserFormatter, PrettyParserFormatter,
    };

    match format {
        ErrorFormat::Debug => Box::new(DebugParserFormatter),
        ErrorFormat::Basic => Box::new(BasicParserFormatter::new(src)),
        ErrorFormat::Pretty => Box::new(PrettyParserFormatter::new(src, path)),
    }
}

fn parse(src: &str, path: &Path, format: &TreeFormat, errors: &ErrorFormat) -> bool {
    use printloop::parser::{
        formatter::{DebugParserFormatter, ParserFormatter, SExpressionFormatter},
        Parser,
    };

    let error_formatter = create_error_formatter(src, path, errors);
    let outcome = Parser::new(src).parse();
    for error in outcome.errors.iter() {
        eprintln!("{}", error_formatter.format_error(error));
    }
    if let Some(ref program) = outcome.program {
        let tree = match format {
            TreeFormat::Debug => DebugParserFormatter.format(program),
            TreeFormat::SExpr => SExpressionFormatter::format_program(program),
        };
        println!("{tree}");
    }
    outcome.is_clean()
}

fn run(src: &str, path: &Path, errors: &ErrorFormat) -> bool {
    use printloop::interpreter::context::StdioContext;
    use printloop::session::Session;

    let error_formatter = create_error_formatter(src, path, errors);
    let outcome = Session::new(src).run(StdioContext);
    for error in outcome.errors.iter() {
        eprintln!("{}", error_formatter.format_error(error));
    }
    outcome.is_clean()
}
