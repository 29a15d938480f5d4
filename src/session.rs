use crate::{
    interpreter::{context::BufferedContext, SystemContext, TreeWalkInterpreter},
    parser::{ParseOutcome, Parser, ParserError},
};

/// One parse-then-interpret run over a single source string.
///
/// Every session owns its own cursor and environment, so independent sessions
/// never observe each other's bindings.
pub struct Session<'src> {
    source: &'src str,
}

#[derive(Debug)]
pub struct SessionOutcome<C> {
    pub context: C,
    pub errors: Vec<ParserError>,
    /// Whether any part of the program was interpreted at all.
    pub executed: bool,
}

impl<C> SessionOutcome<C> {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<'src> Session<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run<C: SystemContext>(&self, context: C) -> SessionOutcome<C> {
        let ParseOutcome { program, errors } = Parser::new(self.source).parse();
        match program {
            // A partial tree (for example one missing an `END`) still runs.
            Some(program) => SessionOutcome {
                context: TreeWalkInterpreter::new(context).run(&program),
                errors,
                executed: true,
            },
            None => {
                tracing::debug!("no program to interpret");
                SessionOutcome {
                    context,
                    errors,
                    executed: false,
                }
            }
        }
    }

    pub fn run_buffered(&self) -> SessionOutcome<BufferedContext> {
        self.run(BufferedContext::new())
    }
}
