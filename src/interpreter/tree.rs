use super::SystemContext;
use crate::environment::Environment;
use crate::parser::tree::{Command, ForLoop, Primitive, Program, StatementList};
use crate::value::Value;

pub struct TreeWalkInterpreter<C: SystemContext> {
    environment: Environment,
    context: C,
}

impl<C> TreeWalkInterpreter<C>
where
    C: SystemContext,
{
    pub fn new(context: C) -> Self {
        Self {
            environment: Environment::new(),
            context,
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(mut self, program: &Program) -> C {
        self.interpret_statement_list(&program.body);
        self.context
    }
}

impl<C> TreeWalkInterpreter<C>
where
    C: SystemContext,
{
    fn interpret_statement_list(&mut self, list: &StatementList) {
        for command in list.commands.iter() {
            self.interpret_command(command);
        }
    }

    fn interpret_command(&mut self, command: &Command) {
        match command {
            Command::ForLoop(for_loop) => self.interpret_for_loop(for_loop),
            Command::Primitive(primitive) => self.interpret_primitive(primitive),
        }
    }

    fn interpret_for_loop(&mut self, for_loop: &ForLoop) {
        let name = for_loop.variable.as_ref().map(|word| word.text.as_str());
        tracing::debug!(
            variable = name,
            iterations = %for_loop.iteration_count(),
            "entering loop"
        );

        for x in for_loop.start..=for_loop.end {
            if let Some(name) = name {
                self.environment.bind(name, Value::Integer(x));
            }
            tracing::trace!(variable = name, value = x, "iteration");
            self.interpret_statement_list(&for_loop.body);
        }

        // Bindings are dynamically scoped, so drop this one once the loop ends.
        if let Some(name) = name {
            self.environment.unbind(name);
        }
    }

    fn interpret_primitive(&mut self, primitive: &Primitive) {
        match primitive {
            Primitive::Println {
                text: Some(text), ..
            } => {
                let line = self.environment.resolve(&text.text);
                self.context.writeln(&line);
            }
            Primitive::Println { text: None, .. } | Primitive::Unrecognized(_) => {}
        }
    }
}
