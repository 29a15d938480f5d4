pub mod context;
mod tree;

pub use tree::TreeWalkInterpreter;

/// The output sink a program prints to.
pub trait SystemContext {
    fn writeln(&mut self, text: &str);
}
