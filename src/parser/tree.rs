use crate::string::Word;

/// The root of a parsed program: everything between `PROGRAM` and its `END`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub body: StatementList,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatementList {
    pub commands: Vec<Command>,
    /// False when the input ran out before the closing `END`.
    pub terminated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ForLoop(ForLoop),
    Primitive(Primitive),
}

/// `FOR <var> FROM <int> TO <int> ... END`, both bounds inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForLoop {
    pub variable: Option<Word>,
    pub start: i64,
    pub end: i64,
    pub body: StatementList,
}

impl ForLoop {
    pub fn iteration_count(&self) -> u128 {
        if self.start > self.end {
            0
        } else {
            (i128::from(self.end) - i128::from(self.start) + 1) as u128
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    Println { keyword: Word, text: Option<Word> },
    /// Any other command word. Interpreting it does nothing.
    Unrecognized(Word),
}
