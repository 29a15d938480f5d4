pub mod environment;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod session;
pub mod string;
pub mod value;
