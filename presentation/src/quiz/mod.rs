//! Interactive quiz mode

mod repl;

pub use repl::QuizRepl;
