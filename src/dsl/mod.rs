//! DSL parser for pulse network descriptions.
//!
//! The DSL is line-oriented: every line defines one module and the
//! modules it sends pulses to.
//!
//! # Grammar Overview
//!
//! ```text
//! network     = { line }
//! line        = definition | comment | empty
//! comment     = '#' { any_char }
//! definition  = [prefix] name '->' name { ',' name }
//!
//! prefix      = '%' | '&'
//! name        = (letter | digit | '_') { letter | digit | '_' }
//! ```
//!
//! # Module Kinds
//!
//! | Prefix | Kind | Behaviour |
//! |--------|------|-----------|
//! | none | Broadcast | only `broadcaster`; forwards every pulse |
//! | `%` | Flip-flop | ignores high, toggles on low |
//! | `&` | Conjunction | emits low once every input last sent high |
//!
//! Names that are only ever used as destinations become sinks.
//!
//! # Example
//!
//! ```text
//! broadcaster -> a, b, c
//! %a -> b
//! %b -> c
//! %c -> inv
//! &inv -> a
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a network DSL string into an AST.
pub fn parse(input: &str) -> Result<NetworkAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a network DSL file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<NetworkAst> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::PulseError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(content.trim())
}
