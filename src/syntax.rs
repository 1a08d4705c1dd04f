//! Syntax module for bares expressions
//!
//! Lexical classification, the recursive-descent validator and the types it
//! reports with.

pub mod parser;
pub mod result;
pub mod symbol;
pub mod token;

pub use parser::{parse, ExpressionParser, Parsed};
pub use result::{ErrorKind, ParseResult};
pub use symbol::{classify, TerminalSymbol};
pub use token::{Token, TokenKind};
