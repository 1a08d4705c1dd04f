//! Token stream recorded alongside validation.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A complete integer, including its own leading minus.
    Operand,
    /// A binary `+` or `-`.
    Operator,
}

/// One accepted lexeme and the column it started at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub column: usize,
}

impl Token {
    pub fn operand(lexeme: impl Into<String>, column: usize) -> Self {
        Self {
            kind: TokenKind::Operand,
            lexeme: lexeme.into(),
            column,
        }
    }

    pub fn operator(lexeme: impl Into<String>, column: usize) -> Self {
        Self {
            kind: TokenKind::Operator,
            lexeme: lexeme.into(),
            column,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            TokenKind::Operand => "OPERAND",
            TokenKind::Operator => "OPERATOR",
        };
        write!(f, "<\"{}\".{}@{}>", self.lexeme, kind, self.column)
    }
}
