//! Lexical classification of single input characters.
//!
//! The grammar never looks at more than one character at a time, so the lexer is
//! a pure character-to-symbol table. End of input is modelled as `None` and
//! classifies to its own symbol, which keeps `accept` total.

use serde::Serialize;
use std::fmt;

/// The terminal symbols of the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalSymbol {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// A space character.
    Whitespace,
    /// A horizontal tab.
    Tab,
    /// `0`
    Zero,
    /// `1` through `9`
    NonZeroDigit,
    /// The sentinel past the last character.
    EndOfInput,
    /// Anything the grammar does not mention.
    Invalid,
}

impl TerminalSymbol {
    /// Returns true for the symbols `ws` is made of.
    pub const fn is_blank(self) -> bool {
        matches!(self, TerminalSymbol::Whitespace | TerminalSymbol::Tab)
    }
}

impl fmt::Display for TerminalSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TerminalSymbol::Plus => "'+'",
            TerminalSymbol::Minus => "'-'",
            TerminalSymbol::Whitespace => "space",
            TerminalSymbol::Tab => "tab",
            TerminalSymbol::Zero => "'0'",
            TerminalSymbol::NonZeroDigit => "non-zero digit",
            TerminalSymbol::EndOfInput => "end of input",
            TerminalSymbol::Invalid => "invalid symbol",
        };
        f.write_str(name)
    }
}

/// Maps one character (or the end-of-input sentinel) to its terminal symbol.
pub const fn classify(c: Option<char>) -> TerminalSymbol {
    match c {
        None => TerminalSymbol::EndOfInput,
        Some('+') => TerminalSymbol::Plus,
        Some('-') => TerminalSymbol::Minus,
        Some(' ') => TerminalSymbol::Whitespace,
        Some('\t') => TerminalSymbol::Tab,
        Some('0') => TerminalSymbol::Zero,
        Some('1'..='9') => TerminalSymbol::NonZeroDigit,
        Some(_) => TerminalSymbol::Invalid,
    }
}
