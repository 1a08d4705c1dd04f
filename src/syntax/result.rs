//! Parse outcome types and the first-error-wins bookkeeping.

use serde::Serialize;
use std::fmt;

/// Every way a single line can fail to parse, plus `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    #[default]
    Ok,
    PrematureEndOfInput,
    UnexpectedSymbol,
    MissingTerm,
    ExtraneousSymbol,
    IllFormedInteger,
}

impl ErrorKind {
    /// Human-readable description, without location.
    pub const fn describe(self) -> &'static str {
        match self {
            ErrorKind::Ok => "Expression successfully parsed",
            ErrorKind::PrematureEndOfInput => "Premature end of input",
            ErrorKind::UnexpectedSymbol => "Unexpected symbol",
            ErrorKind::MissingTerm => "Missing term",
            ErrorKind::ExtraneousSymbol => "Extraneous symbol",
            ErrorKind::IllFormedInteger => "Ill-formed integer",
        }
    }

    /// Suffix used in diagnostic codes (`bares::syntax::<suffix>`).
    pub const fn code_suffix(self) -> &'static str {
        match self {
            ErrorKind::Ok => "ok",
            ErrorKind::PrematureEndOfInput => "premature_end_of_input",
            ErrorKind::UnexpectedSymbol => "unexpected_symbol",
            ErrorKind::MissingTerm => "missing_term",
            ErrorKind::ExtraneousSymbol => "extraneous_symbol",
            ErrorKind::IllFormedInteger => "ill_formed_integer",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// The single value produced by one `parse` call.
///
/// `column` is a 0-based byte offset into the parsed line and is only meaningful
/// when `kind` is not [`ErrorKind::Ok`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ParseResult {
    pub kind: ErrorKind,
    pub column: usize,
}

impl ParseResult {
    pub const OK: ParseResult = ParseResult {
        kind: ErrorKind::Ok,
        column: 0,
    };

    pub const fn new(kind: ErrorKind, column: usize) -> Self {
        Self { kind, column }
    }

    pub const fn is_ok(&self) -> bool {
        matches!(self.kind, ErrorKind::Ok)
    }

    /// Records an error under the first-error-wins policy.
    ///
    /// The first error fixes both kind and column. Later calls are ignored unless
    /// `force_override` is set, in which case only the kind is replaced.
    /// Returns true when the stored result changed.
    pub fn record(&mut self, kind: ErrorKind, column: usize, force_override: bool) -> bool {
        if self.is_ok() {
            self.kind = kind;
            self.column = column;
            return !self.is_ok();
        }
        if force_override && self.kind != kind {
            self.kind = kind;
            return true;
        }
        false
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} at column {}", self.kind, self.column)
        }
    }
}
