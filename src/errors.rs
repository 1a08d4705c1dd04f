//! Bares Error Handling
//!
//! Parse failures inside the core are plain [`ParseResult`] values. Everything
//! that reaches a user goes through [`BaresError`], which carries the offending
//! line so `miette` can point at the exact column.

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::eval::EvalError;
use crate::syntax::{ErrorKind, ParseResult};

// ============================================================================
// SOURCE CONTEXT - Error reporting infrastructure
// ============================================================================

/// A line of input and where it came from (`<arg:1>`, `<repl:3>`, `sums.txt:7`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Convert to NamedSource for use with miette error reporting
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

#[derive(Debug, Error)]
pub enum BaresError {
    #[error("{kind} at column {column}")]
    Syntax {
        kind: ErrorKind,
        column: usize,
        origin: Arc<NamedSource<String>>,
    },
    #[error("Evaluation failed at column {}", error.column())]
    Eval {
        #[source]
        error: EvalError,
        origin: Arc<NamedSource<String>>,
    },
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl BaresError {
    /// Wraps a failed parse. Returns `None` for a successful one.
    pub fn from_parse(result: ParseResult, context: &SourceContext) -> Option<Self> {
        if result.is_ok() {
            return None;
        }
        Some(BaresError::Syntax {
            kind: result.kind,
            column: result.column,
            origin: context.to_named_source(),
        })
    }

    pub fn from_eval(error: EvalError, context: &SourceContext) -> Self {
        BaresError::Eval {
            error,
            origin: context.to_named_source(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BaresError::Io {
            path: path.into(),
            source,
        }
    }

    /// The column the error points at, if it is tied to a line.
    pub fn column(&self) -> Option<usize> {
        match self {
            BaresError::Syntax { column, .. } => Some(*column),
            BaresError::Eval { error, .. } => Some(error.column()),
            BaresError::Io { .. } | BaresError::Config { .. } => None,
        }
    }

    fn origin(&self) -> Option<&Arc<NamedSource<String>>> {
        match self {
            BaresError::Syntax { origin, .. } | BaresError::Eval { origin, .. } => Some(origin),
            BaresError::Io { .. } | BaresError::Config { .. } => None,
        }
    }

    fn primary_label(&self) -> String {
        match self {
            BaresError::Syntax { kind, .. } => match kind {
                ErrorKind::PrematureEndOfInput => "input ends here".into(),
                ErrorKind::UnexpectedSymbol => "not part of the grammar".into(),
                ErrorKind::MissingTerm => "expected an integer here".into(),
                ErrorKind::ExtraneousSymbol => "expression already ended".into(),
                ErrorKind::IllFormedInteger => "integer out of range".into(),
                ErrorKind::Ok => "here".into(),
            },
            BaresError::Eval { error, .. } => error.to_string(),
            BaresError::Io { .. } | BaresError::Config { .. } => String::new(),
        }
    }
}

impl Diagnostic for BaresError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            BaresError::Syntax { kind, .. } => format!("bares::syntax::{}", kind.code_suffix()),
            BaresError::Eval { error, .. } => format!("bares::eval::{}", error.code_suffix()),
            BaresError::Io { .. } => "bares::io".to_string(),
            BaresError::Config { .. } => "bares::config".to_string(),
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self {
            BaresError::Syntax { kind, .. } => match kind {
                ErrorKind::PrematureEndOfInput => "enter an expression such as `1 + 2`",
                ErrorKind::UnexpectedSymbol => {
                    "only digits, `+`, `-`, spaces and tabs may appear in an expression"
                }
                ErrorKind::MissingTerm => {
                    "a term is a single integer such as `7`, `-12` or `0` (no leading zeros)"
                }
                ErrorKind::ExtraneousSymbol => "only one expression is allowed per line",
                ErrorKind::IllFormedInteger => {
                    "the integer lies outside the configured range (see --min/--max)"
                }
                ErrorKind::Ok => return None,
            },
            BaresError::Eval { .. } => "results are computed with 64-bit signed integers",
            BaresError::Io { .. } | BaresError::Config { .. } => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.origin().map(|s| s.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let origin = self.origin()?;
        let column = self.column()?;
        // Cover the whole character under the column, or nothing at end of line.
        let len = origin
            .inner()
            .get(column..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);
        let labels = vec![LabeledSpan::new(Some(self.primary_label()), column, len)];
        Some(Box::new(labels.into_iter()))
    }
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Renders the error with full miette diagnostics.
pub fn report_string(error: BaresError) -> String {
    let report = miette::Report::new(error);
    format!("{report:?}")
}

/// Prints a BaresError with full miette diagnostics to stderr.
pub fn print_error(error: BaresError) {
    eprintln!("{}", report_string(error));
}
