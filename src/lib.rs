//! Bares: a recursive-descent validator for sums and differences of signed
//! integers, with column-accurate error reporting.
//!
//! ```
//! use bares::syntax::{parse, ErrorKind};
//!
//! let result = parse("12 + + 5");
//! assert_eq!(result.kind, ErrorKind::MissingTerm);
//! assert_eq!(result.column, 5);
//! ```

pub use crate::config::{IntegerBounds, ParserConfig};
pub use crate::engine::ExecutionPipeline;
pub use crate::errors::{BaresError, SourceContext};
pub use crate::syntax::{parse, ErrorKind, ExpressionParser, ParseResult};

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod eval;
pub mod repl;
pub mod syntax;
