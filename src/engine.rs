use std::path::Path;

use log::debug;

use crate::{
    config::ParserConfig,
    errors::{BaresError, SourceContext},
    eval::{self, EvalError},
    syntax::{ExpressionParser, Parsed, Token},
};

// ============================================================================
// EXECUTION PIPELINE - parse, optionally evaluate
// ============================================================================

/// Runs lines through the parser and, on request, the evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutionPipeline {
    parser: ExpressionParser,
}

impl ExecutionPipeline {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            parser: ExpressionParser::new(config),
        }
    }

    /// Parses one line and, when asked and the line is valid, evaluates it.
    pub fn process(
        &self,
        line: &str,
        evaluate: bool,
    ) -> (Parsed, Option<Result<i64, EvalError>>) {
        let parsed = self.parser.parse_with_tokens(line);
        let evaluation =
            (evaluate && parsed.result.is_ok()).then(|| eval::evaluate(&parsed.tokens));
        (parsed, evaluation)
    }

    /// Validates one line, returning its tokens or a located diagnostic.
    pub fn check_line(&self, line: &SourceContext) -> Result<Vec<Token>, BaresError> {
        let parsed = self.parser.parse_with_tokens(&line.content);
        match BaresError::from_parse(parsed.result, line) {
            Some(err) => Err(err),
            None => Ok(parsed.tokens),
        }
    }

    /// Validates and evaluates one line.
    pub fn evaluate_line(&self, line: &SourceContext) -> Result<i64, BaresError> {
        let tokens = self.check_line(line)?;
        let value = eval::evaluate(&tokens).map_err(|e| BaresError::from_eval(e, line))?;
        debug!("{} = {}", line.name, value);
        Ok(value)
    }

    // ============================================================================
    // FILE SERVICES
    // ============================================================================

    /// Reads a file with standardized error handling
    pub fn read_file(path: &Path) -> Result<String, BaresError> {
        std::fs::read_to_string(path).map_err(|error| BaresError::io(path, error))
    }

    /// Splits file content into named lines (`path:1`, `path:2`, ...).
    ///
    /// Line terminators are stripped, including a trailing `\r`.
    pub fn lines_of(path: &Path, content: &str) -> Vec<SourceContext> {
        content
            .lines()
            .enumerate()
            .map(|(index, line)| {
                SourceContext::new(format!("{}:{}", path.display(), index + 1), line)
            })
            .collect()
    }
}
