//! Handles all user-facing output for the CLI.
//!
//! Per-line reports (plain, fancy or JSON) are written here so that `check`,
//! `file`, `demo` and the REPL present results the same way.

use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::cli::diagnostics::{print_eval_failure, print_parse_failure};
use crate::errors::{report_string, BaresError, SourceContext};
use crate::eval::EvalError;
use crate::syntax::{ErrorKind, Parsed, Token};

// ============================================================================
// REPORT OPTIONS
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub json: bool,
    pub tokens: bool,
    pub evaluate: bool,
    pub fancy: bool,
}

/// Everything known about one processed line.
#[derive(Debug, Serialize)]
pub struct LineReport<'a> {
    pub source: &'a str,
    pub input: &'a str,
    pub kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<&'a [Token]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_error: Option<&'a EvalError>,
}

impl<'a> LineReport<'a> {
    pub fn new(
        line: &'a SourceContext,
        parsed: &'a Parsed,
        evaluation: Option<&'a Result<i64, EvalError>>,
        with_tokens: bool,
    ) -> Self {
        let ok = parsed.result.is_ok();
        Self {
            source: &line.name,
            input: &line.content,
            kind: parsed.result.kind,
            column: (!ok).then_some(parsed.result.column),
            tokens: (ok && with_tokens).then_some(parsed.tokens.as_slice()),
            value: evaluation.and_then(|r| r.as_ref().ok().copied()),
            eval_error: evaluation.and_then(|r| r.as_ref().err()),
        }
    }
}

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Writes one report in the format selected by `options`.
pub fn write_report(
    out: &mut impl WriteColor,
    line: &SourceContext,
    parsed: &Parsed,
    evaluation: Option<&Result<i64, EvalError>>,
    options: &ReportOptions,
) -> io::Result<()> {
    if options.json {
        let report = LineReport::new(line, parsed, evaluation, options.tokens);
        serde_json::to_writer(&mut *out, &report)?;
        return writeln!(out);
    }

    if !parsed.result.is_ok() {
        if options.fancy {
            if let Some(err) = BaresError::from_parse(parsed.result, line) {
                return writeln!(out, "{}", report_string(err));
            }
        }
        return print_parse_failure(out, line, parsed.result);
    }

    match evaluation {
        Some(Err(error)) if options.fancy => {
            writeln!(out, "{}", report_string(BaresError::from_eval(error.clone(), line)))
        }
        Some(Err(error)) => print_eval_failure(out, line, error),
        Some(Ok(value)) => print_success(out, line, Some(*value), options, &parsed.tokens),
        None => print_success(out, line, None, options, &parsed.tokens),
    }
}

fn print_success(
    out: &mut impl WriteColor,
    line: &SourceContext,
    value: Option<i64>,
    options: &ReportOptions,
    tokens: &[Token],
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "ok")?;
    out.reset()?;
    write!(out, "[{}]: \"{}\"", line.name, line.content)?;
    if let Some(value) = value {
        write!(out, " = {}", value)?;
    }
    writeln!(out)?;
    if options.tokens {
        print_tokens(out, tokens)?;
    }
    Ok(())
}

/// Prints a token stream on one indented line.
pub fn print_tokens(out: &mut impl WriteColor, tokens: &[Token]) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    write!(out, "  tokens:")?;
    out.reset()?;
    for token in tokens {
        write!(out, " {}", token)?;
    }
    writeln!(out)
}

/// Prints a bare evaluation result.
pub fn print_value(out: &mut impl WriteColor, value: i64) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "{}", value)?;
    out.reset()?;
    writeln!(out)
}
