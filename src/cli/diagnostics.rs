//! Caret-style presentation of line failures.
//!
//! Every failure is one message plus the offending line with a `^` under the
//! reported column:
//!
//! ```text
//! error[<arg:1>]: Missing term at column 4
//!   | 4 +
//!   |     ^
//! ```

use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};
use unicode_width::UnicodeWidthChar;

use crate::errors::SourceContext;
use crate::eval::EvalError;
use crate::syntax::ParseResult;

// === Formatting Helpers ===

/// Builds the padding that puts a caret under byte offset `column` of `line`.
///
/// Tabs are copied so terminals expand them the same way on both lines; other
/// characters contribute their display width.
pub fn caret_padding(line: &str, column: usize) -> String {
    let prefix = line.get(..column).unwrap_or(line);
    let mut padding = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if c == '\t' {
            padding.push('\t');
            continue;
        }
        let width = c.width().unwrap_or(0);
        padding.extend(std::iter::repeat(' ').take(width));
    }
    padding
}

// === Public API ===

/// Writes a syntax failure. Does nothing for a successful result.
pub fn print_parse_failure(
    writer: &mut impl WriteColor,
    line: &SourceContext,
    result: ParseResult,
) -> io::Result<()> {
    if result.is_ok() {
        return Ok(());
    }
    print_located(writer, line, &result.to_string(), result.column)
}

pub fn print_eval_failure(
    writer: &mut impl WriteColor,
    line: &SourceContext,
    error: &EvalError,
) -> io::Result<()> {
    let message = format!(
        "Evaluation failed at column {}: {}",
        error.column(),
        error
    );
    print_located(writer, line, &message, error.column())
}

fn print_located(
    writer: &mut impl WriteColor,
    line: &SourceContext,
    message: &str,
    column: usize,
) -> io::Result<()> {
    writer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(writer, "error")?;
    writer.reset()?;
    writeln!(writer, "[{}]: {}", line.name, message)?;

    writer.set_color(ColorSpec::new().set_fg(Some(Color::Blue)))?;
    write!(writer, "  | ")?;
    writer.reset()?;
    writeln!(writer, "{}", line.content)?;

    writer.set_color(ColorSpec::new().set_fg(Some(Color::Blue)))?;
    write!(writer, "  | ")?;
    writer.reset()?;
    write!(writer, "{}", caret_padding(&line.content, column))?;
    writer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(writer, "^")?;
    writer.reset()?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{ErrorKind, ParseResult};
    use termcolor::Buffer;

    fn rendered(line: &str, result: ParseResult) -> String {
        let mut buffer = Buffer::no_color();
        let context = SourceContext::new("<test>", line);
        print_parse_failure(&mut buffer, &context, result).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn caret_sits_under_the_column() {
        let output = rendered("a + 4", ParseResult::new(ErrorKind::UnexpectedSymbol, 0));
        assert_eq!(
            output,
            "error[<test>]: Unexpected symbol at column 0\n  | a + 4\n  | ^\n"
        );
    }

    #[test]
    fn caret_may_point_past_the_last_character() {
        assert_eq!(
            rendered("4 + ", ParseResult::new(ErrorKind::MissingTerm, 4)),
            "error[<test>]: Missing term at column 4\n  | 4 + \n  |     ^\n"
        );
    }

    #[test]
    fn success_renders_nothing() {
        assert_eq!(rendered("1", ParseResult::OK), "");
    }

    #[test]
    fn padding_keeps_tabs_and_measures_wide_characters() {
        assert_eq!(caret_padding("\t1 +", 3), "\t  ");
        assert_eq!(caret_padding("日1", 3), "  ");
    }

    #[test]
    fn padding_tolerates_columns_past_the_end() {
        assert_eq!(caret_padding("12", 5), "  ");
    }
}
