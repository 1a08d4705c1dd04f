//! Bares REPL (Read-Eval-Print Loop)
//!
//! Reads one expression per line and reports each one on its own.

use std::io::{self, BufRead, Write};

use log::debug;
use termcolor::WriteColor;

use crate::{
    cli::output::{write_report, ReportOptions},
    engine::ExecutionPipeline,
    errors::SourceContext,
};

const HELP: &str = "\
Enter an expression such as `12 + 3 - -4`, one per line.
An empty line is ignored; a line of only blanks is checked like any other.
Commands:
  :help     show this message
  :tokens   toggle printing of the token stream
  :eval     toggle evaluation of valid lines
  :quit     leave the session";

/// REPL state that persists across lines
pub struct ReplState {
    pipeline: ExecutionPipeline,
    options: ReportOptions,
    line_number: usize,
}

enum ReplCommand {
    Continue,
    Quit,
}

impl ReplState {
    pub fn new(pipeline: ExecutionPipeline, options: ReportOptions) -> Self {
        Self {
            pipeline,
            options,
            line_number: 1,
        }
    }

    /// Parses (and optionally evaluates) one line, reporting to `out`.
    /// Returns whether the line succeeded.
    pub fn eval_line(&mut self, input: &str, out: &mut impl WriteColor) -> io::Result<bool> {
        let line = SourceContext::new(format!("<repl:{}>", self.line_number), input);
        self.line_number += 1;

        let (parsed, evaluation) = self
            .pipeline
            .process(&line.content, self.options.evaluate);
        write_report(out, &line, &parsed, evaluation.as_ref(), &self.options)?;

        Ok(parsed.result.is_ok() && !matches!(evaluation, Some(Err(_))))
    }

    fn handle_command(&mut self, command: &str, out: &mut impl Write) -> io::Result<ReplCommand> {
        match command {
            ":quit" | ":q" | ":exit" => return Ok(ReplCommand::Quit),
            ":help" | ":h" => writeln!(out, "{HELP}")?,
            ":tokens" => {
                self.options.tokens = !self.options.tokens;
                writeln!(out, "token display {}", on_off(self.options.tokens))?;
            }
            ":eval" => {
                self.options.evaluate = !self.options.evaluate;
                writeln!(out, "evaluation {}", on_off(self.options.evaluate))?;
            }
            other => writeln!(out, "unknown command {other}; type :help for help")?,
        }
        Ok(ReplCommand::Continue)
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// Runs the loop over any line source until end of input or `:quit`.
pub fn run_repl(
    state: &mut ReplState,
    input: impl BufRead,
    out: &mut impl WriteColor,
) -> io::Result<()> {
    writeln!(out, "bares {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Type :help for help, :quit to exit")?;

    let mut lines = input.lines();
    loop {
        write!(out, "bares> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            // EOF (Ctrl+D)
            writeln!(out, "\nGoodbye!")?;
            break;
        };
        let line = line?;
        let line = line.trim_end_matches('\r');

        if line.trim_start().starts_with(':') {
            match state.handle_command(line.trim(), out)? {
                ReplCommand::Continue => continue,
                ReplCommand::Quit => break,
            }
        }
        if line.is_empty() {
            continue;
        }
        let ok = state.eval_line(line, out)?;
        debug!("repl line {} ok={}", state.line_number - 1, ok);
    }
    Ok(())
}
