//! The bares Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::{
    io::{self, Write},
    path::Path,
    process,
};

use clap::Parser;
use log::{debug, info};
use termcolor::{StandardStream, WriteColor};

use crate::{
    engine::ExecutionPipeline,
    errors::{print_error, SourceContext},
    repl::{run_repl, ReplState},
};

pub mod args;
pub mod diagnostics;
pub mod output;

use args::{BaresArgs, Command};
use output::{print_value, write_report, ReportOptions};

/// Sample lines exercising every outcome of the grammar.
pub const DEMO_EXPRESSIONS: &[&str] = &[
    "10",
    "32767 - 42768 + 8",
    "5 + -32766",
    "5 + -32769",
    "12 + 3",
    "-3+-5+-6",
    "12 + 3     -3 + -34 ",
    "0",
    "    12    +    4   8",
    "1.3 * 4",
    "12 + + 5",
    "+12",
    "4 + ",
    "4 + 03",
    "a + 4",
    "       ",
    "  123 *  548",
    "32a23",
    "43 + 54 -   ",
];

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = BaresArgs::parse();
    debug!("arguments: {:?}", args);

    let config = args.parser.to_config().unwrap_or_else(|e| {
        print_error(e);
        process::exit(2);
    });
    let pipeline = ExecutionPipeline::new(config);
    let mut stdout = StandardStream::stdout(args.color.choice());

    let outcome = match args.command {
        Command::Check {
            expressions,
            json,
            tokens,
        } => {
            let lines = named_lines("arg", expressions.iter().map(String::as_str));
            let options = ReportOptions {
                json,
                tokens,
                evaluate: false,
                fancy: args.fancy,
            };
            report_lines(&pipeline, &lines, &options, &mut stdout)
        }

        Command::File { path, json, eval } => {
            let lines = read_lines_or_exit(&path);
            let options = ReportOptions {
                json,
                tokens: false,
                evaluate: eval,
                fancy: args.fancy,
            };
            report_lines(&pipeline, &lines, &options, &mut stdout)
        }

        Command::Eval { expression } => {
            let line = SourceContext::new("<arg:1>", expression);
            match pipeline.evaluate_line(&line) {
                Ok(value) => print_value(&mut stdout, value).map(|_| true),
                Err(e) => {
                    print_error(e);
                    Ok(false)
                }
            }
        }

        Command::Repl { eval } => {
            let options = ReportOptions {
                evaluate: eval,
                fancy: args.fancy,
                ..Default::default()
            };
            let mut state = ReplState::new(pipeline, options);
            run_repl(&mut state, io::stdin().lock(), &mut stdout).map(|_| true)
        }

        Command::Demo => {
            let lines = named_lines("demo", DEMO_EXPRESSIONS.iter().copied());
            let options = ReportOptions {
                evaluate: true,
                fancy: args.fancy,
                ..Default::default()
            };
            // The demo contains failing lines on purpose.
            report_lines(&pipeline, &lines, &options, &mut stdout).map(|_| true)
        }
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn named_lines<'a>(prefix: &str, texts: impl Iterator<Item = &'a str>) -> Vec<SourceContext> {
    texts
        .enumerate()
        .map(|(index, text)| SourceContext::new(format!("<{}:{}>", prefix, index + 1), text))
        .collect()
}

fn read_lines_or_exit(path: &Path) -> Vec<SourceContext> {
    let content = ExecutionPipeline::read_file(path).unwrap_or_else(|e| {
        print_error(e);
        process::exit(1);
    });
    info!("checking {}", path.display());
    ExecutionPipeline::lines_of(path, &content)
}

/// Reports every line and returns whether all of them succeeded.
fn report_lines(
    pipeline: &ExecutionPipeline,
    lines: &[SourceContext],
    options: &ReportOptions,
    out: &mut impl WriteColor,
) -> io::Result<bool> {
    let mut all_ok = true;
    for line in lines {
        let (parsed, evaluation) = pipeline.process(&line.content, options.evaluate);
        all_ok &= parsed.result.is_ok() && !matches!(evaluation, Some(Err(_)));
        write_report(out, line, &parsed, evaluation.as_ref(), options)?;
    }
    out.flush()?;
    debug!("reported {} lines, all ok: {}", lines.len(), all_ok);
    Ok(all_ok)
}

