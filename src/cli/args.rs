//! Defines the command-line arguments and subcommands for the bares CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use termcolor::ColorChoice;

use crate::config::{IntegerBounds, ParserConfig};
use crate::errors::BaresError;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "bares",
    version,
    about = "Validate and evaluate sums and differences of signed integers."
)]
pub struct BaresArgs {
    #[command(flatten)]
    pub parser: ParserArgs,

    /// When to color the output.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,

    /// Render failures as full miette reports instead of a caret line.
    #[arg(long, global = true)]
    pub fancy: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Options that become the parser configuration.
#[derive(Debug, Args)]
pub struct ParserArgs {
    /// Smallest integer literal accepted (enables range checking).
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Largest integer literal accepted (enables range checking).
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Accept only literals that fit a signed 16-bit integer.
    #[arg(long, global = true, conflicts_with_all = ["min", "max"])]
    pub short: bool,
}

impl ParserArgs {
    pub fn to_config(&self) -> Result<ParserConfig, BaresError> {
        if self.short {
            return Ok(ParserConfig::with_bounds(IntegerBounds::SIGNED_16));
        }
        ParserConfig::from_limits(self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves `auto` against whether stdout is a terminal.
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
        }
    }
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate each expression given on the command line.
    Check {
        /// The expressions to validate, one per argument.
        #[arg(required = true, allow_hyphen_values = true)]
        expressions: Vec<String>,
        /// Emit one JSON object per expression.
        #[arg(long)]
        json: bool,
        /// Show the token stream of valid expressions.
        #[arg(long)]
        tokens: bool,
    },
    /// Validate every line of a file.
    File {
        /// The path to a file with one expression per line.
        #[arg(required = true)]
        path: PathBuf,
        /// Emit one JSON object per line.
        #[arg(long)]
        json: bool,
        /// Also evaluate valid lines.
        #[arg(long)]
        eval: bool,
    },
    /// Validate and evaluate a single expression.
    Eval {
        /// The expression to evaluate.
        #[arg(required = true, allow_hyphen_values = true)]
        expression: String,
    },
    /// Start an interactive session.
    Repl {
        /// Evaluate valid lines instead of only validating them.
        #[arg(long)]
        eval: bool,
    },
    /// Run the built-in sample expressions.
    Demo,
}
