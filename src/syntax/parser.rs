//! Bares Parser - recursive descent over a single line.
//!
//! Validates one line against the grammar below and reports the column of the
//! first unrecoverable deviation. The scan is strictly left to right: the cursor
//! never moves backward and every rule either consumes input or fails without
//! recursing further.
//!
//! ```text
//!   expr            := term { ws ("+"|"-") ws term }
//!   term            := integer
//!   integer         := "0" | ["-"] natural_number
//!   natural_number  := digit_excl_zero { digit }
//!   digit_excl_zero := "1" .. "9"
//!   digit           := "0" | digit_excl_zero
//!   ws              := { " " | "\t" }
//! ```

use log::{debug, trace};

use crate::config::{IntegerBounds, ParserConfig};
use crate::syntax::result::{ErrorKind, ParseResult};
use crate::syntax::symbol::{classify, TerminalSymbol};
use crate::syntax::token::Token;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Validates expression lines. Holds configuration only; every call to
/// [`ExpressionParser::parse`] runs on a fresh session.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionParser {
    config: ParserConfig,
}

/// A parse result together with the tokens accepted on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub result: ParseResult,
    pub tokens: Vec<Token>,
}

impl Parsed {
    /// Returns the token stream if the line was valid, otherwise the failure.
    pub fn into_tokens(self) -> Result<Vec<Token>, ParseResult> {
        if self.result.is_ok() {
            Ok(self.tokens)
        } else {
            Err(self.result)
        }
    }
}

impl ExpressionParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parses one line of text.
    pub fn parse(&self, text: &str) -> ParseResult {
        self.parse_with_tokens(text).result
    }

    /// Parses one line and keeps the token stream built during validation.
    pub fn parse_with_tokens(&self, text: &str) -> Parsed {
        let parsed = Session::new(text, self.config.integer_bounds).run();
        debug!("parsed {:?}: {}", text, parsed.result);
        parsed
    }
}

/// Parses `text` with the default configuration.
pub fn parse(text: &str) -> ParseResult {
    ExpressionParser::default().parse(text)
}

// ============================================================================
// SESSION
// ============================================================================

/// State owned by a single parse: the input copy, the cursor and the result.
struct Session {
    input: String,
    cursor: usize,
    result: ParseResult,
    tokens: Vec<Token>,
    bounds: Option<IntegerBounds>,
}

impl Session {
    fn new(text: &str, bounds: Option<IntegerBounds>) -> Self {
        Self {
            input: text.to_owned(),
            cursor: 0,
            result: ParseResult::OK,
            tokens: Vec::new(),
            bounds,
        }
    }

    fn run(mut self) -> Parsed {
        self.skip_whitespace();
        if self.at_end() {
            self.record_error(ErrorKind::PrematureEndOfInput, false);
        } else if self.expr() {
            // One expression per line: only blanks may follow it.
            self.skip_whitespace();
            if !self.expect(TerminalSymbol::EndOfInput) {
                self.record_error(ErrorKind::ExtraneousSymbol, true);
            }
        }
        Parsed {
            result: self.result,
            tokens: self.tokens,
        }
    }

    // ------------------------------------------------------------------------
    // Cursor primitives
    // ------------------------------------------------------------------------

    fn current(&self) -> Option<char> {
        self.input[self.cursor..].chars().next()
    }

    fn symbol(&self) -> TerminalSymbol {
        classify(self.current())
    }

    fn at_end(&self) -> bool {
        self.cursor >= self.input.len()
    }

    fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.cursor += c.len_utf8();
        }
    }

    /// Consumes the current character if it classifies as `symbol`.
    fn accept(&mut self, symbol: TerminalSymbol) -> bool {
        if self.symbol() == symbol {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, symbol: TerminalSymbol) -> bool {
        if !self.accept(symbol) {
            self.record_error(ErrorKind::UnexpectedSymbol, false);
        }
        self.result.is_ok()
    }

    fn skip_whitespace(&mut self) {
        while self.symbol().is_blank() {
            self.advance();
        }
    }

    fn record_error(&mut self, kind: ErrorKind, force_override: bool) {
        self.record_error_at(kind, self.cursor, force_override);
    }

    fn record_error_at(&mut self, kind: ErrorKind, column: usize, force_override: bool) {
        if self.result.record(kind, column, force_override) {
            trace!(
                "recorded {:?} (requested at column {}, forced: {}) -> {:?}",
                kind,
                column,
                force_override,
                self.result
            );
        }
    }

    // ------------------------------------------------------------------------
    // Grammar rules
    // ------------------------------------------------------------------------

    fn expr(&mut self) -> bool {
        if !self.term() {
            self.record_error(ErrorKind::MissingTerm, false);
            return false;
        }
        loop {
            self.skip_whitespace();
            let column = self.cursor;
            let operator = if self.accept(TerminalSymbol::Minus) {
                "-"
            } else if self.accept(TerminalSymbol::Plus) {
                "+"
            } else {
                break;
            };
            self.tokens.push(Token::operator(operator, column));
            self.skip_whitespace();
            if !self.term() {
                self.record_error(ErrorKind::MissingTerm, false);
                return false;
            }
        }
        self.result.is_ok()
    }

    fn term(&mut self) -> bool {
        if !self.integer() {
            // Garbage where a term should start is reported as such; a misplaced
            // grammar symbol (or the end of the line) means the term is missing.
            let kind = match self.symbol() {
                TerminalSymbol::Invalid => ErrorKind::UnexpectedSymbol,
                _ => ErrorKind::MissingTerm,
            };
            self.record_error(kind, false);
        }
        self.result.is_ok()
    }

    fn integer(&mut self) -> bool {
        let start = self.cursor;
        if self.accept(TerminalSymbol::Zero) {
            return self.close_integer(start);
        }
        self.accept(TerminalSymbol::Minus);
        if !self.natural_number() {
            return false;
        }
        self.close_integer(start)
    }

    /// Range-checks and records the integer spanning `start..cursor`.
    fn close_integer(&mut self, start: usize) -> bool {
        let admitted = match self.bounds {
            Some(bounds) => bounds.admits(&self.input[start..self.cursor]),
            None => true,
        };
        if !admitted {
            self.record_error_at(ErrorKind::IllFormedInteger, start, false);
        }
        self.tokens
            .push(Token::operand(&self.input[start..self.cursor], start));
        true
    }

    fn natural_number(&mut self) -> bool {
        if !self.digit_excl_zero() {
            return false;
        }
        while self.digit() {}
        self.result.is_ok()
    }

    fn digit_excl_zero(&mut self) -> bool {
        self.accept(TerminalSymbol::NonZeroDigit)
    }

    fn digit(&mut self) -> bool {
        self.accept(TerminalSymbol::Zero) || self.digit_excl_zero()
    }
}
