// tests/parser_tests.rs

use bares::config::{IntegerBounds, ParserConfig};
use bares::syntax::{parse, ErrorKind, ExpressionParser, ParseResult, Token};
use pretty_assertions::assert_eq;

fn failure(kind: ErrorKind, column: usize) -> ParseResult {
    ParseResult::new(kind, column)
}

// ---
// Accepted input
// ---

#[test]
fn test_valid_sums_and_differences() {
    let cases = [
        "10",
        "0",
        "12 + 3",
        "-3+-5+-6",
        "12 + 3     -3 + -34 ",
        "3 - -5",
        "3--5",
        "\t7\t+\t0\t",
        "   100 - 100",
        "32767 - 42768 + 8",
        "5 + -32769",
    ];
    for src in cases {
        assert_eq!(parse(src), ParseResult::OK, "should accept {src:?}");
    }
}

// ---
// Rejected input, one case per failure mode
// ---

#[test]
fn test_empty_and_blank_lines_end_prematurely() {
    assert_eq!(parse(""), failure(ErrorKind::PrematureEndOfInput, 0));
    assert_eq!(parse("   "), failure(ErrorKind::PrematureEndOfInput, 3));
    assert_eq!(parse("\t \t"), failure(ErrorKind::PrematureEndOfInput, 3));
}

#[test]
fn test_missing_terms() {
    assert_eq!(parse("4 + "), failure(ErrorKind::MissingTerm, 4));
    assert_eq!(parse("12 + + 5"), failure(ErrorKind::MissingTerm, 5));
    assert_eq!(parse("43 + 54 -   "), failure(ErrorKind::MissingTerm, 12));
    assert_eq!(parse("+12"), failure(ErrorKind::MissingTerm, 0));
    assert_eq!(parse("5 -"), failure(ErrorKind::MissingTerm, 3));
}

#[test]
fn test_minus_must_be_followed_by_natural_number() {
    // The minus belongs to the integer, so the column is just after it.
    assert_eq!(parse("-"), failure(ErrorKind::MissingTerm, 1));
    assert_eq!(parse("-0"), failure(ErrorKind::MissingTerm, 1));
    assert_eq!(parse("4 + - 5"), failure(ErrorKind::MissingTerm, 5));
}

#[test]
fn test_unexpected_symbols_where_a_term_starts() {
    assert_eq!(parse("a + 4"), failure(ErrorKind::UnexpectedSymbol, 0));
    assert_eq!(parse("4 + a"), failure(ErrorKind::UnexpectedSymbol, 4));
    assert_eq!(parse("-x"), failure(ErrorKind::UnexpectedSymbol, 1));
    assert_eq!(parse("é + 1"), failure(ErrorKind::UnexpectedSymbol, 0));
    assert_eq!(parse("1 + é"), failure(ErrorKind::UnexpectedSymbol, 4));
}

#[test]
fn test_extraneous_symbols_after_a_valid_expression() {
    assert_eq!(parse("32a23"), failure(ErrorKind::ExtraneousSymbol, 2));
    assert_eq!(parse("    12    +    4   8"), failure(ErrorKind::ExtraneousSymbol, 19));
    assert_eq!(parse("1.3 * 4"), failure(ErrorKind::ExtraneousSymbol, 1));
    assert_eq!(parse("  123 *  548"), failure(ErrorKind::ExtraneousSymbol, 6));
    assert_eq!(parse("4 + 03"), failure(ErrorKind::ExtraneousSymbol, 5));
    assert_eq!(parse("00"), failure(ErrorKind::ExtraneousSymbol, 1));
    assert_eq!(parse("1 + 2\n"), failure(ErrorKind::ExtraneousSymbol, 5));
}

#[test]
fn test_nul_is_not_end_of_input() {
    assert_eq!(parse("1\u{0}"), failure(ErrorKind::ExtraneousSymbol, 1));
    assert_eq!(parse("\u{0}"), failure(ErrorKind::UnexpectedSymbol, 0));
}

// ---
// Integer range checking
// ---

#[test]
fn test_no_range_check_by_default() {
    assert_eq!(parse("99999999999999999999999 + 1"), ParseResult::OK);
}

#[test]
fn test_signed_16_bounds_flag_ill_formed_integers() {
    let parser = ExpressionParser::new(ParserConfig::with_bounds(IntegerBounds::SIGNED_16));
    assert_eq!(parser.parse("5 + -32768"), ParseResult::OK);
    assert_eq!(
        parser.parse("32767 - 42768 + 8"),
        failure(ErrorKind::IllFormedInteger, 8)
    );
    assert_eq!(
        parser.parse("5 + -32769"),
        failure(ErrorKind::IllFormedInteger, 4)
    );
}

#[test]
fn test_ill_formed_integer_is_the_first_error() {
    let parser = ExpressionParser::new(ParserConfig::with_bounds(IntegerBounds::SIGNED_16));
    assert_eq!(
        parser.parse("40000 + a"),
        failure(ErrorKind::IllFormedInteger, 0)
    );
    assert_eq!(
        parser.parse("1 + 40000 x"),
        failure(ErrorKind::IllFormedInteger, 4)
    );
}

#[test]
fn test_literals_beyond_i64_fail_even_with_full_bounds() {
    let parser = ExpressionParser::new(ParserConfig::with_bounds(IntegerBounds::FULL));
    assert_eq!(
        parser.parse("1 - 9223372036854775808"),
        failure(ErrorKind::IllFormedInteger, 4)
    );
    assert_eq!(parser.parse("-9223372036854775808"), ParseResult::OK);
}

// ---
// Token projection
// ---

#[test]
fn test_tokens_record_lexemes_and_columns() {
    let parsed = ExpressionParser::default().parse_with_tokens("12 + 3     -3 + -34 ");
    assert_eq!(parsed.result, ParseResult::OK);
    assert_eq!(
        parsed.tokens,
        vec![
            Token::operand("12", 0),
            Token::operator("+", 3),
            Token::operand("3", 5),
            Token::operator("-", 11),
            Token::operand("3", 12),
            Token::operator("+", 14),
            Token::operand("-34", 16),
        ]
    );
}

#[test]
fn test_position_decides_what_a_minus_means() {
    let tokens = ExpressionParser::default()
        .parse_with_tokens("3--5")
        .into_tokens()
        .unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::operand("3", 0),
            Token::operator("-", 1),
            Token::operand("-5", 2),
        ]
    );
}

#[test]
fn test_failed_parse_yields_no_token_stream() {
    let parsed = ExpressionParser::default().parse_with_tokens("4 + ");
    assert_eq!(parsed.into_tokens(), Err(failure(ErrorKind::MissingTerm, 4)));
}

// ---
// Session independence
// ---

#[test]
fn test_parse_is_idempotent_across_calls() {
    let parser = ExpressionParser::default();
    for src in ["32a23", "1 + 1", "", "4 + "] {
        let first = parser.parse(src);
        let _ = parser.parse("garbage that fails differently +");
        assert_eq!(parser.parse(src), first, "{src:?}");
    }
}

#[test]
fn test_parser_is_shareable_across_threads() {
    let parser = ExpressionParser::default();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let parser = &parser;
                scope.spawn(move || parser.parse(&format!("{i} + {i} -")))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), failure(ErrorKind::MissingTerm, 7));
        }
    });
}
