// tests/eval_tests.rs

use bares::engine::ExecutionPipeline;
use bares::errors::{BaresError, SourceContext};
use bares::eval::{evaluate, EvalError};
use bares::syntax::{ExpressionParser, Token};
use pretty_assertions::assert_eq;

fn eval_str(text: &str) -> Result<i64, BaresError> {
    ExecutionPipeline::default().evaluate_line(&SourceContext::new("<test>", text))
}

#[test]
fn test_values_fold_left_to_right() {
    assert_eq!(eval_str("10").unwrap(), 10);
    assert_eq!(eval_str("12 + 3").unwrap(), 15);
    assert_eq!(eval_str("-3+-5+-6").unwrap(), -14);
    assert_eq!(eval_str("12 + 3     -3 + -34 ").unwrap(), -22);
    assert_eq!(eval_str("10 - 3 - 2").unwrap(), 5);
    assert_eq!(eval_str("3--5").unwrap(), 8);
    assert_eq!(eval_str("0 - 0").unwrap(), 0);
}

#[test]
fn test_extremes_of_i64_are_reachable() {
    assert_eq!(eval_str("-9223372036854775808").unwrap(), i64::MIN);
    assert_eq!(eval_str("9223372036854775806 + 1").unwrap(), i64::MAX);
    assert_eq!(eval_str("-9223372036854775807 - 1").unwrap(), i64::MIN);
}

#[test]
fn test_overflow_points_at_the_operator() {
    let err = eval_str("9223372036854775807 - 1 + 2").unwrap_err();
    match err {
        BaresError::Eval { error, .. } => assert_eq!(error, EvalError::Overflow { column: 24 }),
        other => panic!("expected an evaluation error, got {other:?}"),
    }
}

#[test]
fn test_huge_literal_is_out_of_range_not_a_syntax_error() {
    let err = eval_str("1 + 99999999999999999999").unwrap_err();
    match err {
        BaresError::Eval { error, .. } => {
            assert_eq!(error, EvalError::OperandOutOfRange { column: 4 })
        }
        other => panic!("expected an evaluation error, got {other:?}"),
    }
}

#[test]
fn test_syntax_errors_stop_before_evaluation() {
    let err = eval_str("4 + ").unwrap_err();
    assert!(matches!(err, BaresError::Syntax { column: 4, .. }));
}

#[test]
fn test_evaluate_accepts_a_hand_built_stream() {
    let tokens = vec![
        Token::operand("7", 0),
        Token::operator("-", 2),
        Token::operand("-7", 4),
    ];
    assert_eq!(evaluate(&tokens), Ok(14));
}

#[test]
fn test_parser_tokens_feed_the_evaluator() {
    let tokens = ExpressionParser::default()
        .parse_with_tokens("100 - 1 + -1")
        .into_tokens()
        .unwrap();
    assert_eq!(evaluate(&tokens), Ok(98));
}
