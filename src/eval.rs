//! Left-to-right evaluation of a validated token stream.

use log::trace;
use serde::Serialize;
use thiserror::Error;

use crate::syntax::{Token, TokenKind};

/// Why a token stream could not be folded into a value.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvalError {
    #[error("integer literal does not fit in 64 bits")]
    OperandOutOfRange { column: usize },
    #[error("arithmetic overflow")]
    Overflow { column: usize },
    #[error("token stream does not alternate operands and operators")]
    MalformedStream { column: usize },
}

impl EvalError {
    pub fn column(&self) -> usize {
        match self {
            EvalError::OperandOutOfRange { column }
            | EvalError::Overflow { column }
            | EvalError::MalformedStream { column } => *column,
        }
    }

    pub const fn code_suffix(&self) -> &'static str {
        match self {
            EvalError::OperandOutOfRange { .. } => "operand_out_of_range",
            EvalError::Overflow { .. } => "overflow",
            EvalError::MalformedStream { .. } => "malformed_stream",
        }
    }
}

/// Folds `operand { operator operand }` left to right with checked arithmetic.
pub fn evaluate(tokens: &[Token]) -> Result<i64, EvalError> {
    let mut iter = tokens.iter();
    let first = iter
        .next()
        .ok_or(EvalError::MalformedStream { column: 0 })?;
    let mut acc = operand_value(first)?;

    while let Some(operator) = iter.next() {
        if operator.kind != TokenKind::Operator {
            return Err(EvalError::MalformedStream {
                column: operator.column,
            });
        }
        let rhs_token = iter.next().ok_or(EvalError::MalformedStream {
            column: operator.column,
        })?;
        let rhs = operand_value(rhs_token)?;
        let overflow = EvalError::Overflow {
            column: operator.column,
        };
        acc = match operator.lexeme.as_str() {
            "+" => acc.checked_add(rhs).ok_or(overflow)?,
            "-" => acc.checked_sub(rhs).ok_or(overflow)?,
            _ => {
                return Err(EvalError::MalformedStream {
                    column: operator.column,
                })
            }
        };
        trace!("{} {} -> {}", operator.lexeme, rhs, acc);
    }
    Ok(acc)
}

fn operand_value(token: &Token) -> Result<i64, EvalError> {
    if token.kind != TokenKind::Operand {
        return Err(EvalError::MalformedStream {
            column: token.column,
        });
    }
    token
        .lexeme
        .parse::<i64>()
        .map_err(|_| EvalError::OperandOutOfRange {
            column: token.column,
        })
}
