use thiserror::Error;

use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating postfix.
pub enum EvalError {
    /// The right operand of `/` or `%` was zero.
    #[error("Division by zero in '{operator}'.")]
    DivisionByZero {
        /// Either `/` or `%`.
        operator: BinaryOperator,
    },
    /// The sequence was not valid postfix. Trees built by the parser never
    /// produce this.
    #[error("Malformed postfix sequence: {details}.")]
    MalformedPostfix {
        /// What was wrong with the sequence.
        details: String,
    },
    /// A number token whose text is not a decimal literal.
    #[error("Invalid numeric literal '{text}'.")]
    InvalidLiteral {
        /// The token text.
        text: String,
    },
}
