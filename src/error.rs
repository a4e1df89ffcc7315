use thiserror::Error;

/// Lexing errors.
///
/// Raised while splitting the source line into tokens, before any grammar
/// rule is checked.
pub mod lex_error;
/// Parsing errors.
///
/// Defines every way a token sequence can violate the grammar: stray or
/// doubled operators, adjacent operands, unbalanced parentheses and nesting
/// beyond the configured limit.
pub mod parse_error;
/// Evaluation errors.
///
/// Arithmetic failures found while reducing a postfix sequence, such as
/// division by zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::{MismatchKind, ParseError, UnexpectedKind};

/// Any failure of the lex, parse and evaluate pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input contained a character outside the language.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens did not form a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression was valid but could not be computed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
