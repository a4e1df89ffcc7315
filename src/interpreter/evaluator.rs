/// Postfix reduction.
///
/// Walks a postfix token sequence with an operand stack and produces the
/// final value of the expression.
pub mod core;

/// Binary operator evaluation.
///
/// Applies one arithmetic operator to two `f64` operands, checking the right
/// operand of `/` and `%` for zero.
pub mod binary;

pub use self::core::{EvalResult, evaluate, evaluate_postfix};
