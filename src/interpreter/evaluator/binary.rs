use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
    util::num::floored_mod,
};

/// Evaluates a single arithmetic operation.
///
/// `+`, `-` and `*` follow IEEE 754. `/` and `%` reject a right operand of
/// exactly zero (either sign). `%` is floored, so the result takes the sign of
/// the divisor.
///
/// # Example
/// ```
/// use postfixer::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary_op};
///
/// assert_eq!(eval_binary_op(BinaryOperator::Mod, -7.0, 3.0).unwrap(), 2.0);
/// assert!(eval_binary_op(BinaryOperator::Div, 1.0, 0.0).is_err());
/// ```
#[allow(clippy::float_cmp)]
pub fn eval_binary_op(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    Ok(match op {
           Add => left + right,
           Sub => left - right,
           Mul => left * right,
           Div | Mod if right == 0.0 => {
               return Err(EvalError::DivisionByZero { operator: op });
           },
           Div => left / right,
           Mod => floored_mod(left, right),
       })
}
