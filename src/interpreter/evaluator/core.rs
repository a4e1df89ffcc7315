use crate::{
    ast::{ExpressionNode, token_to_binary_operator},
    error::EvalError,
    interpreter::{
        evaluator::binary::eval_binary_op,
        lexer::{Token, TokenKind},
        serializer::postorder,
    },
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree.
///
/// The tree is first flattened into postfix order, then reduced by
/// [`evaluate_postfix`].
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] when the right operand of `/` or
/// `%` is zero.
///
/// # Examples
/// ```
/// use postfixer::{
///     error::EvalError,
///     interpreter::{evaluator::evaluate, lexer::lex, parser::parse},
/// };
///
/// let tree = parse(&lex("10 - 3 - 2").unwrap()).unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), 5.0);
///
/// let tree = parse(&lex("5 % 0").unwrap()).unwrap();
/// assert!(matches!(evaluate(&tree), Err(EvalError::DivisionByZero { .. })));
/// ```
pub fn evaluate(root: &ExpressionNode) -> EvalResult<f64> {
    evaluate_postfix(postorder(root))
}

/// Reduces a postfix token sequence with an operand stack.
///
/// Numbers push their value. An operator pops the right operand, then the
/// left one, and pushes the result. Exactly one value must remain at the end.
///
/// # Errors
/// - [`EvalError::DivisionByZero`] for `/` or `%` by zero.
/// - [`EvalError::MalformedPostfix`] when an operator lacks operands, a
///   parenthesis appears, or more than one value is left.
/// - [`EvalError::InvalidLiteral`] for a number token that is not decimal.
///
/// # Example
/// ```
/// use postfixer::interpreter::{
///     evaluator::evaluate_postfix,
///     lexer::{Token, TokenKind},
/// };
///
/// let tokens = [Token::new(TokenKind::Number, "7", 0),
///               Token::new(TokenKind::Number, "2", 0),
///               Token::new(TokenKind::MultiplicativeOp, "%", 0)];
/// assert_eq!(evaluate_postfix(&tokens).unwrap(), 1.0);
/// ```
pub fn evaluate_postfix<'a, I>(tokens: I) -> EvalResult<f64>
    where I: IntoIterator<Item = &'a Token>
{
    let mut operands: Vec<f64> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Number => operands.push(parse_literal(token)?),
            TokenKind::AdditiveOp | TokenKind::MultiplicativeOp => {
                let op = token_to_binary_operator(token).ok_or_else(|| {
                             malformed(format!("'{}' is not a known operator", token.text))
                         })?;
                let right = operands.pop().ok_or_else(|| missing_operand(token))?;
                let left = operands.pop().ok_or_else(|| missing_operand(token))?;
                operands.push(eval_binary_op(op, left, right)?);
            },
            TokenKind::OpenParen | TokenKind::CloseParen => {
                return Err(malformed(format!("parenthesis '{}' cannot appear in postfix",
                                             token.text)));
            },
        }
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        [] => Err(malformed("no operands".to_string())),
        rest => Err(malformed(format!("{} operands left without an operator", rest.len()))),
    }
}

/// Converts a number token to `f64`. Very long literals lose precision.
fn parse_literal(token: &Token) -> EvalResult<f64> {
    if token.text.is_empty() || !token.text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EvalError::InvalidLiteral { text: token.text.clone() });
    }
    token.text
         .parse()
         .map_err(|_| EvalError::InvalidLiteral { text: token.text.clone() })
}

fn missing_operand(token: &Token) -> EvalError {
    malformed(format!("operator '{}' is missing an operand", token.text))
}

const fn malformed(details: String) -> EvalError {
    EvalError::MalformedPostfix { details }
}
