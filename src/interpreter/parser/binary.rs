use crate::{
    ast::ExpressionNode,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseCursor, ParseResult},
            factor::parse_factor,
        },
    },
};

/// Parses addition and subtraction.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// Terms are folded left to right, so `10 - 3 - 2` becomes
/// `(10 - 3) - 2`.
///
/// # Example
/// ```
/// use postfixer::interpreter::{
///     lexer::lex,
///     parser::{ParseCursor, parse_expression},
/// };
///
/// let tokens = lex("10 - 3 - 2").unwrap();
/// let mut cursor = ParseCursor::new(&tokens);
/// let tree = parse_expression(&mut cursor).unwrap();
///
/// assert_eq!(tree.to_string(), "10 3 - 2 - ");
/// assert!(cursor.is_at_end());
/// ```
pub fn parse_expression(cursor: &mut ParseCursor<'_>) -> ParseResult<ExpressionNode> {
    let mut left = parse_term(cursor)?;
    while let Some(token) = cursor.advance_if(TokenKind::AdditiveOp) {
        let right = parse_term(cursor)?;
        left = ExpressionNode::operator(token.clone(), left, right);
    }
    Ok(left)
}

/// Parses multiplication, division and modulo.
///
/// The rule is: `term := factor (("*" | "/" | "%") factor)*`
///
/// Because `expression` only looks for `+` and `-` after a whole term has
/// been read, these operators bind tighter.
///
/// Stops at the first token that is not a multiplicative operator and leaves
/// it for the caller.
pub fn parse_term(cursor: &mut ParseCursor<'_>) -> ParseResult<ExpressionNode> {
    let mut left = parse_factor(cursor)?;
    while let Some(token) = cursor.advance_if(TokenKind::MultiplicativeOp) {
        let right = parse_factor(cursor)?;
        left = ExpressionNode::operator(token.clone(), left, right);
    }
    Ok(left)
}
