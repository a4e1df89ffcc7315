use crate::{
    ast::ExpressionNode,
    error::{MismatchKind, ParseError, UnexpectedKind},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_expression,
            core::{ParseCursor, ParseResult},
        },
    },
};

/// Parses a number or a parenthesized expression.
///
/// The rule is: `factor := Number | "(" expression ")"`
///
/// A group returns the root of its inner expression; parentheses add no node.
/// After the factor is read, the token that follows is checked: operands may
/// not touch each other, so `34 35`, `4 (5)` and `(5) 4` are rejected here.
///
/// # Errors
/// - `UnexpectedToken` when the lookahead cannot start a factor or the
///   factor is directly followed by another operand.
/// - `MismatchedParen` when a group is never closed.
/// - `NestingTooDeep` when the group exceeds the cursor's limit.
///
/// # Example
/// ```
/// use postfixer::{
///     error::{ParseError, UnexpectedKind},
///     interpreter::{
///         lexer::lex,
///         parser::{ParseCursor, parse_factor},
///     },
/// };
///
/// let tokens = lex("((5))").unwrap();
/// let tree = parse_factor(&mut ParseCursor::new(&tokens)).unwrap();
/// assert_eq!(tree.to_string(), "5 ");
///
/// let tokens = lex("4 (5 + 3)").unwrap();
/// let error = parse_factor(&mut ParseCursor::new(&tokens)).unwrap_err();
/// assert_eq!(error.unexpected_kind(),
///            Some(UnexpectedKind::ParenthesesMultiplicationNotSupported));
/// ```
pub fn parse_factor(cursor: &mut ParseCursor<'_>) -> ParseResult<ExpressionNode> {
    let node = match cursor.peek() {
        Some(token) if token.kind == TokenKind::Number => {
            cursor.advance();
            ExpressionNode::operand(token.clone())
        },
        Some(token) if token.kind == TokenKind::OpenParen => parse_group(cursor, token)?,
        Some(token) => return Err(unexpected_operand(cursor.previous(), token)),
        None => return Err(cursor.end_of_input()),
    };

    check_adjacent_operand(cursor)?;
    Ok(node)
}

/// Parses `"(" expression ")"` with the cursor at the `(`.
fn parse_group(cursor: &mut ParseCursor<'_>, open: &Token) -> ParseResult<ExpressionNode> {
    cursor.enter_group()?;
    cursor.advance();

    let inner = parse_expression(cursor)?;

    if cursor.advance_if(TokenKind::CloseParen).is_none() {
        return Err(ParseError::MismatchedParen { kind:     MismatchKind::UnclosedOpen,
                                                 position: open.position, });
    }
    cursor.leave_group();

    Ok(inner)
}

/// Classifies a token that showed up where an operand was required.
fn unexpected_operand(previous: Option<&Token>, found: &Token) -> ParseError {
    let kind = match found.kind {
        TokenKind::CloseParen => UnexpectedKind::MissingOperand,
        _ if previous.is_some_and(|p| p.kind.is_operator()) => {
            UnexpectedKind::ConsecutiveOperators
        },
        _ => UnexpectedKind::StrayOperator,
    };

    ParseError::UnexpectedToken { kind,
                                  token: Some(found.text.clone()),
                                  position: found.position }
}

/// Rejects an operand directly after the one just parsed.
fn check_adjacent_operand(cursor: &ParseCursor<'_>) -> ParseResult<()> {
    let (Some(previous), Some(next)) = (cursor.previous(), cursor.peek()) else {
        return Ok(());
    };

    let kind = match (previous.kind, next.kind) {
        (TokenKind::Number, TokenKind::Number) => UnexpectedKind::ConsecutiveNumbers,
        (_, TokenKind::OpenParen) | (TokenKind::CloseParen, TokenKind::Number) => {
            UnexpectedKind::ParenthesesMultiplicationNotSupported
        },
        _ => return Ok(()),
    };

    Err(ParseError::UnexpectedToken { kind,
                                      token: Some(next.text.clone()),
                                      position: next.position })
}
