use crate::{
    ast::ExpressionNode,
    error::{MismatchKind, ParseError, UnexpectedKind},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::binary::parse_expression,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on how deeply parentheses may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Hard ceiling on the nesting limit.
///
/// Each open group costs three rule frames, so larger limits could exhaust an
/// 8 MiB main-thread stack before [`ParseError::NestingTooDeep`] is raised.
/// Requested limits above this value are clamped to it.
pub const MAX_SUPPORTED_DEPTH: usize = 1024;

/// Read position over a token slice, shared by all grammar rules.
///
/// A cursor lives for a single parse. Besides the index it tracks how many
/// parenthesized groups are currently open so that hostile input fails with
/// [`ParseError::NestingTooDeep`] instead of exhausting the stack.
#[derive(Debug, Clone)]
pub struct ParseCursor<'a> {
    tokens:    &'a [Token],
    index:     usize,
    depth:     usize,
    max_depth: usize,
}

impl<'a> ParseCursor<'a> {
    /// Creates a cursor at the first token with the default nesting limit.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self::with_limit(tokens, DEFAULT_MAX_DEPTH)
    }

    /// Creates a cursor at the first token with a custom nesting limit,
    /// clamped to [`MAX_SUPPORTED_DEPTH`].
    #[must_use]
    pub const fn with_limit(tokens: &'a [Token], max_depth: usize) -> Self {
        Self { tokens,
               index: 0,
               depth: 0,
               max_depth: clamp_depth(max_depth) }
    }

    /// The nesting limit this cursor enforces.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The next unconsumed token.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    /// The most recently consumed token.
    #[must_use]
    pub fn previous(&self) -> Option<&'a Token> {
        self.index.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.index)?;
        self.index += 1;
        Some(token)
    }

    /// Consumes the next token only if it has the given kind.
    pub fn advance_if(&mut self, kind: TokenKind) -> Option<&'a Token> {
        match self.peek() {
            Some(token) if token.kind == kind => self.advance(),
            _ => None,
        }
    }

    /// Number of tokens consumed so far.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` once every token has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// Byte offset used when an error is reported at end of input.
    pub(in crate::interpreter::parser) fn end_position(&self) -> usize {
        self.tokens.last().map_or(0, Token::end)
    }

    pub(in crate::interpreter::parser) fn end_of_input(&self) -> ParseError {
        ParseError::UnexpectedToken { kind:     UnexpectedKind::UnexpectedEndOfInput,
                                      token:    None,
                                      position: self.end_position(), }
    }

    pub(in crate::interpreter::parser) fn enter_group(&mut self) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth });
        }
        self.depth += 1;
        Ok(())
    }

    pub(in crate::interpreter::parser) fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Caps a requested nesting limit at [`MAX_SUPPORTED_DEPTH`].
#[must_use]
pub const fn clamp_depth(max_depth: usize) -> usize {
    if max_depth > MAX_SUPPORTED_DEPTH { MAX_SUPPORTED_DEPTH } else { max_depth }
}

/// Parses a complete token sequence into an expression tree.
///
/// Grammar:
/// ```text
/// expression := term { AdditiveOp term }
/// term       := factor { MultiplicativeOp factor }
/// factor     := Number | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedToken` for stray or consecutive operators, adjacent operands,
///   implicit multiplication and input that ends mid-expression.
/// - `MismatchedParen` for an unclosed `(` or a `)` without partner.
/// - `NestingTooDeep` beyond [`DEFAULT_MAX_DEPTH`] levels of parentheses.
///
/// # Examples
/// ```
/// use postfixer::interpreter::{lexer::lex, parser::parse};
///
/// let tokens = lex("34 + 35 * 3").unwrap();
/// let tree = parse(&tokens).unwrap();
/// assert_eq!(tree.to_string(), "34 35 3 * + ");
///
/// let tokens = lex("4 + 5 * 3 + 4 )").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<ExpressionNode> {
    parse_with_limit(tokens, DEFAULT_MAX_DEPTH)
}

/// Same as [`parse`], with an explicit parenthesis nesting limit.
///
/// Limits above [`MAX_SUPPORTED_DEPTH`] are clamped to it, so the error for
/// overly deep input reports the clamped value.
pub fn parse_with_limit(tokens: &[Token], max_depth: usize) -> ParseResult<ExpressionNode> {
    let mut cursor = ParseCursor::with_limit(tokens, max_depth);
    let root = parse_expression(&mut cursor)?;

    // Every other leftover is rejected by the rules themselves, so only a
    // `)` can remain here.
    if let Some(token) = cursor.peek() {
        return Err(ParseError::MismatchedParen { kind:     MismatchKind::UnmatchedClose,
                                                 position: token.position, });
    }

    log::trace!("parsed {} tokens into {root}", tokens.len());
    Ok(root)
}
