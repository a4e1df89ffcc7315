use crate::interpreter::lexer::{Token, TokenKind};

/// A node of the expression tree built by the parser.
///
/// Numbers are always leaves and operators always have exactly two children,
/// so a tree produced by the parser is balanced for postfix evaluation by
/// construction. Parentheses leave no trace in the tree; they only decide
/// which subtrees end up under which operator.
///
/// `Clone`, `PartialEq` and `Drop` walk the tree with an explicit stack, so a
/// left-deep chain such as `1+1+...+1` is safe however long it is. `Debug`
/// prints the postfix form for the same reason.
pub enum ExpressionNode {
    /// A number leaf.
    Operand {
        /// The `Number` token.
        token: Token,
    },
    /// A binary operation.
    Operator {
        /// The `AdditiveOp` or `MultiplicativeOp` token.
        token: Token,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl ExpressionNode {
    /// Creates a leaf for a number token.
    #[must_use]
    pub const fn operand(token: Token) -> Self {
        Self::Operand { token }
    }

    /// Creates an operator node owning both subtrees.
    ///
    /// ## Example
    /// ```
    /// use postfixer::{
    ///     ast::ExpressionNode,
    ///     interpreter::lexer::{Token, TokenKind},
    /// };
    ///
    /// let number = |text: &str| ExpressionNode::operand(Token::new(TokenKind::Number, text, 0));
    /// let sum = ExpressionNode::operator(Token::new(TokenKind::AdditiveOp, "+", 0),
    ///                                    number("34"),
    ///                                    number("35"));
    ///
    /// assert_eq!(sum.to_string(), "34 35 + ");
    /// ```
    #[must_use]
    pub fn operator(token: Token, left: Self, right: Self) -> Self {
        Self::Operator { token,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// The token stored in this node.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::Operand { token } | Self::Operator { token, .. } => token,
        }
    }

    /// Returns `true` for number leaves.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Operand { .. })
    }

    /// A cheap leaf that owns no heap memory, swapped in while dismantling.
    const fn hollow() -> Self {
        Self::Operand { token: Token { kind:     TokenKind::Number,
                                       text:     String::new(),
                                       position: 0, }, }
    }

    /// Copies this node's token, with hollow leaves in place of its children.
    fn shallow_clone(&self) -> Self {
        match self {
            Self::Operand { token } => Self::operand(token.clone()),
            Self::Operator { token, .. } => Self::operator(token.clone(), Self::hollow(), Self::hollow()),
        }
    }
}

impl Clone for ExpressionNode {
    fn clone(&self) -> Self {
        let mut root = Self::hollow();
        {
            let mut pending = vec![(self, &mut root)];
            while let Some((source, target)) = pending.pop() {
                *target = source.shallow_clone();
                if let (Self::Operator { left, right, .. },
                        Self::Operator { left: new_left,
                                         right: new_right,
                                         .. }) = (source, target)
                {
                    pending.push((&**left, &mut **new_left));
                    pending.push((&**right, &mut **new_right));
                }
            }
        }
        root
    }
}

impl PartialEq for ExpressionNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.token() != b.token() {
                return false;
            }
            match (a, b) {
                (Self::Operand { .. }, Self::Operand { .. }) => {},
                (Self::Operator { left: a_left,
                                  right: a_right,
                                  .. },
                 Self::Operator { left: b_left,
                                  right: b_right,
                                  .. }) => {
                    pending.push((&**a_left, &**b_left));
                    pending.push((&**a_right, &**b_right));
                },
                _ => return false,
            }
        }
        true
    }
}

impl Eq for ExpressionNode {}

// A left-deep chain such as `1+1+...+1` is as deep as it is long, and the
// derived drop glue would recurse once per level.
impl Drop for ExpressionNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Self::Operator { left, right, .. } = self {
            for child in [left, right] {
                if !child.is_leaf() {
                    pending.push(std::mem::replace(&mut **child, Self::hollow()));
                }
            }
        }
        while let Some(mut node) = pending.pop() {
            if let Self::Operator { left, right, .. } = &mut node {
                for child in [left, right] {
                    if !child.is_leaf() {
                        pending.push(std::mem::replace(&mut **child, Self::hollow()));
                    }
                }
            }
        }
    }
}

impl std::fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::interpreter::serializer::to_postfix_string(self))
    }
}

impl std::fmt::Debug for ExpressionNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ExpressionNode")
         .field(&crate::interpreter::serializer::to_postfix_string(self))
         .finish()
    }
}

/// The five arithmetic operators of the grammar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floored modulo (`%`)
    Mod,
}

/// Maps an operator token to its binary operator.
///
/// Returns `None` for numbers, parentheses, and for operator tokens whose text
/// does not belong to their precedence level.
///
/// # Example
/// ```
/// use postfixer::{
///     ast::{BinaryOperator, token_to_binary_operator},
///     interpreter::lexer::{Token, TokenKind},
/// };
///
/// let plus = Token::new(TokenKind::AdditiveOp, "+", 0);
/// assert_eq!(token_to_binary_operator(&plus), Some(BinaryOperator::Add));
///
/// let bogus = Token::new(TokenKind::AdditiveOp, "*", 0);
/// assert_eq!(token_to_binary_operator(&bogus), None);
/// ```
#[must_use]
pub fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match (token.kind, token.text.as_str()) {
        (TokenKind::AdditiveOp, "+") => Some(BinaryOperator::Add),
        (TokenKind::AdditiveOp, "-") => Some(BinaryOperator::Sub),
        (TokenKind::MultiplicativeOp, "*") => Some(BinaryOperator::Mul),
        (TokenKind::MultiplicativeOp, "/") => Some(BinaryOperator::Div),
        (TokenKind::MultiplicativeOp, "%") => Some(BinaryOperator::Mod),
        _ => None,
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}
