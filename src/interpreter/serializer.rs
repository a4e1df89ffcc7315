use crate::{ast::ExpressionNode, interpreter::lexer::Token};

/// Order in which [`traverse`] visits an operator relative to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Left, self, right.
    Inorder,
    /// Left, right, self.
    Postorder,
}

enum Visit<'a> {
    Node(&'a ExpressionNode),
    Emit(&'a Token),
}

/// Collects the tokens of a tree in the given order.
///
/// Uses an explicit work stack instead of recursion so that long left-deep
/// chains such as `1+1+...+1` are safe.
#[must_use]
pub fn traverse(root: &ExpressionNode, order: TraversalOrder) -> Vec<&Token> {
    let mut output = Vec::new();
    let mut stack = vec![Visit::Node(root)];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Emit(token) => output.push(token),
            Visit::Node(ExpressionNode::Operand { token }) => output.push(token),
            Visit::Node(ExpressionNode::Operator { token, left, right }) => match order {
                TraversalOrder::Postorder => {
                    stack.push(Visit::Emit(token));
                    stack.push(Visit::Node(&**right));
                    stack.push(Visit::Node(&**left));
                },
                TraversalOrder::Inorder => {
                    stack.push(Visit::Node(&**right));
                    stack.push(Visit::Emit(token));
                    stack.push(Visit::Node(&**left));
                },
            },
        }
    }

    output
}

/// The tokens of a tree in postfix order.
#[must_use]
pub fn postorder(root: &ExpressionNode) -> Vec<&Token> {
    traverse(root, TraversalOrder::Postorder)
}

/// The tokens of a tree in infix order, without parentheses.
#[must_use]
pub fn inorder(root: &ExpressionNode) -> Vec<&Token> {
    traverse(root, TraversalOrder::Inorder)
}

/// Renders the tree in postfix notation.
///
/// Every token is followed by a single space, the last one included.
///
/// # Example
/// ```
/// use postfixer::interpreter::{lexer::lex, parser::parse, serializer::to_postfix_string};
///
/// let tree = parse(&lex("1 * (2 + 3)").unwrap()).unwrap();
/// assert_eq!(to_postfix_string(&tree), "1 2 3 + * ");
/// ```
#[must_use]
pub fn to_postfix_string(root: &ExpressionNode) -> String {
    join(&postorder(root))
}

/// Renders the tree in infix order for debugging.
///
/// Grouping is not shown, so `1 * (2 + 3)` prints as `1 * 2 + 3 `.
#[must_use]
pub fn to_infix_string(root: &ExpressionNode) -> String {
    join(&inorder(root))
}

fn join(tokens: &[&Token]) -> String {
    tokens.iter().fold(String::new(), |mut out, token| {
                     out.push_str(&token.text);
                     out.push(' ');
                     out
                 })
}
