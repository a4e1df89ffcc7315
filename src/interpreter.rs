/// The evaluator module reduces an expression tree to a number.
///
/// The evaluator flattens the tree into postfix order with the serializer and
/// reduces the sequence with an operand stack.
///
/// # Responsibilities
/// - Applies the five arithmetic operators to `f64` operands.
/// - Reports division and modulo by zero.
/// - Rejects malformed postfix sequences without panicking.
pub mod evaluator;
/// The lexer module tokenizes a source line for further parsing.
///
/// The lexer reads the raw text and produces a flat list of numbers, operators
/// and parentheses. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Skips whitespace and groups digit runs into number tokens.
/// - Records the byte offset of every token for diagnostics.
/// - Reports characters that are not part of the language.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// A recursive-descent parser with one function per grammar rule. Precedence
/// comes from the nesting of the rules, associativity from folding left to
/// right.
///
/// # Responsibilities
/// - Converts tokens into an owned [`crate::ast::ExpressionNode`] tree.
/// - Rejects malformed input with a specific [`crate::error::ParseError`].
/// - Bounds parenthesis nesting so deep input fails instead of crashing.
pub mod parser;
/// The serializer module renders a tree as a token sequence or string.
///
/// Postorder gives postfix notation, inorder gives the flat infix form used
/// for debugging.
pub mod serializer;
