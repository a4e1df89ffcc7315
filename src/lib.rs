//! # postfixer
//!
//! postfixer reads an arithmetic expression in infix notation, checks it
//! against a small grammar, builds an expression tree, renders the tree in
//! postfix notation and evaluates it.
//!
//! ```text
//! expression := term { ("+" | "-") term }
//! term       := factor { ("*" | "/" | "%") factor }
//! factor     := Number | "(" expression ")"
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Config,
    error::{Error, EvalError},
    interpreter::{
        evaluator::evaluate,
        lexer::lex,
        parser::parse_with_limit,
        serializer::{to_infix_string, to_postfix_string},
    },
};

/// Defines the expression tree.
///
/// This module declares the `ExpressionNode` sum type produced by the parser
/// and the `BinaryOperator` enum the evaluator dispatches on. Number leaves
/// have no children and operator nodes have exactly two, by construction.
pub mod ast;
/// Settings shared by the library entry points and the command line.
pub mod config;
/// Provides error types for every phase of the pipeline.
///
/// This module defines the errors raised while lexing, parsing or evaluating,
/// and a top-level `Error` that wraps all three so callers can use `?` across
/// phases.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Attaches byte offsets and the offending text where available.
/// - Produces messages meant to be shown to the user as is.
pub mod error;
/// Orchestrates lexing, parsing, serializing and evaluation.
///
/// # Responsibilities
/// - Coordinates the four pipeline stages.
/// - Exposes each stage on its own so it can be driven and tested
///   separately.
pub mod interpreter;
/// The interactive menu and evaluation loop.
///
/// Reads choices and expressions from any `BufRead` and writes prompts and
/// results to any `Write`, so the same loop serves the terminal and tests.
pub mod repl;
/// General numeric helpers.
pub mod util;

/// The outcome of running one line through the pipeline.
///
/// The postfix form is available even when evaluation fails, because the
/// expression itself was valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Postfix rendering, each token followed by a space.
    pub postfix: String,
    /// Unparenthesized inorder rendering.
    pub infix:   String,
    /// The numeric result, or why it could not be computed.
    pub value:   Result<f64, EvalError>,
}

/// Lexes, parses, serializes and evaluates one line of input.
///
/// # Errors
/// Returns an error if lexing or parsing fails. Evaluation failures such as
/// division by zero are reported in [`Evaluation::value`] instead.
///
/// # Examples
/// ```
/// use postfixer::{config::Config, get_result};
///
/// let evaluation = get_result("34 + 35 * 3", &Config::default()).unwrap();
/// assert_eq!(evaluation.postfix, "34 35 3 * + ");
/// assert_eq!(evaluation.value, Ok(139.0));
///
/// // Valid syntax, but the value is undefined.
/// let evaluation = get_result("5 / 0", &Config::default()).unwrap();
/// assert_eq!(evaluation.postfix, "5 0 / ");
/// assert!(evaluation.value.is_err());
///
/// // Implicit multiplication is rejected.
/// assert!(get_result("4 (5 + 3)", &Config::default()).is_err());
/// ```
pub fn get_result(source: &str, config: &Config) -> Result<Evaluation, Error> {
    let tree = lex(source).map_err(Error::from)
                          .and_then(|tokens| {
                              parse_with_limit(&tokens, config.max_depth).map_err(Error::from)
                          })
                          .inspect_err(|e| log::debug!("rejected {source:?}: {e}"))?;

    let evaluation = Evaluation { postfix: to_postfix_string(&tree),
                                  infix:   to_infix_string(&tree),
                                  value:   evaluate(&tree), };
    log::trace!("{source:?} evaluated to {:?}", evaluation.value);

    Ok(evaluation)
}

/// Evaluates one line of input straight to a number.
///
/// # Errors
/// Returns the first lex, parse or evaluation error.
///
/// # Example
/// ```
/// use postfixer::evaluate_str;
///
/// assert_eq!(evaluate_str("1 * (2 + 3)").unwrap(), 5.0);
/// assert!(evaluate_str("5 % 0").is_err());
/// ```
pub fn evaluate_str(source: &str) -> Result<f64, Error> {
    let tokens = lex(source)?;
    let tree = parse_with_limit(&tokens, Config::default().max_depth)?;
    Ok(evaluate(&tree)?)
}
