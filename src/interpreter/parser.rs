/// Parser entry points and the token cursor.
///
/// Owns the `ParseCursor` that every grammar rule advances, the nesting guard
/// and the top-level check that no tokens are left over.
pub mod core;

/// The two binary precedence levels.
///
/// `expression` folds additive operators over terms, `term` folds
/// multiplicative operators over factors. Both are left-associative.
pub mod binary;

/// Numbers, parenthesized groups and the checks on what may follow them.
pub mod factor;

pub use binary::{parse_expression, parse_term};
pub use self::core::{
    DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH, ParseCursor, ParseResult, clamp_depth, parse,
    parse_with_limit,
};
pub use factor::parse_factor;
