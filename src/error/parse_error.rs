use thiserror::Error;

/// The situation in which an unexpected token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnexpectedKind {
    /// An operator with no left operand, as in `+ 4` or `( * 2 )`.
    StrayOperator,
    /// An operator right after another one, as in `4 + * 5`.
    ConsecutiveOperators,
    /// A number right after another one, as in `34 35 +`.
    ConsecutiveNumbers,
    /// A number touching a parenthesized group, as in `4 (5 + 3)`.
    ParenthesesMultiplicationNotSupported,
    /// A `)` where an operand was required, as in `()` or `4 + )`.
    MissingOperand,
    /// The input ended where an operand was required.
    UnexpectedEndOfInput,
}

impl std::fmt::Display for UnexpectedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::StrayOperator => "Stray operator found.",
            Self::ConsecutiveOperators => "Cannot have two consecutive operators.",
            Self::ConsecutiveNumbers => "Cannot have consecutive numbers.",
            Self::ParenthesesMultiplicationNotSupported => {
                "Parentheses multiplication not supported."
            },
            Self::MissingOperand => "Expected a number or '(' but found ')'.",
            Self::UnexpectedEndOfInput => "Unexpected end of input.",
        };
        f.write_str(message)
    }
}

/// Which side of a parenthesis pair is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MismatchKind {
    /// A `(` was never closed.
    UnclosedOpen,
    /// A `)` has no matching `(`.
    UnmatchedClose,
}

impl std::fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnclosedOpen => f.write_str("'(' is never closed"),
            Self::UnmatchedClose => f.write_str("')' has no matching '('"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token where the grammar does not allow it.
    #[error("Error at position {position}: {kind}")]
    UnexpectedToken {
        /// What went wrong.
        kind:     UnexpectedKind,
        /// Text of the offending token, `None` at end of input.
        token:    Option<String>,
        /// Byte offset in the source.
        position: usize,
    },
    /// Parentheses do not pair up.
    #[error("Error at position {position}: Mismatched parentheses, {kind}.")]
    MismatchedParen {
        /// Which side is missing.
        kind:     MismatchKind,
        /// Byte offset of the unpaired parenthesis.
        position: usize,
    },
    /// Parentheses are nested deeper than the parser allows.
    #[error("Parentheses are nested more than {limit} levels deep.")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
}

impl ParseError {
    /// The unexpected-token sub-case, if this is one.
    #[must_use]
    pub const fn unexpected_kind(&self) -> Option<UnexpectedKind> {
        match self {
            Self::UnexpectedToken { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
