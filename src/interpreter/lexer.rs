use logos::Logos;

use crate::error::LexError;

/// The grammatical category of a token.
///
/// The lexer is generated by `logos`; each variant lists the exact text it
/// accepts. Whitespace is skipped and never reaches the parser.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\n\r\f\v]+")]
pub enum TokenKind {
    /// A maximal run of ASCII digits, such as `420`.
    #[regex(r"[0-9]+")]
    Number,
    /// `+` or `-`
    #[token("+")]
    #[token("-")]
    AdditiveOp,
    /// `*`, `/` or `%`
    #[token("*")]
    #[token("/")]
    #[token("%")]
    MultiplicativeOp,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
}

impl TokenKind {
    /// Returns `true` for both operator precedence levels.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::AdditiveOp | Self::MultiplicativeOp)
    }
}

/// A lexical token: its kind plus the literal text it was read from.
///
/// `position` is the byte offset of the token in the source line. It only
/// serves diagnostics, so two tokens compare equal when kind and text match.
#[derive(Debug, Clone)]
pub struct Token {
    /// The token category.
    pub kind:     TokenKind,
    /// Digits for numbers, the single character otherwise.
    pub text:     String,
    /// Byte offset in the source.
    pub position: usize,
}

impl Token {
    /// Creates a token.
    ///
    /// ## Example
    /// ```
    /// use postfixer::interpreter::lexer::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Number, "42", 3);
    /// assert_eq!(token.text, "42");
    /// assert_eq!(token, Token::new(TokenKind::Number, "42", 0));
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }

    /// Byte offset just past the end of this token.
    #[must_use]
    pub fn end(&self) -> usize {
        self.position + self.text.len()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Token {}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Splits a source line into tokens.
///
/// The lexer only classifies characters. It accepts `"+*"` or `"(("`
/// without complaint; rejecting those is the parser's job.
///
/// # Errors
/// Returns [`LexError::InvalidCharacter`] for the first character that is not
/// a digit, whitespace, an operator or a parenthesis.
///
/// # Examples
/// ```
/// use postfixer::interpreter::lexer::{TokenKind, lex};
///
/// let tokens = lex("1-(5*4)").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number,
///             TokenKind::AdditiveOp,
///             TokenKind::OpenParen,
///             TokenKind::Number,
///             TokenKind::MultiplicativeOp,
///             TokenKind::Number,
///             TokenKind::CloseParen]);
///
/// assert!(lex("2 ^ 3").is_err());
/// ```
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(kind) = kind {
            tokens.push(Token::new(kind, lexer.slice(), position));
        } else {
            let character = source[position..].chars().next().unwrap_or_default();
            return Err(LexError::InvalidCharacter { character, position });
        }
    }

    log::trace!("lexed {} tokens from {source:?}", tokens.len());
    Ok(tokens)
}
