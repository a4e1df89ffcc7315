use crate::interpreter::parser::{DEFAULT_MAX_DEPTH, clamp_depth};

/// Settings for one run of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum parenthesis nesting accepted by the parser.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl Config {
    /// Returns a copy with a different nesting limit, capped at
    /// [`MAX_SUPPORTED_DEPTH`](crate::interpreter::parser::MAX_SUPPORTED_DEPTH).
    ///
    /// ## Example
    /// ```
    /// use postfixer::{config::Config, interpreter::parser::MAX_SUPPORTED_DEPTH};
    ///
    /// let config = Config::default().with_max_depth(4);
    /// assert_eq!(config.max_depth, 4);
    ///
    /// let config = Config::default().with_max_depth(usize::MAX);
    /// assert_eq!(config.max_depth, MAX_SUPPORTED_DEPTH);
    /// ```
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = clamp_depth(max_depth);
        self
    }
}
