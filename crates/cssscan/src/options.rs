//! Tokenizer configuration.
//!
//! With the `serde` feature both structs deserialize from kebab-case keys,
//! and missing keys take their defaults:
//!
//! ```text
//! { "ignore-errors": true }
//! ```

/// Options fixed for the lifetime of a [`Tokenizer`](crate::Tokenizer).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct TokenizerOptions {
    /// Recover from unclosed strings, comments and bracket groups by
    /// emitting a token that runs to end of input instead of failing.
    pub ignore_errors: bool,
}

impl TokenizerOptions {
    #[must_use]
    pub fn with_ignore_errors(mut self, ignore_errors: bool) -> Self {
        self.ignore_errors = ignore_errors;
        self
    }
}

/// Options for a single [`Tokenizer::next_token_with`](crate::Tokenizer::next_token_with) call.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct NextTokenOptions {
    /// Recover from an unclosed construct for this call only.
    pub ignore_unclosed: bool,
}

impl NextTokenOptions {
    #[must_use]
    pub fn with_ignore_unclosed(mut self, ignore_unclosed: bool) -> Self {
        self.ignore_unclosed = ignore_unclosed;
        self
    }
}
