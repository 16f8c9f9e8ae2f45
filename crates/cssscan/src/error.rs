//! Tokenizer errors.
//!
//! Only three things can go wrong while scanning: a string, comment or
//! bracket group that is still open at end of input. Each is reported at its
//! opening delimiter. Building an [`Input`](crate::Input) can separately
//! fail with [`InputTooLarge`].

use thiserror::Error;

use crate::token::Position;

/// What was left open.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum TokenizeErrorKind {
    #[error("Unclosed string")]
    UnclosedString,
    #[error("Unclosed comment")]
    UnclosedComment,
    #[error("Unclosed bracket")]
    UnclosedBracket,
}

impl TokenizeErrorKind {
    /// The bare message, without location.
    pub fn message(self) -> &'static str {
        match self {
            TokenizeErrorKind::UnclosedString => "Unclosed string",
            TokenizeErrorKind::UnclosedComment => "Unclosed comment",
            TokenizeErrorKind::UnclosedBracket => "Unclosed bracket",
        }
    }
}

/// A fatal tokenizer error, positioned at the opening delimiter.
///
/// Displays as `<input name>:<line>:<column>: <message>`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{input_name}:{position}: {kind}")]
pub struct TokenizeError {
    pub kind: TokenizeErrorKind,
    /// Byte offset of the opening delimiter.
    pub offset: u32,
    pub position: Position,
    pub input_name: String,
}

impl TokenizeError {
    pub fn new(
        kind: TokenizeErrorKind,
        offset: u32,
        position: Position,
        input_name: impl Into<String>,
    ) -> Self {
        TokenizeError {
            kind,
            offset,
            position,
            input_name: input_name.into(),
        }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

/// The source is too long for `u32` offsets.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("input is {len} bytes; at most {max} are supported")]
pub struct InputTooLarge {
    pub len: usize,
    pub max: usize,
}
