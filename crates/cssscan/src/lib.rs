//! Lossless tokenizer for CSS-like sources.
//!
//! Splits a stylesheet into whitespace, words, strings, comments, at-words,
//! punctuation, and raw bracket groups such as `url(...)`. Tokens are
//! contiguous and cover every byte, so concatenating their text reproduces
//! the input exactly. Nothing is validated beyond unclosed strings, comments
//! and bracket groups.
//!
//! ```
//! use cssscan::{tokenize, Input, TokenKind, TokenizerOptions};
//!
//! let input = Input::new("a{color:red}");
//! let tokens = tokenize(&input, TokenizerOptions::default()).unwrap();
//!
//! let kinds: Vec<_> = tokens.iter().map(|token| token.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Word,
//!         TokenKind::OpenCurly,
//!         TokenKind::Word,
//!         TokenKind::Colon,
//!         TokenKind::Word,
//!         TokenKind::CloseCurly,
//!     ]
//! );
//! ```
//!
//! Scanning itself lives in `cssscan_core`; this crate adds positions,
//! errors, pushback and options.

mod error;
mod input;
mod options;
mod token;
mod tokenizer;

pub use error::{InputTooLarge, TokenizeError, TokenizeErrorKind};
pub use input::{Input, DEFAULT_INPUT_NAME};
pub use options::{NextTokenOptions, TokenizerOptions};
pub use token::{Position, Span, Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer};
