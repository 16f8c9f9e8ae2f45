//! Pull-based token stream over an [`Input`].
//!
//! The tokenizer drives a [`RawScanner`] and turns its `(RawTag, len)`
//! pairs into positioned [`Token`]s:
//!
//! ```text
//! Input → RawScanner → (RawTag, len) → convert → Token | TokenizeError
//! ```
//!
//! A parser pulls with [`Tokenizer::next_token`], looks ahead by pushing a
//! single token back with [`Tokenizer::back`], and stops on
//! [`Tokenizer::end_of_file`].

use std::iter::FusedIterator;

use cssscan_core::{LineColHint, RawScanner, RawTag, RawToken};
use tracing::{debug, trace};

use crate::error::{TokenizeError, TokenizeErrorKind};
use crate::input::Input;
use crate::options::{NextTokenOptions, TokenizerOptions};
use crate::token::{Span, Token, TokenKind};

/// Result of converting one raw tag.
enum Converted {
    Token(TokenKind),
    /// An unterminated construct: the kind to emit when recovering, and the
    /// error to report otherwise.
    Unclosed(TokenKind, TokenizeErrorKind),
    Eof,
}

fn convert(tag: RawTag) -> Converted {
    match tag {
        RawTag::Whitespace => Converted::Token(TokenKind::Space),
        RawTag::Word => Converted::Token(TokenKind::Word),
        RawTag::String => Converted::Token(TokenKind::String),
        RawTag::Comment => Converted::Token(TokenKind::Comment),
        RawTag::Brackets => Converted::Token(TokenKind::Brackets),
        RawTag::AtWord => Converted::Token(TokenKind::AtWord),
        RawTag::LeftParen => Converted::Token(TokenKind::OpenParen),
        RawTag::RightParen => Converted::Token(TokenKind::CloseParen),
        RawTag::LeftBracket => Converted::Token(TokenKind::OpenSquare),
        RawTag::RightBracket => Converted::Token(TokenKind::CloseSquare),
        RawTag::LeftBrace => Converted::Token(TokenKind::OpenCurly),
        RawTag::RightBrace => Converted::Token(TokenKind::CloseCurly),
        RawTag::Colon => Converted::Token(TokenKind::Colon),
        RawTag::Semicolon => Converted::Token(TokenKind::Semicolon),
        RawTag::UnterminatedString => {
            Converted::Unclosed(TokenKind::String, TokenizeErrorKind::UnclosedString)
        }
        RawTag::UnterminatedComment => {
            Converted::Unclosed(TokenKind::Comment, TokenizeErrorKind::UnclosedComment)
        }
        RawTag::UnterminatedBrackets => {
            Converted::Unclosed(TokenKind::Brackets, TokenizeErrorKind::UnclosedBracket)
        }
        RawTag::Eof => Converted::Eof,
    }
}

/// Lossless CSS tokenizer.
///
/// # Example
///
/// ```
/// use cssscan::{Input, TokenKind, Tokenizer, TokenizerOptions};
///
/// let input = Input::new("a { color: red }");
/// let mut tokenizer = Tokenizer::new(&input, TokenizerOptions::default());
///
/// let first = tokenizer.next_token().unwrap().unwrap();
/// assert_eq!(first.kind, TokenKind::Word);
/// assert_eq!(input.slice(&first), "a");
///
/// tokenizer.back(first);
/// assert_eq!(tokenizer.next_token().unwrap(), Some(first));
/// ```
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    input: &'a Input<'a>,
    scanner: RawScanner<'a>,
    options: TokenizerOptions,
    /// Token handed back by the consumer, replayed before scanning resumes.
    returned: Option<Token>,
    /// Set after a fatal error; the stream is exhausted from then on.
    failed: bool,
    /// Last resolved position; token offsets only grow.
    hint: LineColHint,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a Input<'a>, options: TokenizerOptions) -> Self {
        Tokenizer {
            input,
            scanner: RawScanner::new(input.buffer().cursor()),
            options,
            returned: None,
            failed: false,
            hint: LineColHint::default(),
        }
    }

    pub fn input(&self) -> &'a Input<'a> {
        self.input
    }

    pub fn options(&self) -> TokenizerOptions {
        self.options
    }

    /// Byte offset where the next scan starts. A pending pushback is not
    /// taken into account.
    pub fn position(&self) -> u32 {
        self.scanner.pos()
    }

    /// `true` when no token remains: the input is consumed (or a fatal
    /// error ended the stream) and nothing was pushed back.
    pub fn end_of_file(&self) -> bool {
        self.returned.is_none() && (self.failed || self.scanner.is_eof())
    }

    /// Return a token to the stream; the next call to
    /// [`next_token`](Self::next_token) yields it again.
    ///
    /// # Panics
    ///
    /// Panics if a token is already pushed back. Only one token of
    /// lookahead is supported.
    pub fn back(&mut self, token: Token) {
        assert!(
            self.returned.is_none(),
            "Tokenizer::back called twice without an intervening next_token"
        );
        trace!(
            kind = %token.kind,
            start = token.span.start,
            end = token.span.end,
            "back"
        );
        self.returned = Some(token);
    }

    /// Next token, or `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Fails on an unclosed string, comment or bracket group unless
    /// [`TokenizerOptions::ignore_errors`] is set. After an error the
    /// tokenizer yields no further tokens.
    pub fn next_token(&mut self) -> Result<Option<Token>, TokenizeError> {
        self.next_token_with(NextTokenOptions::default())
    }

    /// Like [`next_token`](Self::next_token), with per-call options.
    ///
    /// # Errors
    ///
    /// As for [`next_token`](Self::next_token); setting
    /// [`NextTokenOptions::ignore_unclosed`] recovers for this call.
    pub fn next_token_with(
        &mut self,
        options: NextTokenOptions,
    ) -> Result<Option<Token>, TokenizeError> {
        if let Some(token) = self.returned.take() {
            return Ok(Some(token));
        }
        if self.failed {
            return Ok(None);
        }

        let start = self.scanner.pos();
        let RawToken { tag, len } = self.scanner.next_token();
        let span = Span::new(start, start + len);

        let kind = match convert(tag) {
            Converted::Token(kind) => kind,
            Converted::Eof => return Ok(None),
            Converted::Unclosed(kind, error_kind) => {
                if self.options.ignore_errors || options.ignore_unclosed {
                    debug!(
                        kind = %kind,
                        start = span.start,
                        end = span.end,
                        error = error_kind.message(),
                        "recovered"
                    );
                    kind
                } else {
                    self.failed = true;
                    return Err(self.error(error_kind, start));
                }
            }
        };

        let token = self.make_token(kind, span);
        trace!(
            kind = %token.kind,
            start = token.span.start,
            end = token.span.end,
            "token"
        );
        Ok(Some(token))
    }

    fn make_token(&mut self, kind: TokenKind, span: Span) -> Token {
        let start = self.input.line_col_hinted(span.start, &mut self.hint);
        let end = if span.len() <= 1 {
            start
        } else {
            let last = self.input.last_char_offset(span);
            self.input.line_col_hinted(last, &mut self.hint)
        };
        Token::new(kind, span, start, end)
    }

    /// Error at the opening delimiter, which is always the token start.
    fn error(&mut self, kind: TokenizeErrorKind, offset: u32) -> TokenizeError {
        TokenizeError::new(
            kind,
            offset,
            self.input.line_col_hinted(offset, &mut self.hint),
            self.input.name(),
        )
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Tokenize the whole input.
///
/// # Errors
///
/// Returns the first [`TokenizeError`]; see [`Tokenizer::next_token`].
pub fn tokenize(input: &Input<'_>, options: TokenizerOptions) -> Result<Vec<Token>, TokenizeError> {
    Tokenizer::new(input, options).collect()
}
