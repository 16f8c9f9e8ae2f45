//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values. It never fails: a string,
//! comment or bracket group cut short by EOF comes back as an
//! `Unterminated*` tag spanning to the end of the source, and the caller
//! decides whether that is an error.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The sentinel
//! byte (`0x00`) naturally dispatches to `eof()`.
//!
//! Sub-scanners live in their own files:
//! - `word`: words, escapes, at-words, stray characters
//! - `quoted`: strings and comments
//! - `brackets`: raw parenthesis groups
//!
//! The only heap state is the list of `(` offsets left open by a bracket
//! scan that a quote aborted; it keeps repeated `(` before one quote linear.

mod brackets;
mod quoted;
mod word;

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure scanner, allocation-free except for the open-paren list.
///
/// Produces one token at a time as a `(tag, length)` pair. The start offset
/// of each token is [`pos()`](Self::pos) before the call.
#[derive(Clone, Debug)]
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    /// Offsets of nested `(` known to stay open until a quote, ascending.
    open_parens: Vec<u32>,
    /// First entry of `open_parens` not yet behind the cursor.
    next_open: usize,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            open_parens: Vec::new(),
            next_open: 0,
        }
    }

    /// Byte offset where the next token starts.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' | b'\n' | b'\r' | 0x0C => self.whitespace(start),
            b'@' => self.at_word(start),
            quote @ (b'"' | b'\'') => self.string(start, quote),
            b'/' => self.slash_or_comment(start),
            b'(' => self.left_paren(start),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b':' => self.single(start, RawTag::Colon),
            b';' => self.single(start, RawTag::Semicolon),
            b'a'..=b'z'
            | b'A'..=b'Z'
            | b'0'..=b'9'
            | b'!'
            | b'\\'
            | b'-'
            | b'.'
            | b'_'
            | b'%'
            | b'#'
            | b'$'
            | b'*'
            | 0x80..=0xFF => self.word(start),
            // `,` `>` `~` `+` `<` `=` `&` `|` `^` `?` `` ` `` and controls
            _ => self.stray(start),
        }
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte: a one-byte stray word.
            self.stray(start)
        }
    }

    // ─── Whitespace ────────────────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        RawToken {
            tag: RawTag::Whitespace,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Punctuation ───────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }
}
