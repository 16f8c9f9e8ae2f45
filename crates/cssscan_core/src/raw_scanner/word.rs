//! Words, escapes, at-words and stray characters.

use super::RawScanner;
use crate::tag::{RawTag, RawToken};

/// Maximum number of hex digits in a `\XXXXXX` escape.
const MAX_HEX_DIGITS: u32 = 6;

/// Bytes that end a word without being part of it.
///
/// `\` and `/` are handled separately: `\` always starts an escape, and `/`
/// only ends a word when it opens a comment.
#[inline]
fn ends_word(byte: u8) -> bool {
    matches!(
        byte,
        b' ' | b'\t'
            | b'\n'
            | b'\r'
            | 0x0C
            | b'{'
            | b'}'
            | b'['
            | b']'
            | b'('
            | b')'
            | b':'
            | b';'
            | b'"'
            | b'\''
            | b'@'
    )
}

impl RawScanner<'_> {
    /// Word starting at the current byte, which the dispatcher has already
    /// classified as a word start.
    pub(super) fn word(&mut self, start: u32) -> RawToken {
        self.eat_word_continue();
        RawToken {
            tag: RawTag::Word,
            len: self.cursor.pos() - start,
        }
    }

    /// `@` plus an optional word run. A lone `@` is a one-byte at-word.
    pub(super) fn at_word(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '@'
        self.eat_word_continue();
        RawToken {
            tag: RawTag::AtWord,
            len: self.cursor.pos() - start,
        }
    }

    /// One character that starts no other token, emitted as its own word.
    pub(super) fn stray(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        RawToken {
            tag: RawTag::Word,
            len: self.cursor.pos() - start,
        }
    }

    fn eat_word_continue(&mut self) {
        loop {
            match self.cursor.current() {
                b'\\' => self.escape(),
                b'/' if self.cursor.peek() == b'*' => break,
                0 if self.cursor.is_eof() => break,
                byte if ends_word(byte) => break,
                _ => self.cursor.advance(),
            }
        }
    }

    /// Escape sequence starting at `\`.
    ///
    /// A hex digit starts a hex escape of up to six digits, which swallows
    /// one following whitespace character (`\r\n` counts as one). Anything
    /// else is taken literally. `\` at EOF consumes only itself.
    fn escape(&mut self) {
        self.cursor.advance(); // consume '\'
        if self.cursor.is_eof() {
            return;
        }
        if !self.cursor.current().is_ascii_hexdigit() {
            self.cursor.advance_char();
            return;
        }

        let mut digits = 0;
        while digits < MAX_HEX_DIGITS && self.cursor.current().is_ascii_hexdigit() {
            self.cursor.advance();
            digits += 1;
        }
        match self.cursor.current() {
            b'\r' if self.cursor.peek() == b'\n' => self.cursor.advance_n(2),
            b' ' | b'\t' | b'\n' | b'\r' | 0x0C => self.cursor.advance(),
            _ => {}
        }
    }
}
