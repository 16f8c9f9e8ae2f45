//! Raw parenthesis groups for functional values such as `url(...)`.
//!
//! The content of a group is opaque: `/*` inside an unquoted URL is not a
//! comment, and nested or escaped parentheses are balanced. The only thing
//! that forces normal tokenization is a quote, so `url(")")` still yields a
//! proper string token.
//!
//! When a quote aborts a group, every nested `(` still open at that quote
//! would abort on the same quote too. Their offsets are kept in
//! `open_parens` so those `(` are emitted without scanning the stretch up
//! to the quote again.

use super::RawScanner;
use crate::tag::{RawTag, RawToken};

impl RawScanner<'_> {
    /// `(` at the current position.
    ///
    /// Scans tentatively for the matching `)`. On an unescaped quote the
    /// scan is abandoned and only the `(` is returned.
    pub(super) fn left_paren(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '('
        if self.known_to_abort(start) {
            return RawToken {
                tag: RawTag::LeftParen,
                len: 1,
            };
        }

        let after_paren = self.cursor;
        // Entries above `base` are the `(` opened by this scan; depth is
        // their count plus one.
        let base = self.open_parens.len();

        loop {
            match self.cursor.skip_to_bracket_delim() {
                0 => {
                    self.open_parens.truncate(base);
                    return RawToken {
                        tag: RawTag::UnterminatedBrackets,
                        len: self.cursor.pos() - start,
                    };
                }
                b'"' | b'\'' => {
                    // Only this scan's entries are ahead of the cursor now.
                    self.open_parens.drain(..base);
                    self.next_open = 0;
                    self.cursor = after_paren;
                    return RawToken {
                        tag: RawTag::LeftParen,
                        len: 1,
                    };
                }
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                b'(' => {
                    self.open_parens.push(self.cursor.pos());
                    self.cursor.advance();
                }
                _ => {
                    self.cursor.advance(); // consume ')'
                    if self.open_parens.len() == base {
                        return RawToken {
                            tag: RawTag::Brackets,
                            len: self.cursor.pos() - start,
                        };
                    }
                    self.open_parens.pop();
                }
            }
        }
    }

    /// Whether an earlier aborted scan showed that the `(` at `offset` stays
    /// open until a quote.
    ///
    /// Tokens are scanned in increasing offset order, so entries behind
    /// `offset` are never needed again.
    fn known_to_abort(&mut self, offset: u32) -> bool {
        while let Some(&open) = self.open_parens.get(self.next_open) {
            if open >= offset {
                return open == offset;
            }
            self.next_open += 1;
        }
        false
    }
}
