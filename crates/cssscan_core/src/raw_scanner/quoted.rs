//! Quoted strings and block comments.

use super::RawScanner;
use crate::tag::{RawTag, RawToken};

impl RawScanner<'_> {
    /// String delimited by `quote`.
    ///
    /// `\` escapes the following character, whatever it is. Line
    /// terminators do not end the string. Without a closing quote the token
    /// runs to EOF and is tagged `UnterminatedString`.
    pub(super) fn string(&mut self, start: u32, quote: u8) -> RawToken {
        self.cursor.advance(); // consume opening quote
        loop {
            match self.cursor.skip_to_string_delim(quote) {
                0 => {
                    return RawToken {
                        tag: RawTag::UnterminatedString,
                        len: self.cursor.pos() - start,
                    };
                }
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                _ => {
                    self.cursor.advance(); // consume closing quote
                    return RawToken {
                        tag: RawTag::String,
                        len: self.cursor.pos() - start,
                    };
                }
            }
        }
    }

    /// `/*` opens a comment; any other `/` is a stray character.
    pub(super) fn slash_or_comment(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() != b'*' {
            return self.stray(start);
        }
        self.cursor.advance_n(2); // consume '/*'
        let tag = if self.cursor.skip_past_comment_end() {
            RawTag::Comment
        } else {
            RawTag::UnterminatedComment
        };
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }
}
