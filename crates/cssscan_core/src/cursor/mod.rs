//! Byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! Reads never check bounds against the source length: the zero sentinel
//! after the source stops every scanning loop, and the padding behind it
//! keeps one-byte lookahead in range. A zero byte is EOF only once the
//! position has reached the source length; earlier zeros are source text.

/// Position in a sentinel-terminated buffer.
///
/// `Copy`, so a tentative scan saves it in a local and assigns it back to
/// rewind.
///
/// # Invariant
///
/// `buf[source_len]` and every byte after it are `0x00`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

/// Slice (16) + two u32 (8).
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "buffer has no room for the sentinel"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel must be zero");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte under the cursor; `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Byte after the current one. In bounds anywhere up to EOF.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// At the sentinel, as opposed to an interior NUL.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Skip bytes matching `pred`. `pred(0)` must be `false` so the
    /// sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Skip space, tab, `\n`, `\r` and `\f`.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0C));
    }

    /// UTF-8 sequence length announced by a lead byte. Continuation and
    /// invalid bytes count as 1.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Step over one character, stopping at the source end.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len);
    }

    /// Source bytes from the cursor on.
    #[inline]
    fn remaining(&self) -> &'a [u8] {
        let start = (self.pos as usize).min(self.source_len as usize);
        &self.buf[start..self.source_len as usize]
    }

    /// Apply a memchr result: move `offset` bytes ahead and return the byte
    /// there, or move to EOF and return `0` on `None`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    fn jump(&mut self, offset: Option<usize>) -> u8 {
        if let Some(off) = offset {
            self.pos += off as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance to the next `quote` or `\` inside a quoted string.
    ///
    /// Returns the byte found, or `0` for EOF.
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        let found = memchr::memchr2(quote, b'\\', self.remaining());
        self.jump(found)
    }

    /// Advance to the next byte that matters inside a raw bracket group:
    /// `(`, `)`, `\`, `"` or `'`.
    ///
    /// Returns the byte found, or `0` for EOF.
    ///
    /// Quotes are only searched for up to the next structural byte, so each
    /// call costs the distance it moves.
    pub fn skip_to_bracket_delim(&mut self) -> u8 {
        let remaining = self.remaining();
        let structural = memchr::memchr3(b'(', b')', b'\\', remaining);
        let window = &remaining[..structural.unwrap_or(remaining.len())];
        let found = memchr::memchr2(b'"', b'\'', window).or(structural);
        self.jump(found)
    }

    /// Advance past the next `*/`.
    ///
    /// Returns `false` and leaves the cursor at EOF if there is none.
    pub fn skip_past_comment_end(&mut self) -> bool {
        let found = memchr::memmem::find(self.remaining(), b"*/");
        let closed = found.is_some();
        self.jump(found);
        if closed {
            self.advance_n(2);
        }
        closed
    }
}
