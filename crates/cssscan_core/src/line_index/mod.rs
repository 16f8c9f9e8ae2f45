//! Byte offset to line/column lookup.
//!
//! CSS recognizes four line terminators: `\n`, `\r`, `\f`, and the pair
//! `\r\n`, which counts as a single terminator. A terminator belongs to the
//! line it ends, so the offset of a `\n` reports the line before it.
//!
//! The table is built once per source in O(n) and answers lookups with a
//! binary search over line starts.

/// Pre-computed line start table.
///
/// # Example
///
/// ```
/// use cssscan_core::LineIndex;
///
/// let source = "a {\r\n  color: red\x0C}";
/// let index = LineIndex::build(source);
///
/// assert_eq!(index.line_col(source, 0), (1, 1)); // 'a'
/// assert_eq!(index.line_col(source, 4), (1, 5)); // '\n' of "\r\n"
/// assert_eq!(index.line_col(source, 5), (2, 1)); // first space of line 2
/// assert_eq!(index.line_col(source, 18), (3, 1)); // '}'
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of each line start. `line_starts[0] == 0`.
    line_starts: Vec<u32>,
}

impl LineIndex {
    /// Build the table by scanning `source` for line terminators.
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0u32];
        let mut from = 0;
        while let Some(found) = memchr::memchr3(b'\n', b'\r', 0x0C, &bytes[from..]) {
            let at = from + found;
            let next = if bytes[at] == b'\r' && bytes.get(at + 1) == Some(&b'\n') {
                at + 2
            } else {
                at + 1
            };
            line_starts.push(u32::try_from(next).unwrap_or(u32::MAX));
            from = next;
        }
        Self { line_starts }
    }

    /// 1-based line number containing `offset`.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count never exceeds the u32 source length"
    )]
    pub fn line(&self, offset: u32) -> u32 {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        line_idx as u32 + 1
    }

    /// 1-based `(line, column)` of `offset` in `source`.
    ///
    /// The column counts characters, not bytes, from the line start.
    /// Offsets past the end of `source` are clamped to its length.
    pub fn line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        self.line_col_hinted(source, offset, &mut LineColHint::default())
    }

    /// Like [`line_col`](Self::line_col), but resumes counting from `hint`
    /// when `offset` is on the same line at or after it, then moves `hint`
    /// to `offset`.
    ///
    /// Resolving offsets in increasing order with one hint counts every
    /// byte of a line at most once.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset is clamped to the u32 source length"
    )]
    pub fn line_col_hinted(
        &self,
        source: &str,
        offset: u32,
        hint: &mut LineColHint,
    ) -> (u32, u32) {
        let bytes = source.as_bytes();
        let offset = (offset as usize).min(bytes.len());
        let line = self.line(offset as u32);
        let line_start = self.line_start(line).map_or(0, |start| start as usize);
        let (from, column) = if hint.line == line && (hint.offset as usize) <= offset {
            (hint.offset as usize, hint.column)
        } else {
            (line_start.min(offset), 1)
        };
        let column = column + count_chars(&bytes[from..offset]);
        *hint = LineColHint {
            line,
            offset: offset as u32,
            column,
        };
        (line, column)
    }

    /// Byte offset where 1-based `line` starts, if it exists.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.line_starts.get((line - 1) as usize).copied()
    }

    /// Number of lines in the source (at least 1).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

/// Last position resolved by [`LineIndex::line_col_hinted`].
///
/// The default hint matches no line, so the first lookup counts from the
/// line start.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LineColHint {
    /// 1-based; 0 until the first lookup.
    line: u32,
    offset: u32,
    column: u32,
}

/// Number of characters in `bytes`: UTF-8 lead bytes, skipping
/// continuation bytes (0b10xx_xxxx).
#[allow(
    clippy::cast_possible_truncation,
    reason = "a column never exceeds the u32 source length"
)]
fn count_chars(bytes: &[u8]) -> u32 {
    bytes.iter().filter(|&&b| b & 0xC0 != 0x80).count() as u32
}

#[cfg(test)]
mod tests;
