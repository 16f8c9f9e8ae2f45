//! Owned copy of the source with a trailing NUL sentinel.
//!
//! Scanning reads one byte past the current position all the time
//! (`peek`, `/*` and `\r\n` checks). Ending the copy with at least one zero
//! byte, then zero-filling up to a multiple of [`ALIGN`], makes those reads
//! always in bounds, so the scanner never branches on the buffer length in
//! its hot loops.
//!
//! CSS text may contain NUL itself. Such bytes are copied unchanged and
//! [`Cursor::is_eof`] separates them from the sentinel by position.

use crate::Cursor;

/// Buffer lengths are rounded up to a multiple of this many bytes.
const ALIGN: usize = 64;

/// Source bytes followed by a zero sentinel and zero padding.
///
/// ```text
/// | source (len bytes) | 0x00 | 0x00 ... |
///                        ^ sentinel     ^ multiple of ALIGN
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
    len: u32,
}

impl SourceBuffer {
    /// Largest source accepted, in bytes. Offsets are `u32` and the
    /// sentinel itself needs an index.
    pub const MAX_LEN: usize = u32::MAX as usize - 1;

    /// Whether a source of `len` bytes can be buffered.
    #[inline]
    pub const fn fits(len: usize) -> bool {
        len <= Self::MAX_LEN
    }

    /// Copy `source` into a padded buffer.
    ///
    /// # Panics
    ///
    /// Panics if `source` is longer than [`MAX_LEN`](Self::MAX_LEN) bytes.
    /// Check with [`fits`](Self::fits) first to handle that case.
    pub fn new(source: &str) -> Self {
        let len = match u32::try_from(source.len()) {
            Ok(len) if Self::fits(source.len()) => len,
            _ => panic!(
                "source of {} bytes exceeds SourceBuffer::MAX_LEN ({})",
                source.len(),
                Self::MAX_LEN
            ),
        };
        let padded = (source.len() / ALIGN + 1) * ALIGN;

        let mut bytes = Vec::with_capacity(padded);
        bytes.extend_from_slice(source.as_bytes());
        bytes.resize(padded, 0);

        Self { bytes, len }
    }

    /// The source bytes alone.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Source, sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Cursor at offset 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.bytes, self.len)
    }

    /// Source length in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Vec (24) + u32 (4), padded.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 32);
