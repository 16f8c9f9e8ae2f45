//! Low-level raw scanner for CSS-like sources.
//!
//! This crate turns a source string into `(RawTag, len)` pairs without
//! deciding what to do about malformed input.
//! Unterminated strings, comments and bracket groups come back as
//! dedicated [`RawTag`] variants; the `cssscan` crate turns those into
//! errors or recovered tokens depending on its options.
//!
//! # Layers
//!
//! - [`SourceBuffer`]: sentinel-terminated copy of the source.
//! - [`Cursor`]: `Copy` byte cursor over that buffer.
//! - [`RawScanner`]: dispatcher plus the whitespace, word, string, comment
//!   and bracket-group sub-scanners.
//! - [`LineIndex`]: byte offset to `(line, column)` lookup.

mod cursor;
mod line_index;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use line_index::{LineColHint, LineIndex};
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
