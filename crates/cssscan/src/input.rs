//! Tokenizer input: source text, display name and line index.

use cssscan_core::{LineColHint, LineIndex, SourceBuffer};

use crate::error::InputTooLarge;
use crate::token::{Position, Span, Token};

/// Display name used when none is given.
pub const DEFAULT_INPUT_NAME: &str = "<input css>";

/// Immutable source prepared for tokenizing.
///
/// Building an `Input` copies the source into a sentinel-terminated buffer
/// and indexes its line starts once; any number of tokenizers can then
/// borrow it.
#[derive(Clone, Debug)]
pub struct Input<'src> {
    css: &'src str,
    name: String,
    buffer: SourceBuffer,
    lines: LineIndex,
}

impl<'src> Input<'src> {
    /// # Panics
    ///
    /// Panics if `css` is longer than [`Input::MAX_LEN`] bytes; use
    /// [`try_new`](Self::try_new) to get an error instead.
    pub fn new(css: &'src str) -> Self {
        Self::with_name(css, DEFAULT_INPUT_NAME)
    }

    /// Input with a display name, typically a file path, used in errors.
    ///
    /// # Panics
    ///
    /// Panics if `css` is longer than [`Input::MAX_LEN`] bytes; use
    /// [`try_with_name`](Self::try_with_name) to get an error instead.
    pub fn with_name(css: &'src str, name: impl Into<String>) -> Self {
        match Self::try_with_name(css, name) {
            Ok(input) => input,
            Err(error) => panic!("{error}"),
        }
    }

    /// Largest source accepted, in bytes. Offsets are `u32`.
    pub const MAX_LEN: usize = SourceBuffer::MAX_LEN;

    pub fn try_new(css: &'src str) -> Result<Self, InputTooLarge> {
        Self::try_with_name(css, DEFAULT_INPUT_NAME)
    }

    pub fn try_with_name(css: &'src str, name: impl Into<String>) -> Result<Self, InputTooLarge> {
        check_len(css.len())?;
        Ok(Input {
            css,
            name: name.into(),
            buffer: SourceBuffer::new(css),
            lines: LineIndex::build(css),
        })
    }

    pub fn css(&self) -> &'src str {
        self.css
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source length in bytes.
    pub fn len(&self) -> u32 {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Text covered by `token`. Empty if the token does not belong to this
    /// input.
    pub fn slice(&self, token: &Token) -> &'src str {
        self.slice_span(token.span)
    }

    pub fn slice_span(&self, span: Span) -> &'src str {
        self.css.get(span.to_range()).unwrap_or_default()
    }

    /// 1-based line and character column of a byte offset.
    pub fn line_col(&self, offset: u32) -> Position {
        let (line, column) = self.lines.line_col(self.css, offset);
        Position::new(line, column)
    }

    /// [`line_col`](Self::line_col) for offsets resolved in increasing
    /// order; `hint` carries the previous result along the line.
    pub(crate) fn line_col_hinted(&self, offset: u32, hint: &mut LineColHint) -> Position {
        let (line, column) = self.lines.line_col_hinted(self.css, offset, hint);
        Position::new(line, column)
    }

    pub fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    pub(crate) fn buffer(&self) -> &SourceBuffer {
        &self.buffer
    }

    /// Start offset of the last character in `span`.
    pub(crate) fn last_char_offset(&self, span: Span) -> u32 {
        if span.is_empty() {
            return span.start;
        }
        let mut offset = span.end - 1;
        while offset > span.start && !self.css.is_char_boundary(offset as usize) {
            offset -= 1;
        }
        offset
    }
}

fn check_len(len: usize) -> Result<(), InputTooLarge> {
    if SourceBuffer::fits(len) {
        Ok(())
    } else {
        Err(InputTooLarge {
            len,
            max: Input::MAX_LEN,
        })
    }
}
