//! Token types.
//!
//! A [`Token`] is a fixed-size `Copy` record: a kind, a half-open byte
//! range, and the line/column of its first and last characters. It holds no
//! text; slice the [`Input`](crate::Input) to get it.

use std::fmt;

/// Source location span: half-open byte range `[start, end)`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Check if an offset is within this span.
    #[inline]
    pub fn contains(self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// The span as a `usize` range, for slicing.
    #[inline]
    pub fn to_range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// 1-based line and column. Columns count characters.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Token kinds.
///
/// The discriminants are stable and part of the public contract; consumers
/// may store `kind as u8`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
#[repr(u8)]
pub enum TokenKind {
    /// Run of space, tab, `\n`, `\r`, `\f`.
    Space = 0,
    /// Identifier, number, `!important`, escape sequence, or a stray
    /// single character such as `,` or `>`.
    Word = 1,
    /// Quoted string including its quotes.
    String = 2,
    /// `/* ... */` including the markers.
    Comment = 3,
    /// Raw parenthesis group such as `(/*\))`, never re-tokenized.
    Brackets = 4,
    /// `@media`, or a lone `@`.
    AtWord = 5,
    OpenParen = 6,
    CloseParen = 7,
    OpenSquare = 8,
    CloseSquare = 9,
    OpenCurly = 10,
    CloseCurly = 11,
    Colon = 12,
    Semicolon = 13,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 14] = [
        TokenKind::Space,
        TokenKind::Word,
        TokenKind::String,
        TokenKind::Comment,
        TokenKind::Brackets,
        TokenKind::AtWord,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenSquare,
        TokenKind::CloseSquare,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::Colon,
        TokenKind::Semicolon,
    ];

    /// Human-readable name: `space`, `word`, `at-word`, `(`, ...
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Space => "space",
            TokenKind::Word => "word",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Brackets => "brackets",
            TokenKind::AtWord => "at-word",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenSquare => "[",
            TokenKind::CloseSquare => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
        }
    }

    /// Kind for a stable discriminant.
    pub fn from_u8(value: u8) -> Option<TokenKind> {
        Self::ALL.get(usize::from(value)).copied()
    }

    /// Returns `true` for the single-character punctuation kinds.
    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::OpenParen
                | TokenKind::CloseParen
                | TokenKind::OpenSquare
                | TokenKind::CloseSquare
                | TokenKind::OpenCurly
                | TokenKind::CloseCurly
                | TokenKind::Colon
                | TokenKind::Semicolon
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified, positioned slice of the source.
///
/// `start` is the position of the first character and `end` the position
/// of the last character, so a one-character token has `start == end`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub start: Position,
    pub end: Position,
}

/// kind(1) + span(8) + two positions(16), padded.
const _: () = assert!(std::mem::size_of::<Token>() <= 28);

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span, start: Position, end: Position) -> Self {
        Token {
            kind,
            span,
            start,
            end,
        }
    }

    /// The seven-integer record
    /// `[kind, start_offset, end_offset, start_line, start_column, end_line, end_column]`.
    pub fn to_record(&self) -> [u32; 7] {
        [
            u32::from(self.kind as u8),
            self.span.start,
            self.span.end,
            self.start.line,
            self.start.column,
            self.end.line,
            self.end.column,
        ]
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} @ {} ({}-{})",
            self.kind, self.span, self.start, self.end
        )
    }
}
