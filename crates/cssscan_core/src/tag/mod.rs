//! Raw token tags produced by the [`RawScanner`](crate::RawScanner).
//!
//! Discriminants of the token tags match the public `TokenKind` numbering
//! of the `cssscan` crate, so the conversion is a plain match.

/// Kind of a raw token.
///
/// # Discriminant ranges
///
/// - 0-13: well-formed tokens
/// - 240-242: unterminated constructs (the token still spans to EOF)
/// - 255: end of input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    /// Run of space, tab, `\n`, `\r`, `\f`.
    Whitespace = 0,
    /// Identifier, number, `!keyword`, escape, or a stray character.
    Word = 1,
    /// Closed single- or double-quoted string.
    String = 2,
    /// Closed `/* ... */` comment.
    Comment = 3,
    /// Raw parenthesis group such as `(/*\))`.
    Brackets = 4,
    /// `@` optionally followed by a word.
    AtWord = 5,
    LeftParen = 6,
    RightParen = 7,
    LeftBracket = 8,
    RightBracket = 9,
    LeftBrace = 10,
    RightBrace = 11,
    Colon = 12,
    Semicolon = 13,

    /// String with no closing quote before EOF.
    UnterminatedString = 240,
    /// Comment with no `*/` before EOF.
    UnterminatedComment = 241,
    /// Bracket group with no matching `)` (and no quote) before EOF.
    UnterminatedBrackets = 242,

    /// End of input. Always has `len == 0`.
    Eof = 255,
}

/// A raw token: tag plus byte length. The start offset is implied by the
/// scanner position before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

#[cfg(test)]
mod tests;
