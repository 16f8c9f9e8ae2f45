//! Large inputs that used to scan in quadratic time: many bracket groups,
//! long runs of `(` left open before a quote, and very long lines.
#![expect(clippy::expect_used, reason = "Tests use expect for brevity")]

use cssscan::{tokenize, Input, Position, TokenKind, TokenizeErrorKind, TokenizerOptions};
use pretty_assertions::assert_eq;

#[test]
fn many_calc_rules() {
    let rules = 20_000;
    let css = "a{width:calc((1px + 2px) * (3 + 4))}\n".repeat(rules);
    let input = Input::new(&css);
    let tokens = tokenize(&input, TokenizerOptions::default()).expect("tokenize");

    assert_eq!(tokens.len(), rules * 8);
    let last_rule = &tokens[tokens.len() - 8..];
    let kinds: Vec<_> = last_rule.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Word,
            TokenKind::OpenCurly,
            TokenKind::Word,
            TokenKind::Colon,
            TokenKind::Word,
            TokenKind::Brackets,
            TokenKind::CloseCurly,
            TokenKind::Space,
        ]
    );
    let line = u32::try_from(rules).expect("line fits in u32");
    assert_eq!(input.slice(&last_rule[5]), "((1px + 2px) * (3 + 4))");
    assert_eq!(last_rule[5].start, Position::new(line, 13));
    assert_eq!(last_rule[5].end, Position::new(line, 35));
    assert_eq!(last_rule[6].start, Position::new(line, 36));
}

#[test]
fn many_unclosed_parens_before_quote() {
    let count = 50_000;
    let css = "a(".repeat(count) + "\"";
    let input = Input::new(&css);
    let quote_column = u32::try_from(count * 2 + 1).expect("column fits in u32");

    let error = tokenize(&input, TokenizerOptions::default()).expect_err("unclosed string");
    assert_eq!(error.kind, TokenizeErrorKind::UnclosedString);
    assert_eq!(error.position, Position::new(1, quote_column));

    let tokens = tokenize(&input, TokenizerOptions::default().with_ignore_errors(true))
        .expect("recovered");
    assert_eq!(tokens.len(), count * 2 + 1);
    assert!(tokens
        .iter()
        .skip(1)
        .step_by(2)
        .all(|token| token.kind == TokenKind::OpenParen));
    let last = tokens.last().expect("a token");
    assert_eq!(last.kind, TokenKind::String);
    assert_eq!(last.start, Position::new(1, quote_column));
}

#[test]
fn columns_on_one_long_line() {
    let words = 100_000;
    let css = "\u{e9} ".repeat(words);
    let input = Input::new(&css);
    let tokens = tokenize(&input, TokenizerOptions::default()).expect("tokenize");

    assert_eq!(tokens.len(), words * 2);
    let last_word = &tokens[tokens.len() - 2];
    let column = u32::try_from(words * 2 - 1).expect("column fits in u32");
    assert_eq!(last_word.kind, TokenKind::Word);
    assert_eq!(last_word.start, Position::new(1, column));
    assert_eq!(last_word.end, Position::new(1, column));
}
