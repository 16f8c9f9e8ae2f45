//! Options and tokens through serde.
#![cfg(feature = "serde")]
#![allow(clippy::expect_used, reason = "Tests use expect for brevity")]

use cssscan::{tokenize, Input, NextTokenOptions, Token, TokenKind, TokenizerOptions};
use pretty_assertions::assert_eq;

#[test]
fn options_use_kebab_case_keys() {
    let options: TokenizerOptions =
        serde_json::from_str(r#"{ "ignore-errors": true }"#).expect("valid options");
    assert_eq!(options, TokenizerOptions::default().with_ignore_errors(true));

    let json = serde_json::to_string(&NextTokenOptions::default()).expect("serializable");
    assert_eq!(json, r#"{"ignore-unclosed":false}"#);
}

#[test]
fn missing_option_keys_take_defaults() {
    let options: TokenizerOptions = serde_json::from_str("{}").expect("valid options");
    assert_eq!(options, TokenizerOptions::default());
}

#[test]
fn token_kind_names() {
    let json = serde_json::to_string(&TokenKind::AtWord).expect("serializable");
    assert_eq!(json, r#""at-word""#);
    let kind: TokenKind = serde_json::from_str(r#""open-curly""#).expect("known kind");
    assert_eq!(kind, TokenKind::OpenCurly);
}

#[test]
fn tokens_survive_json() {
    let input = Input::new("a { b: url(c) }");
    let tokens = tokenize(&input, TokenizerOptions::default()).expect("tokenize");
    let json = serde_json::to_string(&tokens).expect("serializable");
    let back: Vec<Token> = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, tokens);
}
