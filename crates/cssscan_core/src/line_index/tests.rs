use super::*;
use pretty_assertions::assert_eq;

/// Reference implementation: walk characters one at a time.
fn naive_line_col(source: &str, offset: usize) -> (u32, u32) {
    let mut line = 1;
    let mut column = 1;
    let mut chars = source.char_indices().peekable();
    while let Some((at, c)) = chars.next() {
        if at >= offset {
            break;
        }
        match c {
            '\r' if chars.peek().map(|&(_, next)| next) == Some('\n') => {
                // The '\n' of the pair still belongs to this line.
                if at + 1 >= offset {
                    column += 1;
                    break;
                }
                chars.next();
                line += 1;
                column = 1;
            }
            '\n' | '\r' | '\x0C' => {
                line += 1;
                column = 1;
            }
            _ => column += 1,
        }
    }
    (line, column)
}

#[test]
fn empty_source() {
    let index = LineIndex::build("");
    assert_eq!(index.line_count(), 1);
    assert_eq!(index.line_col("", 0), (1, 1));
}

#[test]
fn single_line() {
    let source = "a{b:c}";
    let index = LineIndex::build(source);
    assert_eq!(index.line_count(), 1);
    assert_eq!(index.line_col(source, 0), (1, 1));
    assert_eq!(index.line_col(source, 5), (1, 6));
    // End-of-buffer sentinel position is valid.
    assert_eq!(index.line_col(source, 6), (1, 7));
}

#[test]
fn line_feed() {
    let source = "a\nb";
    let index = LineIndex::build(source);
    assert_eq!(index.line_col(source, 1), (1, 2));
    assert_eq!(index.line_col(source, 2), (2, 1));
}

#[test]
fn carriage_return_alone() {
    let source = "a\rb";
    let index = LineIndex::build(source);
    assert_eq!(index.line_count(), 2);
    assert_eq!(index.line_col(source, 2), (2, 1));
}

#[test]
fn form_feed() {
    let source = "a\x0Cb";
    let index = LineIndex::build(source);
    assert_eq!(index.line_count(), 2);
    assert_eq!(index.line_col(source, 2), (2, 1));
}

#[test]
fn crlf_is_one_terminator() {
    let source = "a\r\nb";
    let index = LineIndex::build(source);
    assert_eq!(index.line_count(), 2);
    assert_eq!(index.line_col(source, 1), (1, 2)); // '\r'
    assert_eq!(index.line_col(source, 2), (1, 3)); // '\n'
    assert_eq!(index.line_col(source, 3), (2, 1)); // 'b'
}

#[test]
fn mixed_terminators() {
    let source = "a\rb\r\nc\x0Cd\ne";
    let index = LineIndex::build(source);
    assert_eq!(index.line_count(), 5);
    assert_eq!(index.line_col(source, 0), (1, 1));
    assert_eq!(index.line_col(source, 2), (2, 1));
    assert_eq!(index.line_col(source, 5), (3, 1));
    assert_eq!(index.line_col(source, 7), (4, 1));
    assert_eq!(index.line_col(source, 9), (5, 1));
}

#[test]
fn lf_cr_is_two_terminators() {
    let source = "\n\rx";
    let index = LineIndex::build(source);
    assert_eq!(index.line_count(), 3);
    assert_eq!(index.line_col(source, 2), (3, 1));
}

#[test]
fn columns_count_characters() {
    let source = "\u{e9}\u{e9}x\n\u{2192}y";
    let index = LineIndex::build(source);
    assert_eq!(index.line_col(source, 4), (1, 3)); // 'x'
    assert_eq!(index.line_col(source, 9), (2, 2)); // 'y'
}

#[test]
fn offset_past_end_is_clamped() {
    let source = "ab";
    let index = LineIndex::build(source);
    assert_eq!(index.line_col(source, 100), (1, 3));
}

#[test]
fn line_start_lookup() {
    let index = LineIndex::build("a\nbc\r\nd");
    assert_eq!(index.line_start(0), None);
    assert_eq!(index.line_start(1), Some(0));
    assert_eq!(index.line_start(2), Some(2));
    assert_eq!(index.line_start(3), Some(6));
    assert_eq!(index.line_start(4), None);
}

#[test]
fn line_of_offset() {
    let index = LineIndex::build("ab\ncd\nef");
    assert_eq!(index.line(0), 1);
    assert_eq!(index.line(2), 1);
    assert_eq!(index.line(3), 2);
    assert_eq!(index.line(6), 3);
}

#[test]
fn matches_naive_reference_on_samples() {
    let sources = [
        "a {\n  color: red;\r\n}\x0C@media x {}\r",
        "\r\n\r\n\n\r",
        "/* \u{e9}\n */ \"\u{2192}\"",
    ];
    for source in sources {
        let index = LineIndex::build(source);
        for offset in 0..=source.len() {
            if !source.is_char_boundary(offset) {
                continue;
            }
            assert_eq!(
                index.line_col(source, offset as u32),
                naive_line_col(source, offset),
                "offset {offset} in {source:?}"
            );
        }
    }
}

#[test]
fn hinted_lookup_resumes_on_the_same_line() {
    let source = "\u{e9}bc\n\u{2192}ef";
    let index = LineIndex::build(source);
    let mut hint = LineColHint::default();
    assert_eq!(index.line_col_hinted(source, 2, &mut hint), (1, 2));
    assert_eq!(index.line_col_hinted(source, 3, &mut hint), (1, 3));
    // Same offset twice.
    assert_eq!(index.line_col_hinted(source, 3, &mut hint), (1, 3));
    // Next line starts over from its line start.
    assert_eq!(index.line_col_hinted(source, 8, &mut hint), (2, 2));
    assert_eq!(index.line_col_hinted(source, 9, &mut hint), (2, 3));
}

#[test]
fn hinted_lookup_going_backwards_recounts() {
    let source = "abcdef";
    let index = LineIndex::build(source);
    let mut hint = LineColHint::default();
    assert_eq!(index.line_col_hinted(source, 5, &mut hint), (1, 6));
    assert_eq!(index.line_col_hinted(source, 1, &mut hint), (1, 2));
    assert_eq!(index.line_col_hinted(source, 4, &mut hint), (1, 5));
}

#[test]
fn hinted_lookup_on_one_long_line() {
    let source = "a\u{e9}".repeat(50_000);
    let index = LineIndex::build(&source);
    let mut hint = LineColHint::default();
    for pair in 0..50_000u32 {
        // 'a' of each pair; the 2-byte 'é' before it is one column.
        let offset = pair * 3;
        assert_eq!(
            index.line_col_hinted(&source, offset, &mut hint),
            (1, pair * 2 + 1)
        );
    }
}

mod proptest_line_index {
    use super::naive_line_col;
    use crate::{LineColHint, LineIndex};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn matches_naive_reference(source in "[ab\u{e9}\r\n\x0C]{0,48}") {
            let index = LineIndex::build(&source);
            for offset in 0..=source.len() {
                if !source.is_char_boundary(offset) {
                    continue;
                }
                prop_assert_eq!(
                    index.line_col(&source, offset as u32),
                    naive_line_col(&source, offset)
                );
            }
        }

        #[test]
        fn hinted_matches_naive_in_increasing_order(
            source in "[ab\u{e9}\r\n\x0C]{0,48}",
            stride in 1usize..4,
        ) {
            let index = LineIndex::build(&source);
            let mut hint = LineColHint::default();
            for offset in (0..=source.len()).step_by(stride) {
                if !source.is_char_boundary(offset) {
                    continue;
                }
                prop_assert_eq!(
                    index.line_col_hinted(&source, offset as u32, &mut hint),
                    naive_line_col(&source, offset)
                );
            }
        }
    }
}
