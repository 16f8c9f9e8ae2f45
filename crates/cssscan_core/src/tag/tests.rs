use super::*;
use pretty_assertions::assert_eq;

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(RawTag::Whitespace as u8, 0);
    assert_eq!(RawTag::Word as u8, 1);
    assert_eq!(RawTag::String as u8, 2);
    assert_eq!(RawTag::Comment as u8, 3);
    assert_eq!(RawTag::Brackets as u8, 4);
    assert_eq!(RawTag::AtWord as u8, 5);
    assert_eq!(RawTag::LeftParen as u8, 6);
    assert_eq!(RawTag::Semicolon as u8, 13);

    assert_eq!(RawTag::UnterminatedString as u8, 240);
    assert_eq!(RawTag::UnterminatedBrackets as u8, 242);

    assert_eq!(RawTag::Eof as u8, 255);
}

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<RawTag>(), 1);
}
