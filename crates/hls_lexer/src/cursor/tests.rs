use super::*;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn reads_past_end_are_zero() {
    let mut cursor = Cursor::new("x");
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    cursor.advance();
    assert_eq!(cursor.pos(), 1, "advance at eof is a no-op");
}

#[test]
fn interior_nul_is_not_eof() {
    let cursor = Cursor::new("\0x");
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn empty_source_starts_at_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.current_char(), None);
}

// === UTF-8 ===

#[test]
fn current_char_decodes_multibyte_characters() {
    let mut cursor = Cursor::new("\u{e9}\u{1F600}");
    assert_eq!(cursor.current_char(), Some('\u{e9}'));
    cursor.eat_while(|b| b >= 0x80);
    assert_eq!(cursor.pos(), 6);
    assert!(cursor.is_eof());
}

#[test]
fn current_char_decodes_c1_control() {
    let cursor = Cursor::new("\u{0085}");
    assert_eq!(cursor.current_char(), Some('\u{0085}'));
    assert_eq!(cursor.current(), 0xC2);
}

// === Slicing ===

#[test]
fn slice_and_slice_from() {
    let mut cursor = Cursor::new("#EXTM3U\n");
    cursor.eat_while(|b| b != b'M');
    assert_eq!(cursor.slice_from(0), "#EXT");
    assert_eq!(cursor.slice(1, 7), "EXTM3U");
}

#[test]
fn starts_with_checks_from_current_position() {
    let mut cursor = Cursor::new("# #EXT");
    assert!(!cursor.starts_with(b"#EXT"));
    cursor.advance();
    cursor.advance();
    assert!(cursor.starts_with(b"#EXT"));
    cursor.advance();
    assert!(!cursor.starts_with(b"#EXT"));
}

// === Scanning ===

#[test]
fn eat_while_stops_at_predicate_and_eof() {
    let mut cursor = Cursor::new("123.5x");
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 3);
    cursor.eat_while(|_| true);
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_newline_finds_cr_or_lf() {
    let mut cursor = Cursor::new("abc\r\ndef");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 3);

    let mut cursor = Cursor::new("abc\ndef");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 3);

    let mut cursor = Cursor::new("no newline");
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_quote_delim_reports_the_delimiter() {
    let mut cursor = Cursor::new("mp4a.40.2,avc1\" rest");
    assert_eq!(cursor.skip_to_quote_delim(), b'"');
    assert_eq!(cursor.pos(), 14);

    let mut cursor = Cursor::new("broken\nnext\"");
    assert_eq!(cursor.skip_to_quote_delim(), b'\n');

    let mut cursor = Cursor::new("unterminated");
    assert_eq!(cursor.skip_to_quote_delim(), 0);
    assert!(cursor.is_eof());
}
