//! Character classification for playlist scanning.
//!
//! Every predicate is a closed-range check over a single byte (or, for
//! [`is_control`], a decoded `char`). The scanner applies them to the byte
//! under its cursor; `0x00` is what the cursor reports at end of buffer and
//! is rejected by every predicate except [`is_control`].

/// The UTF-8 encoding of U+FEFF.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// `\r` or `\n`.
#[inline]
pub const fn is_newline(b: u8) -> bool {
    matches!(b, b'\r' | b'\n')
}

/// `0`..=`9`.
#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// `0`..=`9` or `A`..=`F`.
///
/// Lowercase hex digits are not accepted: the HLS `hexadecimal-sequence`
/// grammar only allows uppercase.
#[inline]
pub const fn is_hex_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'A'..=b'F')
}

/// `A`..=`Z`.
#[inline]
pub const fn is_upper_alpha(b: u8) -> bool {
    b.is_ascii_uppercase()
}

/// `a`..=`z` or `A`..=`Z`.
#[inline]
pub const fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Tab, space, `\r` or `\n`.
#[inline]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b'\t' | b' ' | b'\r' | b'\n')
}

/// C0 controls (U+0000..=U+001F), DEL and the C1 block (U+007F..=U+009F).
///
/// Takes a decoded `char` because the C1 code points are two-byte UTF-8
/// sequences whose bytes overlap ordinary continuation bytes.
#[inline]
pub const fn is_control(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}')
}

/// Bytes allowed in an attribute name: `A`..=`Z`, `0`..=`9` and `-`.
#[inline]
pub const fn is_attribute_name(b: u8) -> bool {
    is_upper_alpha(b) || is_digit(b) || b == b'-'
}

/// `true` when `buf` begins with the UTF-8 byte order mark.
#[inline]
pub fn has_bom(buf: &[u8]) -> bool {
    buf.starts_with(&UTF8_BOM)
}

/// Bytes a line may start with: `#`, a newline, an ASCII letter or digit.
#[inline]
pub const fn is_valid_line_start(b: u8) -> bool {
    b == b'#' || is_newline(b) || is_alpha(b) || is_digit(b)
}
