//! Bounds-checked cursor over a playlist buffer.
//!
//! The cursor walks the UTF-8 bytes of a `&str` and reports positions as
//! byte offsets. Reading past the end yields `0x00`, so byte predicates that
//! reject `0x00` terminate at end of buffer without a separate length check.
//! Use [`Cursor::is_eof`] to tell a real interior NUL from the end.
//!
//! # Slicing
//!
//! Every scan loop in the scanner stops either at an ASCII byte, at the
//! first byte of a character, or at end of buffer, so the offsets handed to
//! [`Cursor::slice`] always fall on character boundaries.

/// Cursor over an immutable playlist buffer.
///
/// [`Copy`], so the scanner can take cheap snapshots for lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Current read position (byte offset into `src`).
    pos: u32,
    /// Length of `src` in bytes, saturated at `u32::MAX`.
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0.
    ///
    /// Buffers longer than `u32::MAX` bytes are scanned up to that offset.
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            source_len: u32::try_from(src.len()).unwrap_or(u32::MAX),
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        if pos < self.source_len {
            self.src.as_bytes()[pos as usize]
        } else {
            0
        }
    }

    /// Byte at the current position, `0x00` at end of buffer.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// The character starting at the current position.
    ///
    /// `None` at end of buffer.
    pub fn current_char(&self) -> Option<char> {
        self.src
            .get(self.pos as usize..self.source_len as usize)
            .and_then(|rest| rest.chars().next())
    }

    /// `true` if the bytes at the current position equal `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Advance by one byte. No-op at end of buffer.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// `true` once the cursor has reached the end of the buffer.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Extract `start..end` of the buffer.
    ///
    /// # Contract
    ///
    /// `start <= end <= source_len`, both on character boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        &self.src[start as usize..end as usize]
    }

    /// Extract the buffer from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\r`, `\n` or end of buffer.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr2(b'\r', b'\n', self.rest()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Advance to the next byte that can end a quoted string.
    /// Returns the byte found, or 0 for end of buffer.
    ///
    /// Delimiters: `"`, `\r`, `\n`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_quote_delim(&mut self) -> u8 {
        match memchr::memchr3(b'"', b'\r', b'\n', self.rest()) {
            Some(offset) => {
                self.pos += offset as u32;
                self.current()
            }
            None => {
                self.pos = self.source_len;
                0
            }
        }
    }

    fn rest(&self) -> &'a [u8] {
        &self.src.as_bytes()[self.pos as usize..self.source_len as usize]
    }
}

#[cfg(test)]
mod tests;
