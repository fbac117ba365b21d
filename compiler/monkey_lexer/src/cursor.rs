//! Byte cursor with one byte of lookahead.
//!
//! The cursor tracks two offsets into the source: `position`, the byte
//! currently under examination, and `read_position`, the next byte to read.
//! `read_position == position + 1` always holds. When `position` reaches the
//! end of the source, [`current()`](Cursor::current) yields the null sentinel
//! (`0x00`) and further advances are no-ops, so the cursor never moves past
//! `len`.
//!
//! # Interior Null Bytes
//!
//! A source may contain NUL bytes. The cursor distinguishes them from EOF by
//! comparing `position` against the source length: a null at
//! `position < len` is an ordinary (illegal) byte, a null at
//! `position == len` is the sentinel.

/// Null sentinel returned once the cursor has passed the last byte.
pub const SENTINEL: u8 = 0;

/// Cursor over a borrowed source string.
///
/// The cursor is [`Copy`], enabling cheap state snapshots.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Index of the byte under examination.
    position: usize,
    /// Index of the next byte to read. Always `position + 1`.
    read_position: usize,
    /// Byte at `position`, or [`SENTINEL`] at end of input.
    current: u8,
}

impl<'a> Cursor<'a> {
    /// Create a cursor with the first byte (or the sentinel, for empty
    /// input) as the current byte.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            read_position: 1,
            current: byte_at(source, 0),
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns [`SENTINEL`] at EOF. Interior null bytes also return `0x00`;
    /// use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Returns the byte at `read_position` without moving, or [`SENTINEL`]
    /// past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        byte_at(self.source, self.read_position)
    }

    /// Advance the cursor by one byte. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }
        self.position = self.read_position;
        self.read_position += 1;
        self.current = byte_at(self.source, self.position);
    }

    /// Advance the cursor by `n` bytes, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Offset of the next byte to read.
    #[inline]
    pub fn read_pos(&self) -> usize {
        self.read_position
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Extract the source text between two offsets.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source and on UTF-8 character
    /// boundaries. The scanner only produces such offsets: token runs are
    /// ASCII, and non-ASCII characters are consumed whole.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Extract the source text from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.position)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of `pred`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current) {
            self.advance();
        }
    }

    /// Advance past whitespace: space, tab, newline and carriage return.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current);
        self.advance_n(width);
    }
}

/// Byte at `index`, or [`SENTINEL`] when out of bounds.
#[inline]
fn byte_at(source: &str, index: usize) -> u8 {
    source.as_bytes().get(index).copied().unwrap_or(SENTINEL)
}

/// Whitespace skipped between tokens.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
