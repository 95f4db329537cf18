// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ByteIndex, CharIndex, CursorError, StringCursor, byte_index, char_index};

/// Cursor over a buffer in which every character occupies the same, statically
/// known number of bytes (fixed-width legacy encodings, records, etc.).
///
/// Stepping is pure arithmetic (`char_index += step`, `byte_index += step *
/// width`) with no bounds clamping, so every step is O(1) and `next(k)`
/// followed by `next(-k)` always restores the cursor exactly, even when `k`
/// overshoots either end of the buffer.
///
/// # Examples
///
/// ```
/// use r3bl_chariter::{FixedWidthCursor, StringCursor};
///
/// let mut cursor = FixedWidthCursor::new(b"1234567890", 2);
/// assert_eq!(cursor.current(), b"12");
/// cursor.next(1);
/// assert_eq!(cursor.current(), b"34");
/// cursor.next(-1);
/// assert_eq!(cursor.current(), b"12");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedWidthCursor<'buf> {
    buffer: &'buf [u8],
    width: usize,
    char_index: CharIndex,
    byte_index: ByteIndex,
}

impl<'buf> FixedWidthCursor<'buf> {
    /// Creates a cursor at position (0, 0). Supplying a sensible `width`
    /// (`>= 1`) is a caller contract; it is not validated in release builds.
    #[must_use]
    pub fn new(buffer: &'buf [u8], width: usize) -> Self {
        debug_assert!(width >= 1, "character width must be at least 1 byte");
        Self {
            buffer,
            width,
            char_index: char_index(0),
            byte_index: byte_index(0),
        }
    }

    /// The fixed byte width every character occupies.
    #[must_use]
    pub fn width(&self) -> usize { self.width }
}

impl<'buf> StringCursor<'buf> for FixedWidthCursor<'buf> {
    fn buffer(&self) -> &'buf [u8] { self.buffer }

    fn char_index(&self) -> CharIndex { self.char_index }

    fn byte_index(&self) -> ByteIndex { self.byte_index }

    fn char_width(&self) -> usize {
        if self.valid() { self.width } else { 0 }
    }

    fn next(&mut self, step: isize) {
        let width = isize::try_from(self.width).unwrap_or(isize::MAX);
        self.char_index += step;
        self.byte_index += step.saturating_mul(width);
    }

    fn rewind(&mut self) {
        self.char_index = char_index(0);
        self.byte_index = byte_index(0);
    }

    fn set_buffer(&mut self, buffer: &'buf [u8]) -> Result<(), CursorError> {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🔄 replace buffer and rewind cursor",
            cursor_kind = "fixed_width",
            new_len = buffer.len()
        );
        self.buffer = buffer;
        self.rewind();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::KeyMode;

    #[test]
    fn forward_stepping_is_arithmetic() {
        let mut cursor = FixedWidthCursor::new(b"abcdefgh", 2);
        for n in 1..=4 {
            cursor.next(1);
            assert_eq!(cursor.char_index(), crate::char_index(n));
            assert_eq!(cursor.byte_index(), crate::byte_index(n * 2));
        }
        assert!(!cursor.valid());
    }

    #[test]
    fn round_trip_restores_position_even_out_of_bounds() {
        let mut cursor = FixedWidthCursor::new(b"abcdef", 3);
        cursor.next(1);
        let (char_before, byte_before) = (cursor.char_index(), cursor.byte_index());

        for k in [1_isize, 5, 100, -1, -50] {
            cursor.next(k);
            cursor.next(-k);
            assert_eq!(cursor.char_index(), char_before);
            assert_eq!(cursor.byte_index(), byte_before);
        }
    }

    #[test]
    fn negative_positions_are_invalid_but_recoverable() {
        let mut cursor = FixedWidthCursor::new(b"abcd", 2);
        cursor.next(-3);
        assert!(!cursor.valid());
        assert_eq!(cursor.current(), b"");
        assert_eq!(cursor.key(KeyMode::Bytes), -6);
        cursor.next(3);
        assert!(cursor.valid());
        assert_eq!(cursor.current(), b"ab");
    }

    #[test]
    fn current_clamps_short_tail() {
        // 5 bytes at width 2: the final "character" is a 1-byte slice.
        let mut cursor = FixedWidthCursor::new(b"abcde", 2);
        cursor.next(2);
        assert!(cursor.valid());
        assert_eq!(cursor.current(), b"e");
    }

    #[test]
    fn set_buffer_resets_cursor() {
        let mut cursor = FixedWidthCursor::new(b"abcdef", 2);
        cursor.next(2);
        cursor.set_buffer(b"xyz").unwrap();
        assert_eq!(cursor.char_index(), crate::char_index(0));
        assert_eq!(cursor.byte_index(), crate::byte_index(0));
        assert_eq!(cursor.current(), b"xy");
    }
}
