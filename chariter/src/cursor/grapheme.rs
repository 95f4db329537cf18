// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Grapheme cluster stepping over the same cursor contract.
//!
//! A UTF-8 code point is not a user-perceived character: `🙏🏽` is two code
//! points (`'🙏'` + `'🏽'`) but one grapheme cluster, and `"a" + U+0301` renders
//! as the single character `á`. [`Utf8Cursor`](crate::Utf8Cursor) steps the
//! former as two positions; [`GraphemeClusterCursor`] steps it as one. Cluster
//! boundaries come from [`unicode_segmentation`], not from [`str::chars()`],
//! which splits compound clusters apart.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::{ByteIndex, CharIndex, CursorError, StringCursor, byte_index, char_index};

/// Cursor over a UTF-8 string, one extended grapheme cluster at a time.
///
/// Unlike the byte-geometry cursors, this one requires its buffer to be valid
/// UTF-8 (cluster segmentation is undefined on arbitrary bytes), so
/// construction from bytes and [`StringCursor::set_buffer`] validate and can
/// fail with [`CursorError::InvalidUtf8`]. Construction from `&str` is
/// infallible.
///
/// Backward stepping shares the replay-from-origin semantics (and cost) of
/// [`Utf8Cursor`](crate::Utf8Cursor).
///
/// # Examples
///
/// ```
/// use r3bl_chariter::{GraphemeClusterCursor, StringCursor};
///
/// let mut cursor = GraphemeClusterCursor::new("H🙏🏽!");
/// cursor.next(1);
/// assert_eq!(cursor.current_grapheme(), "🙏🏽"); // One step, 8 bytes.
/// assert_eq!(cursor.char_width(), 8);
/// assert_eq!(cursor.display_width(), 2);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GraphemeClusterCursor<'buf> {
    buffer: &'buf str,
    char_index: CharIndex,
    byte_index: ByteIndex,
}

impl<'buf> GraphemeClusterCursor<'buf> {
    /// Creates a cursor at position (0, 0).
    #[must_use]
    pub fn new(buffer: &'buf str) -> Self {
        Self {
            buffer,
            char_index: char_index(0),
            byte_index: byte_index(0),
        }
    }

    /// Creates a cursor over a byte buffer, validating it as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::InvalidUtf8`] when the buffer is not valid
    /// UTF-8, carrying the length of the longest valid prefix.
    pub fn try_from_bytes(buffer: &'buf [u8]) -> Result<Self, CursorError> {
        let buffer = std::str::from_utf8(buffer).map_err(|err| {
            CursorError::InvalidUtf8 {
                valid_up_to: err.valid_up_to(),
            }
        })?;
        Ok(Self::new(buffer))
    }

    /// The buffer as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &'buf str { self.buffer }

    /// The grapheme cluster under the cursor as a string slice; empty when the
    /// cursor is out of bounds. Slicing is safe because the cursor only ever
    /// rests on cluster boundaries.
    #[must_use]
    pub fn current_grapheme(&self) -> &'buf str {
        let Ok(start) = usize::try_from(self.byte_index.as_isize()) else {
            return "";
        };
        if start >= self.buffer.len() {
            return "";
        }
        let end = (start + self.char_width()).min(self.buffer.len());
        &self.buffer[start..end]
    }

    /// Terminal display width of the cluster under the cursor, via
    /// [`unicode_width`]. Not the same thing as its byte width: `🙏🏽` is 8
    /// bytes but 2 columns.
    #[must_use]
    pub fn display_width(&self) -> usize {
        UnicodeWidthStr::width(self.current_grapheme())
    }
}

impl<'buf> From<&'buf str> for GraphemeClusterCursor<'buf> {
    fn from(it: &'buf str) -> Self { Self::new(it) }
}

impl<'buf> StringCursor<'buf> for GraphemeClusterCursor<'buf> {
    fn buffer(&self) -> &'buf [u8] { self.buffer.as_bytes() }

    fn char_index(&self) -> CharIndex { self.char_index }

    fn byte_index(&self) -> ByteIndex { self.byte_index }

    /// Byte length of the grapheme cluster under the cursor; 0 once the
    /// buffer is exhausted.
    fn char_width(&self) -> usize {
        match usize::try_from(self.byte_index.as_isize()) {
            Ok(byte) if byte < self.buffer.len() => self.buffer[byte..]
                .graphemes(/* extended grapheme clusters */ true)
                .next()
                .map_or(0, str::len),
            _ => 0,
        }
    }

    fn next(&mut self, step: isize) {
        match step {
            0 => {}
            step if step > 0 => {
                for _ in 0..step {
                    let width = isize::try_from(self.char_width()).unwrap_or(0);
                    self.byte_index += width;
                    self.char_index += 1;
                }
            }
            _ => {
                let target = self.char_index.as_isize().saturating_add(step);
                self.rewind();
                if target > 0 {
                    self.next(target);
                }
            }
        }
    }

    fn rewind(&mut self) {
        self.char_index = char_index(0);
        self.byte_index = byte_index(0);
    }

    fn set_buffer(&mut self, buffer: &'buf [u8]) -> Result<(), CursorError> {
        let buffer = std::str::from_utf8(buffer).map_err(|err| {
            CursorError::InvalidUtf8 {
                valid_up_to: err.valid_up_to(),
            }
        })?;
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🔄 replace buffer and rewind cursor",
            cursor_kind = "grapheme_cluster",
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
    fn jumbo_emoji_is_one_step() {
        let mut cursor = GraphemeClusterCursor::new("H🙏🏽!");
        assert_eq!(cursor.current_grapheme(), "H");
        cursor.next(1);
        assert_eq!(cursor.current_grapheme(), "🙏🏽");
        assert_eq!(cursor.char_width(), 8);
        cursor.next(1);
        assert_eq!(cursor.current_grapheme(), "!");
        assert_eq!(cursor.key(KeyMode::Chars), 2);
        assert_eq!(cursor.key(KeyMode::Bytes), 9);
    }

    #[test]
    fn combining_accent_is_one_step() {
        // 'a' followed by U+0301 combining acute accent.
        let text = "a\u{0301}b";
        let mut cursor = GraphemeClusterCursor::new(text);
        assert_eq!(cursor.char_width(), 3);
        cursor.next(1);
        assert_eq!(cursor.current_grapheme(), "b");
        assert_eq!(cursor.char_index(), crate::char_index(1));
    }

    #[test]
    fn backward_stepping_lands_on_cluster_boundaries() {
        let mut cursor = GraphemeClusterCursor::new("a🙏🏽b");
        cursor.next(2);
        assert_eq!(cursor.current_grapheme(), "b");
        cursor.next(-1);
        assert_eq!(cursor.current_grapheme(), "🙏🏽");
        assert_eq!(cursor.byte_index(), crate::byte_index(1));
    }

    #[test]
    fn display_width_differs_from_byte_width() {
        let mut cursor = GraphemeClusterCursor::new("🙏🏽");
        assert_eq!(cursor.char_width(), 8);
        assert_eq!(cursor.display_width(), 2);
        cursor.next(1);
        assert_eq!(cursor.display_width(), 0);
    }

    #[test]
    fn try_from_bytes_rejects_malformed_input() {
        let bytes = [b'o', b'k', 0xFF, b'x'];
        let result = GraphemeClusterCursor::try_from_bytes(&bytes);
        assert!(matches!(
            result,
            Err(CursorError::InvalidUtf8 { valid_up_to: 2 })
        ));
    }

    #[test]
    fn set_buffer_validates_and_resets() {
        let mut cursor = GraphemeClusterCursor::new("abc");
        cursor.next(2);
        assert!(cursor.set_buffer(&[0xC0]).is_err());
        // Failed replacement leaves the cursor untouched.
        assert_eq!(cursor.char_index(), crate::char_index(2));

        cursor.set_buffer("世界".as_bytes()).unwrap();
        assert_eq!(cursor.char_index(), crate::char_index(0));
        assert_eq!(cursor.current_grapheme(), "世");
    }
}
