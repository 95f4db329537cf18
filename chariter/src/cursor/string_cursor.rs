// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The cursor capability contract shared by every string cursor in this crate.
//!
//! [`StringCursor`] defines the minimal set of operations a steppable, peekable
//! byte-sequence cursor must provide, plus the read-and-advance sugar that is
//! layered generically on top of that set. The concrete strategies
//! ([`FixedWidthCursor`], [`Utf8Cursor`], [`GraphemeClusterCursor`]) differ
//! only in how they compute the byte width of the unit under the cursor.
//!
//! None of the traversal operations error or panic for out-of-range positions:
//! an out-of-range cursor is a normal state that reports `false` from
//! [`StringCursor::valid`] and an empty slice from [`StringCursor::current`].
//! The only fallible operation is [`StringCursor::set_buffer`], and only for
//! cursors that validate the buffer when it is installed.
//!
//! [`FixedWidthCursor`]: crate::FixedWidthCursor
//! [`Utf8Cursor`]: crate::Utf8Cursor
//! [`GraphemeClusterCursor`]: crate::GraphemeClusterCursor

use strum_macros::{Display, EnumString};

use crate::{ByteIndex, CharIndex, CursorError};

/// Selects which of the two bookkeeping positions [`StringCursor::key`]
/// reports.
#[derive(Debug, Display, EnumString, Copy, Clone, PartialEq, Eq, Default)]
pub enum KeyMode {
    /// Report the logical character count (default).
    #[default]
    Chars,
    /// Report the physical byte offset.
    Bytes,
}

/// Capability contract for cursor-based traversal of a byte buffer, one
/// "character" at a time.
///
/// The buffer lifetime `'buf` is a trait parameter so that every yielded slice
/// borrows from the buffer, not from the cursor. This is what lets the provided
/// methods hand out a unit *and* advance in one call without fighting the
/// borrow checker, and what lets [`CursorElements`] be a plain [`Iterator`].
///
/// # Cursor states
///
/// The pair ([`char_index`], [`byte_index`]) is kept in sync by [`next`] and
/// [`rewind`]. Stepping past either end of the buffer is tolerated: the cursor
/// becomes invalid ([`valid`] is `false`, [`current`] is empty, [`char_width`]
/// is 0) but stays well-defined for future moves.
///
/// # Examples
///
/// ```
/// use r3bl_chariter::{StringCursor, Utf8Cursor};
///
/// let mut cursor = Utf8Cursor::new("aЯb".as_bytes());
/// let mut reassembled = Vec::new();
/// while let Some(unit) = cursor.read_and_advance() {
///     reassembled.extend_from_slice(unit);
/// }
/// assert_eq!(reassembled, "aЯb".as_bytes());
/// assert!(!cursor.valid());
/// ```
///
/// [`char_index`]: Self::char_index
/// [`byte_index`]: Self::byte_index
/// [`next`]: Self::next
/// [`rewind`]: Self::rewind
/// [`valid`]: Self::valid
/// [`current`]: Self::current
/// [`char_width`]: Self::char_width
/// [`CursorElements`]: crate::CursorElements
pub trait StringCursor<'buf> {
    /// The byte sequence under iteration.
    #[must_use]
    fn buffer(&self) -> &'buf [u8];

    /// Logical character position, counted from 0.
    #[must_use]
    fn char_index(&self) -> CharIndex;

    /// Physical byte offset, counted from 0. While the cursor is valid this is
    /// always a boundary between units in the buffer's encoding.
    #[must_use]
    fn byte_index(&self) -> ByteIndex;

    /// Byte width of the unit under the cursor; 0 when the cursor is out of
    /// bounds.
    #[must_use]
    fn char_width(&self) -> usize;

    /// Advances the cursor by `step` logical positions; a negative `step`
    /// retreats. Tolerates moving past either boundary without panicking: the
    /// cursor becomes invalid but remains well-defined.
    ///
    /// Cost is implementation-defined; see each cursor's docs. In particular
    /// the variable-width cursors implement backward motion by re-scanning
    /// from the origin, which is O(distance-from-start), not O(step).
    fn next(&mut self, step: isize);

    /// Resets the cursor to position (0, 0).
    fn rewind(&mut self);

    /// Replaces the buffer and resets the cursor atomically: there is no
    /// partial state in which the new buffer is visible at the old position.
    ///
    /// # Errors
    ///
    /// Buffer-replacement-time validation is the one point where a cursor may
    /// refuse input: [`crate::GraphemeClusterCursor`] rejects byte sequences
    /// that are not valid UTF-8. The byte-geometry cursors never fail.
    fn set_buffer(&mut self, buffer: &'buf [u8]) -> Result<(), CursorError>;

    /// `true` iff the cursor byte offset is within `[0, buffer.len())`.
    #[must_use]
    fn valid(&self) -> bool {
        usize::try_from(self.byte_index().as_isize())
            .is_ok_and(|byte| byte < self.buffer().len())
    }

    /// The [`char_width`]-byte slice at the cursor, clamped to the end of the
    /// buffer. Possibly shorter than the unit width, and empty when the
    /// cursor is out of bounds. Never panics.
    ///
    /// [`char_width`]: Self::char_width
    #[must_use]
    fn current(&self) -> &'buf [u8] {
        let buf = self.buffer();
        let Ok(start) = usize::try_from(self.byte_index().as_isize()) else {
            return &[];
        };
        if start >= buf.len() {
            return &[];
        }
        let end = (start + self.char_width()).min(buf.len());
        &buf[start..end]
    }

    /// Logical position of the cursor, as a character count or a byte offset
    /// depending on `mode`.
    #[must_use]
    fn key(&self, mode: KeyMode) -> isize {
        match mode {
            KeyMode::Chars => self.char_index().as_isize(),
            KeyMode::Bytes => self.byte_index().as_isize(),
        }
    }

    /// Returns [`current`] and advances by one position. Returns `None`
    /// without advancing when the cursor is already invalid.
    ///
    /// [`current`]: Self::current
    fn read_and_advance(&mut self) -> Option<&'buf [u8]> {
        if !self.valid() {
            return None;
        }
        let unit = self.current();
        self.next(1);
        Some(unit)
    }

    /// Returns the (key, unit) pair at the cursor and advances by one
    /// position. Returns `None` without advancing when the cursor is already
    /// invalid. Calling this repeatedly from a rewound cursor enumerates every
    /// position exactly once.
    fn read_element_and_advance(&mut self) -> Option<(CharIndex, &'buf [u8])> {
        if !self.valid() {
            return None;
        }
        let key = self.char_index();
        let unit = self.current();
        self.next(1);
        Some((key, unit))
    }

    /// Jumps to an absolute character position by applying the relative step
    /// through [`next`]. Backward jumps on the variable-width cursors re-derive
    /// every unit width from the origin, so they land on exact unit boundaries
    /// at O(target) cost.
    ///
    /// [`next`]: Self::next
    fn seek_to_char(&mut self, arg_target: impl Into<CharIndex>) {
        let target = arg_target.into();
        let step = target.as_isize().saturating_sub(self.char_index().as_isize());
        self.next(step);
    }
}
