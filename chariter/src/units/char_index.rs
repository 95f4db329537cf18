// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, AddAssign, Deref, DerefMut}};

/// Represents the logical character position of a cursor, counted from 0.
///
/// A `CharIndex` is signed on purpose: [`StringCursor::next`] tolerates stepping past
/// either end of the buffer, so a cursor can sit at a negative or past-the-end position
/// while remaining well-defined for future forward or backward moves. Such positions
/// report `false` from [`StringCursor::valid`].
///
/// `CharIndex` values can be created using the [`char_index`] function or by converting
/// from numeric types.
///
/// # Examples
///
/// ```
/// use r3bl_chariter::{CharIndex, char_index};
///
/// let index = char_index(3);
/// assert_eq!(index, CharIndex(3));
/// assert_eq!(index.as_usize(), 3);
/// ```
///
/// [`StringCursor::next`]: crate::StringCursor::next
/// [`StringCursor::valid`]: crate::StringCursor::valid
#[derive(Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct CharIndex(pub isize);

/// Creates a new [`CharIndex`] from a value that can be converted into one.
pub fn char_index(arg_char_index: impl Into<CharIndex>) -> CharIndex {
    arg_char_index.into()
}

impl Debug for CharIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CharIndex({})", self.0)
    }
}

mod impl_core {
    use super::{Add, AddAssign, CharIndex, Deref, DerefMut};

    impl CharIndex {
        #[must_use]
        pub fn as_isize(&self) -> isize { self.0 }

        /// Positions before the start collapse to 0. Only meaningful while the
        /// cursor is valid.
        #[must_use]
        pub fn as_usize(&self) -> usize { usize::try_from(self.0).unwrap_or(0) }
    }

    impl Deref for CharIndex {
        type Target = isize;
        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for CharIndex {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }

    impl From<isize> for CharIndex {
        fn from(it: isize) -> Self { Self(it) }
    }

    impl From<i32> for CharIndex {
        fn from(it: i32) -> Self { Self(it as isize) }
    }

    impl From<usize> for CharIndex {
        fn from(it: usize) -> Self { Self(isize::try_from(it).unwrap_or(isize::MAX)) }
    }

    impl Add<isize> for CharIndex {
        type Output = Self;
        fn add(self, rhs: isize) -> Self { Self(self.0.saturating_add(rhs)) }
    }

    impl AddAssign<isize> for CharIndex {
        fn add_assign(&mut self, rhs: isize) { self.0 = self.0.saturating_add(rhs); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_index_conversions() {
        assert_eq!(char_index(5), CharIndex(5));
        assert_eq!(char_index(5_usize), CharIndex(5));
        assert_eq!(char_index(-2_isize), CharIndex(-2));
    }

    #[test]
    fn char_index_as_usize_clamps_negative() {
        assert_eq!(char_index(-2_isize).as_usize(), 0);
        assert_eq!(char_index(-2_isize).as_isize(), -2);
    }

    #[test]
    fn char_index_arithmetic_saturates() {
        let mut index = char_index(isize::MAX);
        index += 1;
        assert_eq!(index.as_isize(), isize::MAX);
        assert_eq!(char_index(1) + 2, char_index(3));
    }
}
