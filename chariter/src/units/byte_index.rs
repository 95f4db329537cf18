// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, AddAssign, Deref, DerefMut}};

/// Represents the physical byte offset of a cursor inside its buffer.
///
/// Signed for the same reason as [`super::CharIndex`]: stepping is allowed to overshoot
/// either end of the buffer, and the overshoot must stay representable. While the cursor
/// is valid, a `ByteIndex` is always a boundary between units in the buffer's encoding
/// (it never splits a multi-byte character).
#[derive(Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct ByteIndex(pub isize);

/// Creates a new [`ByteIndex`] from a value that can be converted into one.
pub fn byte_index(arg_byte_index: impl Into<ByteIndex>) -> ByteIndex {
    arg_byte_index.into()
}

impl Debug for ByteIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ByteIndex({})", self.0)
    }
}

mod impl_core {
    use super::{Add, AddAssign, ByteIndex, Deref, DerefMut};

    impl ByteIndex {
        #[must_use]
        pub fn as_isize(&self) -> isize { self.0 }

        /// Positions before the start collapse to 0. Only meaningful while the
        /// cursor is valid.
        #[must_use]
        pub fn as_usize(&self) -> usize { usize::try_from(self.0).unwrap_or(0) }
    }

    impl Deref for ByteIndex {
        type Target = isize;
        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for ByteIndex {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }

    impl From<isize> for ByteIndex {
        fn from(it: isize) -> Self { Self(it) }
    }

    impl From<i32> for ByteIndex {
        fn from(it: i32) -> Self { Self(it as isize) }
    }

    impl From<usize> for ByteIndex {
        fn from(it: usize) -> Self { Self(isize::try_from(it).unwrap_or(isize::MAX)) }
    }

    impl Add<isize> for ByteIndex {
        type Output = Self;
        fn add(self, rhs: isize) -> Self { Self(self.0.saturating_add(rhs)) }
    }

    impl AddAssign<isize> for ByteIndex {
        fn add_assign(&mut self, rhs: isize) { self.0 = self.0.saturating_add(rhs); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_index_conversions() {
        assert_eq!(byte_index(4), ByteIndex(4));
        assert_eq!(byte_index(4_usize), ByteIndex(4));
    }

    #[test]
    fn byte_index_overshoot_is_representable() {
        let mut index = byte_index(0);
        index += -6;
        assert_eq!(index.as_isize(), -6);
        index += 6;
        assert_eq!(index, byte_index(0));
    }
}
