// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor-based character traversal: the capability contract and the three
//! concrete stepping strategies layered over it.
//!
//! - [`string_cursor`]: the [`StringCursor`] contract and its provided
//!   read-and-advance helpers.
//! - [`fixed_width`]: constant-byte-width stepping, pure O(1) arithmetic.
//! - [`utf8`]: code point stepping, width derived from the leading byte.
//! - [`grapheme`]: extended grapheme cluster stepping (user-perceived
//!   characters).
//! - [`iterator`]: the [`Iterator`] adapter over any of the above.

// Attach sources.
pub mod fixed_width;
pub mod grapheme;
pub mod iterator;
pub mod string_cursor;
pub mod utf8;

// Re-export.
pub use fixed_width::*;
pub use grapheme::*;
pub use iterator::*;
pub use string_cursor::*;
pub use utf8::*;
