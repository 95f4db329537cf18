// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_chariter`
//!
//! Cursor-based character iteration over byte buffers.
//!
//! Rust uses UTF-8 to represent text in [String], a variable width encoding in
//! which each character takes between 1 and 4 bytes, and a user-perceived
//! character (grapheme cluster) can span several code points on top of that.
//! Any code that walks a buffer "one character at a time" therefore has to
//! keep two positions in sync: the logical character count and the physical
//! byte offset. This crate packages that bookkeeping as a small family of
//! cursors sharing one capability contract.
//!
//! # The two indices
//!
//! | Type                  | Meaning                           |
//! |:----------------------|:----------------------------------|
//! | [`CharIndex`]         | Logical character count from 0    |
//! | [`ByteIndex`]         | Physical byte offset from 0       |
//!
//! Both are signed: stepping is allowed to overshoot either end of the buffer,
//! which parks the cursor in an *invalid but well-defined* state ([`valid`]
//! reports `false`, [`current`] is empty) from which it can step back into
//! range. Nothing in the traversal API errors or panics for out-of-range
//! positions.
//!
//! ```text
//! String: "aЯb"
//!
//! ByteIndex: 0 1 2 3
//! Content:  [a][Я--][b]
//!
//! CharIndex: 0   1   2
//! ```
//!
//! # The cursors
//!
//! | Cursor                     | Step unit                | Forward | Backward |
//! |:---------------------------|:-------------------------|:--------|:---------|
//! | [`FixedWidthCursor`]       | constant-width chunk     | O(1)    | O(1)     |
//! | [`Utf8Cursor`]             | UTF-8 code point         | O(step) | O(origin distance) |
//! | [`GraphemeClusterCursor`]  | extended grapheme cluster| O(step) | O(origin distance) |
//!
//! The variable-width cursors cannot infer unit widths walking backward, so a
//! negative step is replayed forward from the origin: a documented cost, not
//! an implementation accident. All three are `Copy`-cheap slice + offset
//! records; hold on to earlier values when cheap backtracking matters.
//!
//! # Example
//!
//! ```
//! use r3bl_chariter::{KeyMode, StringCursor, Utf8Cursor};
//!
//! let mut cursor = Utf8Cursor::new("aЯb".as_bytes());
//! let mut byte_keys = Vec::new();
//! while cursor.valid() {
//!     byte_keys.push(cursor.key(KeyMode::Bytes));
//!     cursor.next(1);
//! }
//! assert_eq!(byte_keys, vec![0, 1, 3]);
//! ```
//!
//! Or drive it through the [`Iterator`] adapter:
//!
//! ```
//! use r3bl_chariter::GraphemeClusterCursor;
//!
//! let clusters: Vec<_> = GraphemeClusterCursor::new("H🙏🏽!")
//!     .into_iter()
//!     .map(|(_, unit)| unit.len())
//!     .collect();
//! assert_eq!(clusters, vec![1, 8, 1]); // 🙏🏽 is one step of 8 bytes.
//! ```
//!
//! [`valid`]: StringCursor::valid
//! [`current`]: StringCursor::current

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it). The cfg_attr
// ensures test code within the library can also use .unwrap() freely.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod cursor;
pub mod error;
pub mod units;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use cursor::*;
pub use error::*;
pub use units::*;
