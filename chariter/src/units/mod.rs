// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Index newtypes for cursor position bookkeeping.
//!
//! A cursor tracks two positions that must never be confused with one another:
//! the logical character count ([`CharIndex`]) and the physical byte offset
//! ([`ByteIndex`]). Mixing the two is the classic off-by-a-multibyte-character
//! bug, so each gets its own type.

// Attach.
pub mod byte_index;
pub mod char_index;

// Re-export.
pub use byte_index::*;
pub use char_index::*;
