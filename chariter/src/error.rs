// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error type for buffer validation.
//!
//! Out-of-range cursor positions are a normal, representable state
//! ([`crate::StringCursor::valid`] returns `false`), not an error. The only
//! operations that can fail are the ones that validate a buffer when it is
//! installed: [`crate::GraphemeClusterCursor::try_from_bytes`] and
//! [`crate::StringCursor::set_buffer`] on cursors that require valid UTF-8.

/// Error raised when a cursor validates a buffer at construction or
/// replacement time.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CursorError {
    /// The byte sequence is not valid UTF-8, so it cannot be segmented into
    /// grapheme clusters.
    #[error("buffer is not valid UTF-8 (valid up to byte {valid_up_to})")]
    #[diagnostic(
        code(r3bl_chariter::invalid_utf8),
        help(
            "Grapheme cluster segmentation requires valid UTF-8. For raw byte \
             buffers use Utf8Cursor (geometric segmentation, no validation) or \
             FixedWidthCursor."
        )
    )]
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix of the rejected buffer.
        valid_up_to: usize,
    },
}
