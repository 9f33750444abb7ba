//! Error types for stream editing.
//!
//! Parsing itself never fails: structural anomalies become per-node flags
//! on the tree. The errors here cover the editor operations, which reject
//! caller contract violations instead of tolerating them.

use thiserror::Error;

/// Errors that can occur when exporting or replacing chunk payloads.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] rwlens_common::Error),

    /// The node's byte range is not inside the buffer it was paired with.
    /// This means the node came from a different buffer, which is a
    /// caller bug, not a data error.
    #[error(
        "chunk at offset {offset:#x} (end {end:#x}) lies outside the {buffer_len}-byte buffer"
    )]
    NodeOutOfBounds {
        offset: u64,
        end: u64,
        buffer_len: usize,
    },

    /// Replacement payload does not fit the 32-bit size field.
    #[error("replacement payload of {0} bytes exceeds the u32 size field")]
    PayloadTooLarge(usize),
}

/// Result type for stream operations.
pub type Result<T> = std::result::Result<T, Error>;
