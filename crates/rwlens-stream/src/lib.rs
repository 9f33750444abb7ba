//! RenderWare binary stream chunk engine.
//!
//! The stream format is a tree of self-describing chunks: a 12-byte
//! header (type code, payload size, version stamp) followed by a payload
//! that may itself contain nested chunks. This crate parses arbitrary
//! buffers into a [`ChunkTree`] while tolerating corrupt or adversarial
//! size fields, classifies chunks via the [`SectionType`] table, and
//! supports round-trippable export and replacement of chunk payloads.
//!
//! # Example
//!
//! ```
//! use rwlens_stream::{editor, ChunkTree};
//!
//! // A Clump chunk with a 4-byte payload.
//! let mut data = vec![
//!     0x10, 0x00, 0x00, 0x00, // type = Clump
//!     0x04, 0x00, 0x00, 0x00, // payload size
//!     0x03, 0x60, 0x03, 0x00, // version = 3.6.0.3
//! ];
//! data.extend_from_slice(&[0xAA; 4]);
//!
//! let tree = ChunkTree::parse(&data);
//! let clump = &tree.roots()[0];
//! assert_eq!(clump.type_name(), "Clump");
//!
//! // Replace the payload and re-parse the result.
//! let edited = editor::replace_payload(&data, clump, &[1, 2, 3, 4, 5, 6])?;
//! let reparsed = ChunkTree::parse(&edited);
//! assert_eq!(reparsed.roots()[0].header.payload_size, 6);
//! # Ok::<(), rwlens_stream::Error>(())
//! ```
//!
//! Parsing is total: malformed input never returns an error. Anomalies
//! are recorded as per-node flags (`corrupt`, `stalled`, unknown type)
//! so consumers can render or query them.

pub mod editor;
mod error;
mod format;
mod header;
mod node;
mod parser;
mod section;

pub use error::{Error, Result};
pub use format::{sniff, StreamKind};
pub use header::{ChunkHeader, RawChunkHeader, HEADER_SIZE};
pub use node::{ChunkNode, ChunkTree};
pub use parser::DEFAULT_MAX_DEPTH;
pub use section::SectionType;
