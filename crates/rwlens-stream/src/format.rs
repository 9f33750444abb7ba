//! Outer-format sniffing.
//!
//! Most files in the ecosystem are generic chunk streams, but collision
//! archives use a 4-byte magic-tagged container instead. The body is
//! checked first; the filename extension only breaks ties when the body
//! is ambiguous.

use rwlens_common::BinaryReader;
use rwlens_version::is_valid_version;

use crate::header::HEADER_SIZE;

/// Magics of the collision container revisions.
const COLLISION_MAGICS: [&[u8; 4]; 4] = [b"COLL", b"COL2", b"COL3", b"COL4"];

/// Extensions conventionally holding generic chunk streams.
const CHUNK_EXTENSIONS: [&str; 4] = ["dff", "txd", "rws", "anm"];

/// Classified outer format of a file body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// Generic chunk stream (models, texture dictionaries, ...).
    Chunk,
    /// Magic-tagged collision archive.
    Collision,
    /// Neither format could be recognized.
    Unknown,
}

/// Classify a file body, optionally helped by its filename extension.
///
/// A collision magic wins outright. Otherwise a leading chunk header
/// with a plausible version stamp classifies the body as a chunk
/// stream, and only then is the extension hint consulted.
pub fn sniff(data: &[u8], extension_hint: Option<&str>) -> StreamKind {
    if data.len() >= 4 && COLLISION_MAGICS.iter().any(|m| data[..4] == m[..]) {
        return StreamKind::Collision;
    }

    if data.len() >= HEADER_SIZE {
        let mut reader = BinaryReader::new(data);
        reader.advance(8);
        if let Ok(version) = reader.read_u32() {
            if is_valid_version(version) {
                return StreamKind::Chunk;
            }
        }
    }

    match extension_hint.map(str::to_ascii_lowercase).as_deref() {
        Some("col") => StreamKind::Collision,
        Some(ext) if CHUNK_EXTENSIONS.contains(&ext) => StreamKind::Chunk,
        _ => StreamKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_magic_wins() {
        let mut data = b"COL3".to_vec();
        data.extend_from_slice(&[0u8; 16]);
        assert_eq!(sniff(&data, Some("dff")), StreamKind::Collision);
    }

    #[test]
    fn test_plausible_header_is_chunk() {
        let mut data = vec![0x10, 0, 0, 0, 0, 0, 0, 0];
        data.extend_from_slice(&0x36003u32.to_le_bytes());
        assert_eq!(sniff(&data, None), StreamKind::Chunk);
    }

    #[test]
    fn test_extension_breaks_ties() {
        let ambiguous = [0u8; 16];
        assert_eq!(sniff(&ambiguous, Some("col")), StreamKind::Collision);
        assert_eq!(sniff(&ambiguous, Some("TXD")), StreamKind::Chunk);
        assert_eq!(sniff(&ambiguous, None), StreamKind::Unknown);
    }
}
