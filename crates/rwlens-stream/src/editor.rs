//! Export and replacement of chunk payloads.
//!
//! These are pure functions over `(buffer, node)` pairs: the tree is
//! never mutated, and a replacement produces a brand-new buffer the
//! caller must re-parse to obtain consistent offsets.

use rwlens_common::BinaryReader;

use crate::header::{ChunkHeader, HEADER_SIZE};
use crate::node::ChunkNode;
use crate::section::SectionType;
use crate::{Error, Result};

/// Validate that the node's byte range lies inside `buffer`.
///
/// A node paired with a buffer it was not parsed from is a caller bug
/// and is rejected, never tolerated.
fn check_bounds(buffer: &[u8], node: &ChunkNode) -> Result<(usize, usize)> {
    let offset = node.header.offset;
    let end = node.header.end();
    if end > buffer.len() as u64 {
        return Err(Error::NodeOutOfBounds {
            offset,
            end,
            buffer_len: buffer.len(),
        });
    }
    Ok((offset as usize, end as usize))
}

/// Export a chunk verbatim: header plus payload.
pub fn export_full<'a>(buffer: &'a [u8], node: &ChunkNode) -> Result<&'a [u8]> {
    let (start, end) = check_bounds(buffer, node)?;
    Ok(&buffer[start..end])
}

/// Export a chunk's payload region.
///
/// For the named-asset type the payload wraps the actual asset in a
/// sub-record; when that record is self-consistent (its declared length
/// fits the payload) the inner asset bytes are returned instead. Any
/// inconsistency falls back to the raw payload.
pub fn export_payload<'a>(buffer: &'a [u8], node: &ChunkNode) -> Result<&'a [u8]> {
    let (start, end) = check_bounds(buffer, node)?;
    let payload = &buffer[start + HEADER_SIZE..end];

    if node.section == SectionType::TextureNative {
        if let Some(inner) = unwrap_named_asset(payload) {
            return Ok(inner);
        }
    }
    Ok(payload)
}

/// Locate the inner asset bytes of a named-asset sub-record: 4 skipped
/// bytes, a 4-byte length, then the asset itself.
fn unwrap_named_asset(payload: &[u8]) -> Option<&[u8]> {
    let mut reader = BinaryReader::new(payload);
    reader.advance(4);
    let len = reader.read_u32().ok()? as usize;
    reader.read_bytes(len).ok()
}

/// Replace a chunk's payload, producing a new buffer.
///
/// The chunk's header is rewritten with the new payload size; bytes
/// before and after the chunk are carried over unchanged. Sizes of
/// enclosing ancestor chunks are deliberately not adjusted: this edits
/// exactly one chunk, and propagating the size delta upward is the
/// caller's responsibility (typically by re-parsing and re-checking the
/// result).
pub fn replace_payload(buffer: &[u8], node: &ChunkNode, new_payload: &[u8]) -> Result<Vec<u8>> {
    let (start, end) = check_bounds(buffer, node)?;
    let new_size = u32::try_from(new_payload.len())
        .map_err(|_| Error::PayloadTooLarge(new_payload.len()))?;

    let header = ChunkHeader {
        type_code: node.header.type_code,
        payload_size: new_size,
        version_code: node.header.version_code,
        offset: node.header.offset,
    };

    let mut out = Vec::with_capacity(buffer.len() - (end - start) + HEADER_SIZE + new_payload.len());
    out.extend_from_slice(&buffer[..start]);
    out.extend_from_slice(&header.encode());
    out.extend_from_slice(new_payload);
    out.extend_from_slice(&buffer[end..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ChunkTree;

    fn chunk(type_code: u32, version: u32, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
        out.extend_from_slice(&type_code.to_le_bytes());
        out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        out.extend_from_slice(&version.to_le_bytes());
        out.extend_from_slice(payload);
        out
    }

    #[test]
    fn test_export_full_is_verbatim() {
        let inner = chunk(0x01, 0x36003, &[1, 2, 3, 4]);
        let data = chunk(0x10, 0x36003, &inner);

        let tree = ChunkTree::parse(&data);
        let child = &tree.roots()[0].children[0];

        assert_eq!(export_full(&data, child).unwrap(), inner.as_slice());
    }

    #[test]
    fn test_export_payload_plain() {
        let data = chunk(0x0F, 0x36003, &[9, 9, 9]);
        let tree = ChunkTree::parse(&data);

        assert_eq!(
            export_payload(&data, &tree.roots()[0]).unwrap(),
            &[9, 9, 9]
        );
    }

    #[test]
    fn test_export_payload_unwraps_named_asset() {
        let mut payload = vec![0x00, 0x00, 0x00, 0x00];
        payload.extend_from_slice(&4u32.to_le_bytes());
        payload.extend_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]);
        payload.extend_from_slice(&[0u8; 3]); // trailing bytes outside the record
        let data = chunk(0x15, 0x36003, &payload);

        let tree = ChunkTree::parse(&data);
        assert_eq!(
            export_payload(&data, &tree.roots()[0]).unwrap(),
            &[0xAA, 0xBB, 0xCC, 0xDD]
        );
    }

    #[test]
    fn test_export_payload_inconsistent_record_falls_back() {
        // Declared inner length exceeds the remaining payload.
        let mut payload = vec![0x00, 0x00, 0x00, 0x00];
        payload.extend_from_slice(&100u32.to_le_bytes());
        payload.extend_from_slice(&[0xAA, 0xBB]);
        let data = chunk(0x15, 0x36003, &payload);

        let tree = ChunkTree::parse(&data);
        assert_eq!(
            export_payload(&data, &tree.roots()[0]).unwrap(),
            payload.as_slice()
        );
    }

    #[test]
    fn test_export_full_reparses_standalone() {
        let inner = chunk(0x0F, 0x36003, &[5, 6, 7, 8]);
        let data = chunk(0x1A, 0x36003, &inner);

        let tree = ChunkTree::parse(&data);
        let child = &tree.roots()[0].children[0];
        let exported = export_full(&data, child).unwrap();

        let standalone = ChunkTree::parse(exported);
        assert_eq!(standalone.roots().len(), 1);
        let node = &standalone.roots()[0];
        assert_eq!(node.header.type_code, child.header.type_code);
        assert_eq!(node.header.payload_size, child.header.payload_size);
        assert_eq!(node.header.version_code, child.header.version_code);
    }

    #[test]
    fn test_node_from_other_buffer_rejected() {
        let big = chunk(0x10, 0x36003, &[0u8; 32]);
        let small = chunk(0x10, 0x36003, &[]);

        let tree = ChunkTree::parse(&big);
        let err = export_full(&small, &tree.roots()[0]).unwrap_err();
        assert!(matches!(err, Error::NodeOutOfBounds { .. }));
    }

    #[test]
    fn test_replace_payload_rewrites_header_and_splices() {
        let first = chunk(0x0E, 0x36003, &[1, 1, 1, 1]);
        let target = chunk(0x0F, 0x36003, &[2, 2]);
        let last = chunk(0x03, 0x36003, &[3]);

        let mut data = first.clone();
        data.extend_from_slice(&target);
        data.extend_from_slice(&last);

        let tree = ChunkTree::parse(&data);
        let node = tree.find_at_offset(first.len() as u64).unwrap();

        let new_payload = [7u8; 5];
        let out = replace_payload(&data, node, &new_payload).unwrap();

        // Prefix and suffix bytes are untouched.
        assert_eq!(&out[..first.len()], first.as_slice());
        assert_eq!(&out[out.len() - last.len()..], last.as_slice());

        // The re-parsed tree sees the chunk at the same offset with the
        // new size and bytes.
        let reparsed = ChunkTree::parse(&out);
        let edited = reparsed.find_at_offset(first.len() as u64).unwrap();
        assert_eq!(edited.header.type_code, 0x0F);
        assert_eq!(edited.header.payload_size, 5);
        assert_eq!(export_payload(&out, edited).unwrap(), &new_payload);
    }
}
