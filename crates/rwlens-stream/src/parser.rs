//! Recursive-descent chunk tree parser.
//!
//! The parser walks a byte buffer with a cursor bounded by a `limit`: the
//! file length at the root, then the end of each chunk's payload for its
//! children. Malformed input never raises; anomalies become per-node
//! flags so a consumer can render or query them.

use rwlens_common::BinaryReader;
use rwlens_version::{catalog, VersionSetCatalog};

use crate::header::{ChunkHeader, RawChunkHeader, HEADER_SIZE};
use crate::node::{ChunkNode, ChunkTree};
use crate::section::SectionType;

/// Default recursion depth budget. Real streams nest a handful of levels;
/// the budget only exists to bound adversarial self-nesting input.
pub const DEFAULT_MAX_DEPTH: usize = 32;

impl ChunkTree {
    /// Parse a buffer into a chunk tree, resolving version displays
    /// against the process-wide default catalog.
    ///
    /// Parsing is total: truncated, oversized, or degenerate chunks are
    /// flagged on their nodes (`corrupt`, `stalled`) and recovery
    /// continues at the nearest enclosing scope.
    pub fn parse(data: &[u8]) -> ChunkTree {
        Self::parse_with(data, catalog(), DEFAULT_MAX_DEPTH)
    }

    /// Parse with an explicit recursion depth budget. When the budget is
    /// exhausted, nodes at the cutoff are still recorded but their
    /// children are not explored.
    pub fn parse_with_depth(data: &[u8], max_depth: usize) -> ChunkTree {
        Self::parse_with(data, catalog(), max_depth)
    }

    /// Parse with an explicit catalog and depth budget.
    pub fn parse_with(data: &[u8], catalog: &VersionSetCatalog, max_depth: usize) -> ChunkTree {
        ChunkTree {
            roots: parse_level(data, 0, data.len(), max_depth, catalog),
        }
    }
}

/// Parse the sibling sequence in `[cursor, limit)`.
fn parse_level(
    data: &[u8],
    start: usize,
    limit: usize,
    depth: usize,
    catalog: &VersionSetCatalog,
) -> Vec<ChunkNode> {
    let mut nodes = Vec::new();
    let mut cursor = start;

    // Fewer than HEADER_SIZE bytes left is normal termination.
    while limit.saturating_sub(cursor) >= HEADER_SIZE {
        let offset = cursor;
        let mut reader = BinaryReader::new_at(data, offset);
        let raw: RawChunkHeader = match reader.read_struct() {
            Ok(raw) => raw,
            // Unreachable given the loop guard, but never panic on input.
            Err(_) => break,
        };
        let header = ChunkHeader::from_raw(raw, offset as u64);
        let section = SectionType::from_code(header.type_code);

        let mut node = ChunkNode {
            header,
            section,
            version_display: catalog.display_string(header.version_code),
            name: None,
            corrupt: false,
            stalled: false,
            children: Vec::new(),
        };

        let payload_start = offset + HEADER_SIZE;
        let end = payload_start + header.payload_size as usize;

        if end > limit {
            // The declared payload runs past the enclosing region. Assume
            // the corruption invalidates the rest of this level: flag the
            // node, keep it, and stop here.
            node.corrupt = true;
            nodes.push(node);
            break;
        }

        if section == SectionType::TextureNative {
            node.name = detect_asset_name(&data[payload_start..end]);
        }

        if header.payload_size as usize >= HEADER_SIZE && depth > 0 {
            node.children = parse_level(data, payload_start, end, depth - 1, catalog);
        }

        if end <= offset {
            // A size field that fails to move the cursor forward would
            // loop forever; flag it and abandon this sibling level.
            node.stalled = true;
            nodes.push(node);
            break;
        }

        nodes.push(node);
        cursor = end;
    }

    nodes
}

/// Peek at the first sub-record of a named-asset payload and decode the
/// embedded name: skip 4 bytes, read a 4-byte length, read that many
/// bytes, then strip trailing NUL/0xCD padding and non-printable bytes.
///
/// Purely for display. Any inconsistency yields `None` and the caller
/// falls back to the plain type name.
pub(crate) fn detect_asset_name(payload: &[u8]) -> Option<String> {
    let mut reader = BinaryReader::new(payload);
    reader.advance(4);
    let len = reader.read_u32().ok()? as usize;
    let raw = reader.read_bytes(len).ok()?;

    // Names are NUL-terminated inside a padded field.
    let terminated = match rwlens_common::memchr::memchr(0, raw) {
        Some(pos) => &raw[..pos],
        None => raw,
    };
    let trimmed: &[u8] = {
        let mut bytes = terminated;
        while let [rest @ .., 0xCD] = bytes {
            bytes = rest;
        }
        bytes
    };

    let name: String = trimmed
        .iter()
        .copied()
        .filter(|b| (0x20..=0x7E).contains(b))
        .map(char::from)
        .collect();

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(type_code: u32, version: u32, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
        out.extend_from_slice(&type_code.to_le_bytes());
        out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        out.extend_from_slice(&version.to_le_bytes());
        out.extend_from_slice(payload);
        out
    }

    #[test]
    fn test_sub_header_buffer_is_empty_tree() {
        let tree = ChunkTree::parse(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_single_clump_chunk() {
        let mut data = vec![
            0x10, 0x00, 0x00, 0x00, // type = Clump
            0x14, 0x00, 0x00, 0x00, // size = 20
            0x03, 0x60, 0x03, 0x00, // version = 0x36003
        ];
        data.extend_from_slice(&[0xAB; 20]);

        let tree = ChunkTree::parse(&data);
        assert_eq!(tree.roots().len(), 1);

        let node = &tree.roots()[0];
        assert_eq!(node.type_name(), "Clump");
        assert!(node.version_display.contains("3.6.0.3"));
        assert!(!node.corrupt);
        assert!(!node.stalled);
    }

    #[test]
    fn test_nested_chunks() {
        let inner = chunk(0x01, 0x36003, &[0u8; 4]);
        let data = chunk(0x10, 0x36003, &inner);

        let tree = ChunkTree::parse(&data);
        assert_eq!(tree.roots().len(), 1);
        assert_eq!(tree.roots()[0].children.len(), 1);
        assert_eq!(tree.roots()[0].children[0].section, SectionType::Struct);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_oversized_chunk_flagged_corrupt_no_descent() {
        let mut data = chunk(0x10, 0x36003, &[0u8; 4]);
        // Declare 0x1000 payload bytes that are not there.
        data[4..8].copy_from_slice(&0x1000u32.to_le_bytes());

        let tree = ChunkTree::parse(&data);
        assert_eq!(tree.roots().len(), 1);
        assert!(tree.roots()[0].corrupt);
        assert!(tree.roots()[0].children.is_empty());
    }

    #[test]
    fn test_corrupt_chunk_stops_sibling_level_only() {
        // A well-formed sibling after a corrupt child: the child level
        // stops at the corruption, the outer level is unaffected.
        let mut bad_child = chunk(0x01, 0x36003, &[0u8; 4]);
        bad_child[4..8].copy_from_slice(&0xFFFFu32.to_le_bytes());
        let parent = chunk(0x10, 0x36003, &bad_child);
        let mut data = parent;
        data.extend_from_slice(&chunk(0x16, 0x36003, &[]));

        let tree = ChunkTree::parse(&data);
        assert_eq!(tree.roots().len(), 2);
        assert!(!tree.roots()[0].corrupt);
        assert!(tree.roots()[0].children[0].corrupt);
        assert_eq!(tree.roots()[1].section, SectionType::TextureDictionary);
    }

    #[test]
    fn test_depth_budget_truncates_but_records() {
        let level3 = chunk(0x01, 0x36003, &[0u8; 0]);
        let level2 = chunk(0x0E, 0x36003, &level3);
        let level1 = chunk(0x10, 0x36003, &level2);

        let tree = ChunkTree::parse_with_depth(&level1, 1);
        assert_eq!(tree.roots().len(), 1);
        let child = &tree.roots()[0].children[0];
        assert_eq!(child.section, SectionType::FrameList);
        // Budget exhausted: the grandchild is not explored.
        assert!(child.children.is_empty());
    }

    #[test]
    fn test_trailing_garbage_shorter_than_header_ignored() {
        let mut data = chunk(0x10, 0x36003, &[]);
        data.extend_from_slice(&[0x01, 0x02, 0x03]);

        let tree = ChunkTree::parse(&data);
        assert_eq!(tree.roots().len(), 1);
    }

    #[test]
    fn test_detect_asset_name() {
        // sub-record: 4 skipped bytes, u32 length, then padded name field
        let mut payload = vec![0x01, 0x00, 0x00, 0x00];
        payload.extend_from_slice(&8u32.to_le_bytes());
        payload.extend_from_slice(b"grass\0\xCD\xCD");

        assert_eq!(detect_asset_name(&payload).as_deref(), Some("grass"));
    }

    #[test]
    fn test_detect_asset_name_truncated_is_none() {
        let mut payload = vec![0x01, 0x00, 0x00, 0x00];
        payload.extend_from_slice(&64u32.to_le_bytes());
        payload.extend_from_slice(b"short");

        assert_eq!(detect_asset_name(&payload), None);
    }

    #[test]
    fn test_texture_native_gets_display_name() {
        let mut payload = vec![0x00, 0x00, 0x00, 0x00];
        payload.extend_from_slice(&6u32.to_le_bytes());
        payload.extend_from_slice(b"metal\0");
        let data = chunk(0x15, 0x36003, &payload);

        let tree = ChunkTree::parse(&data);
        let node = &tree.roots()[0];
        assert_eq!(node.name.as_deref(), Some("metal"));
        assert_eq!(node.display_label(), "Texture Native (metal)");
    }

    #[test]
    fn test_find_at_offset() {
        let inner = chunk(0x01, 0x36003, &[0u8; 4]);
        let mut data = chunk(0x10, 0x36003, &inner);
        data.extend_from_slice(&chunk(0x16, 0x36003, &[]));

        let tree = ChunkTree::parse(&data);
        assert_eq!(
            tree.find_at_offset(12).map(|n| n.section),
            Some(SectionType::Struct)
        );
        assert_eq!(
            tree.find_at_offset(28).map(|n| n.section),
            Some(SectionType::TextureDictionary)
        );
        assert!(tree.find_at_offset(1).is_none());
    }
}
