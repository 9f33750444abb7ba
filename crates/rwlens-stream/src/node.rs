//! The chunk tree node model.
//!
//! A [`ChunkNode`] records where a chunk lives in the source buffer, how
//! it was classified, and whether anything about it looked wrong. Nodes
//! never copy payload bytes; all editing operations slice the original
//! buffer using the recorded ranges.

use crate::header::ChunkHeader;
use crate::section::SectionType;

/// One chunk in the parsed tree.
///
/// Children are owned and kept in file order. Structural anomalies found
/// during parsing are recorded on the node itself (`corrupt`, `stalled`)
/// rather than aborting the parse.
#[derive(Debug, Clone)]
pub struct ChunkNode {
    /// The decoded header plus its byte offset.
    pub header: ChunkHeader,
    /// Classified section type (carries unknown codes verbatim).
    pub section: SectionType,
    /// The version stamp resolved to a display string, e.g.
    /// `"3.6.0.3 (San Andreas) All"`.
    pub version_display: String,
    /// Embedded asset name, when the section is a named-asset type and a
    /// name sub-record could be decoded. Display only.
    pub name: Option<String>,
    /// The declared payload runs past the enclosing region.
    pub corrupt: bool,
    /// Processing this chunk failed to advance the cursor.
    pub stalled: bool,
    /// Child chunks parsed out of the payload, in file order.
    pub children: Vec<ChunkNode>,
}

impl ChunkNode {
    /// Human-readable type name. Unknown codes render as
    /// `"Unknown (0x{code:08X})"`.
    pub fn type_name(&self) -> String {
        self.section.to_string()
    }

    /// Label for tree displays: the embedded asset name when present,
    /// the type name otherwise.
    pub fn display_label(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.section, name),
            None => self.type_name(),
        }
    }

    /// Whether the type code has no entry in the section table.
    pub fn unknown_type(&self) -> bool {
        self.section.is_unknown()
    }

    /// Total number of nodes in this subtree, including self.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(ChunkNode::subtree_len).sum::<usize>()
    }

    /// Depth-first search for the node whose header starts at `offset`.
    pub fn find_at_offset(&self, offset: u64) -> Option<&ChunkNode> {
        if self.header.offset == offset {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_at_offset(offset))
    }
}

/// A parsed chunk tree: the ordered root-level chunks of one buffer.
///
/// The tree is immutable once built; editing produces a new buffer which
/// must be re-parsed to obtain a tree with consistent offsets.
#[derive(Debug, Clone, Default)]
pub struct ChunkTree {
    pub(crate) roots: Vec<ChunkNode>,
}

impl ChunkTree {
    /// The root-level chunks, in file order.
    pub fn roots(&self) -> &[ChunkNode] {
        &self.roots
    }

    /// Whether the buffer contained no complete chunk header.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.roots.iter().map(ChunkNode::subtree_len).sum()
    }

    /// Depth-first search for the node whose header starts at `offset`.
    pub fn find_at_offset(&self, offset: u64) -> Option<&ChunkNode> {
        self.roots
            .iter()
            .find_map(|root| root.find_at_offset(offset))
    }

    /// Iterate over every node in the tree, depth first.
    pub fn iter(&self) -> impl Iterator<Item = &ChunkNode> {
        let mut stack: Vec<&ChunkNode> = self.roots.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}
