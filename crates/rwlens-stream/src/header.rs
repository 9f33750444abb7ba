//! The fixed 12-byte chunk header.

use byteorder::{ByteOrder, LittleEndian};
use rwlens_common::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Size in bytes of a chunk header on disk.
pub const HEADER_SIZE: usize = 12;

/// The on-disk header layout: three little-endian u32 fields.
///
/// Read straight out of the buffer with zerocopy; [`ChunkHeader`] is the
/// in-memory form carrying the derived offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct RawChunkHeader {
    /// Numeric section type code.
    pub type_code: u32,
    /// Size of the payload following the header, excluding the header.
    pub payload_size: u32,
    /// Packed library version stamp.
    pub version_code: u32,
}

/// A chunk header plus the byte position it was read from.
///
/// `offset` is derived during parsing and is not stored on disk. The
/// header's payload occupies `[offset + 12, offset + 12 + payload_size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Numeric section type code.
    pub type_code: u32,
    /// Size of the payload following the header.
    pub payload_size: u32,
    /// Packed library version stamp.
    pub version_code: u32,
    /// Byte position of the header start within the source buffer.
    pub offset: u64,
}

impl ChunkHeader {
    /// Build a header from its raw on-disk form and the offset it was
    /// read at.
    pub fn from_raw(raw: RawChunkHeader, offset: u64) -> Self {
        Self {
            type_code: raw.type_code,
            payload_size: raw.payload_size,
            version_code: raw.version_code,
            offset,
        }
    }

    /// Byte position of the first payload byte.
    pub fn payload_start(&self) -> u64 {
        self.offset + HEADER_SIZE as u64
    }

    /// Byte position one past the last payload byte.
    pub fn end(&self) -> u64 {
        self.payload_start() + self.payload_size as u64
    }

    /// Serialize the three stored fields back to their on-disk form.
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        LittleEndian::write_u32(&mut bytes[0..4], self.type_code);
        LittleEndian::write_u32(&mut bytes[4..8], self.payload_size);
        LittleEndian::write_u32(&mut bytes[8..12], self.version_code);
        bytes
    }
}
