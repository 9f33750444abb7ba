//! rwlens - RenderWare binary stream analysis library.
//!
//! This crate provides a unified interface to the rwlens library
//! ecosystem for inspecting and modding RenderWare-era game assets.
//!
//! # Crates
//!
//! - [`rwlens_common`] - Common utilities (zero-copy binary reading)
//! - [`rwlens_version`] - Version codec and game/platform catalog
//! - [`rwlens_stream`] - Chunk tree parsing and payload editing
//!
//! # Example
//!
//! ```no_run
//! use rwlens::prelude::*;
//!
//! let data = std::fs::read("infernus.dff")?;
//!
//! let tree = ChunkTree::parse(&data);
//! for node in tree.iter() {
//!     println!(
//!         "{:#010x} {} {}",
//!         node.header.offset,
//!         node.display_label(),
//!         node.version_display
//!     );
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use rwlens_common as common;
pub use rwlens_stream as stream;
pub use rwlens_version as version;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use rwlens_common::BinaryReader;
    pub use rwlens_stream::{
        editor, sniff, ChunkHeader, ChunkNode, ChunkTree, SectionType, StreamKind,
    };
    pub use rwlens_version::{
        catalog, code_to_version_string, is_valid_version, version_string_to_code,
        VersionSetCatalog,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
