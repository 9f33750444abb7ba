//! Declarative game/platform version-set catalog.
//!
//! The catalog maps packed version codes back to the games and platforms
//! whose tooling produced them. It is loaded once from a declarative JSON
//! table (an embedded default, or a caller-supplied file) and is immutable
//! for the life of the process.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::codec::version_string_to_code;
use crate::{Error, Result};

/// The version-set table shipped with the crate.
const EMBEDDED_VERSION_SETS: &str = include_str!("../data/version_sets.json");

/// How a catalog entry matches a version code: an exact version or an
/// inclusive range.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum VersionMatch {
    /// A single exact version string.
    Exact { version: String },
    /// An inclusive `[min, max]` range of version strings.
    Range {
        min_version: String,
        max_version: String,
    },
}

/// One row of the catalog: a game/platform combination and the versions
/// it shipped with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionEntry {
    /// Internal game identifier (stable across display renames).
    pub game_name: String,
    /// Name shown to users, e.g. "San Andreas".
    pub display_name: String,
    /// Platform label, e.g. "PC", "PS2", "Xbox".
    pub platform: String,
    /// Supported data type tags, e.g. "DFF", "TXD", "COL".
    pub data_types: BTreeSet<String>,
    /// The version or version range this entry covers.
    #[serde(flatten)]
    pub version: VersionMatch,
}

impl VersionEntry {
    /// Check whether a packed version code falls under this entry.
    pub fn matches(&self, code: u32) -> bool {
        match &self.version {
            VersionMatch::Exact { version } => version_string_to_code(version) == code,
            VersionMatch::Range {
                min_version,
                max_version,
            } => {
                let min = version_string_to_code(min_version);
                let max = version_string_to_code(max_version);
                min <= code && code <= max
            }
        }
    }
}

/// The immutable set of [`VersionEntry`] rows, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct VersionSetCatalog {
    entries: Vec<VersionEntry>,
}

impl VersionSetCatalog {
    /// Create an empty catalog. Every query through an empty catalog
    /// degrades to the bare codec output.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a catalog from a JSON document (an array of entries).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<VersionEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_json_str(&json)
    }

    /// Load a catalog from a file, falling back to an empty catalog if
    /// the file is missing or malformed.
    pub fn from_path_or_empty<P: AsRef<Path>>(path: P) -> Self {
        Self::from_path(path).unwrap_or_else(|_| Self::empty())
    }

    /// The entries, in declaration order.
    pub fn entries(&self) -> &[VersionEntry] {
        &self.entries
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The process-wide default catalog, built from the embedded table on
/// first use and read-only afterwards.
///
/// A malformed embedded table degrades to an empty catalog rather than
/// failing the caller.
pub fn catalog() -> &'static VersionSetCatalog {
    static CATALOG: OnceLock<VersionSetCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        VersionSetCatalog::from_json_str(EMBEDDED_VERSION_SETS)
            .unwrap_or_else(|_| VersionSetCatalog::empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        assert!(!catalog().is_empty());
    }

    #[test]
    fn test_exact_match() {
        let entry: VersionEntry = serde_json::from_str(
            r#"{
                "game_name": "gtasa",
                "display_name": "San Andreas",
                "platform": "PC",
                "data_types": ["DFF", "TXD"],
                "version": "3.6.0.3"
            }"#,
        )
        .unwrap();

        assert!(entry.matches(0x36003));
        assert!(!entry.matches(0x36000));
    }

    #[test]
    fn test_range_match_is_inclusive() {
        let entry: VersionEntry = serde_json::from_str(
            r#"{
                "game_name": "gta3",
                "display_name": "GTA III",
                "platform": "PS2",
                "data_types": ["DFF"],
                "min_version": "3.0.0.0",
                "max_version": "3.1.0.0"
            }"#,
        )
        .unwrap();

        assert!(entry.matches(0x30000));
        assert!(entry.matches(0x30A00));
        assert!(entry.matches(0x31000));
        assert!(!entry.matches(0x31001));
    }

    #[test]
    fn test_malformed_source_degrades_to_empty() {
        assert!(VersionSetCatalog::from_json_str("not json").is_err());
        let missing = VersionSetCatalog::from_path_or_empty("/does/not/exist.json");
        assert!(missing.is_empty());
    }
}
