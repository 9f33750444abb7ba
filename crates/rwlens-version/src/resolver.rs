//! Resolution of packed version codes to game/platform identities.

use std::collections::BTreeSet;

use crate::catalog::{catalog, VersionEntry, VersionSetCatalog};
use crate::codec::code_to_version_string;

/// Packed version codes of the common 3.x range.
const PACKED_VERSION_RANGE: std::ops::RangeInclusive<u32> = 0x30000..=0x3FFFF;

/// Legacy build-stamped library IDs seen in pre-3.2 era streams. These do
/// not fit the packed layout but are still accepted as plausible versions.
const EXTENDED_VERSION_CODES: &[u32] = &[0x0800_FFFF, 0x1003_FFFF, 0x1803_FFFF];

/// Heuristic check that a code is a plausible chunk version stamp.
///
/// True for the common packed `[0x30000, 0x3FFFF]` range and for a small
/// fixed set of extended-format codes. This is a sanity filter for
/// display and sniffing, not a format guarantee.
pub fn is_valid_version(code: u32) -> bool {
    PACKED_VERSION_RANGE.contains(&code) || EXTENDED_VERSION_CODES.contains(&code)
}

impl VersionSetCatalog {
    /// All catalog entries matching a packed version code, in catalog
    /// declaration order.
    pub fn find_all_matches(&self, code: u32) -> Vec<&VersionEntry> {
        self.entries().iter().filter(|e| e.matches(code)).collect()
    }

    /// Format a version code for display, annotated with the games and
    /// platforms that produced it.
    ///
    /// Matches are grouped per game: three or more matching platforms
    /// render as `"(Game) All"`, two as `"(Game) A / B"` in lexical
    /// order, one as `"(Game) Platform"`. Groups are joined with `" / "`
    /// after the canonical version string. With no matches (including
    /// the empty-catalog degraded state) the result is just the
    /// canonical version string.
    pub fn display_string(&self, code: u32) -> String {
        let canonical = code_to_version_string(code);
        let matches = self.find_all_matches(code);
        if matches.is_empty() {
            return canonical;
        }

        // Group platforms by display name, keeping first-appearance order.
        let mut groups: Vec<(&str, BTreeSet<&str>)> = Vec::new();
        for entry in matches {
            match groups.iter_mut().find(|(name, _)| *name == entry.display_name) {
                Some((_, platforms)) => {
                    platforms.insert(&entry.platform);
                }
                None => {
                    let mut platforms = BTreeSet::new();
                    platforms.insert(entry.platform.as_str());
                    groups.push((entry.display_name.as_str(), platforms));
                }
            }
        }

        let rendered: Vec<String> = groups
            .iter()
            .map(|(name, platforms)| {
                if platforms.len() >= 3 {
                    format!("({}) All", name)
                } else {
                    let joined = platforms.iter().copied().collect::<Vec<_>>().join(" / ");
                    format!("({}) {}", name, joined)
                }
            })
            .collect();

        format!("{} {}", canonical, rendered.join(" / "))
    }
}

/// Resolve a version code against the process-wide default catalog.
pub fn resolve_display(code: u32) -> String {
    catalog().display_string(code)
}
