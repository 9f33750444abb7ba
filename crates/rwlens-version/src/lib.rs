//! RenderWare version codec and game/platform version-set catalog.
//!
//! Every chunk in a RenderWare binary stream carries a packed 32-bit
//! version code identifying the library revision that wrote it. This
//! crate converts those codes to and from dotted version strings
//! ([`version_string_to_code`] / [`code_to_version_string`]) and resolves
//! them to the games and platforms known to have shipped them via a
//! declarative [`VersionSetCatalog`].
//!
//! # Example
//!
//! ```
//! use rwlens_version::{catalog, code_to_version_string};
//!
//! assert_eq!(code_to_version_string(0x36003), "3.6.0.3");
//!
//! // The default catalog knows San Andreas shipped 3.6.0.3 everywhere.
//! let display = catalog().display_string(0x36003);
//! assert!(display.starts_with("3.6.0.3"));
//! ```

mod catalog;
mod codec;
mod error;
mod resolver;

pub use catalog::{catalog, VersionEntry, VersionMatch, VersionSetCatalog};
pub use codec::{code_to_version_string, version_string_to_code};
pub use error::{Error, Result};
pub use resolver::{is_valid_version, resolve_display};
