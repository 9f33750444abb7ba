//! Packed library-version codec.
//!
//! RenderWare stamps every chunk header with a packed 32-bit version code.
//! The dotted form `major.minor.patch1.patch2` packs as
//! `(major << 16) | (minor << 12) | (patch1 << 8) | patch2`, so
//! `3.6.0.3` becomes `0x36003`.

/// Parse a dotted version string into its packed 32-bit code.
///
/// Accepts up to four dot-separated decimal components; missing trailing
/// components default to 0 and extra components are ignored. This is a
/// lenient display-oriented parse: malformed input (an empty string, a
/// non-numeric component) yields 0 rather than an error.
///
/// # Example
///
/// ```
/// use rwlens_version::version_string_to_code;
///
/// assert_eq!(version_string_to_code("3.6.0.3"), 0x36003);
/// assert_eq!(version_string_to_code("3.6.0"), 0x36000);
/// assert_eq!(version_string_to_code("garbage"), 0);
/// ```
pub fn version_string_to_code(s: &str) -> u32 {
    if s.is_empty() {
        return 0;
    }

    let mut parts = [0u32; 4];
    for (i, component) in s.split('.').enumerate() {
        if i >= 4 {
            break;
        }
        match component.parse::<u32>() {
            Ok(value) => parts[i] = value,
            Err(_) => return 0,
        }
    }

    (parts[0] << 16) | (parts[1] << 12) | (parts[2] << 8) | parts[3]
}

/// Render a packed 32-bit version code as its canonical dotted string.
///
/// Always renders all four components, including a trailing `.0`.
///
/// # Example
///
/// ```
/// use rwlens_version::code_to_version_string;
///
/// assert_eq!(code_to_version_string(0x36003), "3.6.0.3");
/// assert_eq!(code_to_version_string(0), "0.0.0.0");
/// ```
pub fn code_to_version_string(code: u32) -> String {
    let major = code >> 16;
    let minor = (code >> 12) & 0xF;
    let patch1 = (code >> 8) & 0xF;
    let patch2 = code & 0xFF;

    format!("{}.{}.{}.{}", major, minor, patch1, patch2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_known_versions() {
        assert_eq!(version_string_to_code("3.6.0.3"), 0x36003);
        assert_eq!(version_string_to_code("3.1.0.0"), 0x31000);
        assert_eq!(version_string_to_code("3.4.0.3"), 0x34003);
    }

    #[test]
    fn test_short_forms_default_to_zero() {
        assert_eq!(version_string_to_code("3.6.0"), 0x36000);
        assert_eq!(version_string_to_code("3.6"), 0x36000);
    }

    #[test]
    fn test_extra_components_ignored() {
        assert_eq!(version_string_to_code("3.6.0.3.99"), 0x36003);
    }

    #[test]
    fn test_malformed_input_is_zero() {
        assert_eq!(version_string_to_code(""), 0);
        assert_eq!(version_string_to_code("invalid"), 0);
        assert_eq!(version_string_to_code("3.x.0.3"), 0);
    }

    #[test]
    fn test_render_always_four_parts() {
        assert_eq!(code_to_version_string(0x36003), "3.6.0.3");
        assert_eq!(code_to_version_string(0x36000), "3.6.0.0");
        assert_eq!(code_to_version_string(0), "0.0.0.0");
    }

    #[test]
    fn test_string_round_trip_for_canonical_forms() {
        for s in ["3.6.0.3", "3.1.0.0", "3.4.0.3", "0.0.0.0"] {
            assert_eq!(code_to_version_string(version_string_to_code(s)), s);
        }
    }

    #[test]
    fn test_code_round_trip() {
        for code in [0u32, 0x30000, 0x36003, 0x3FFFF, 0x31000] {
            assert_eq!(version_string_to_code(&code_to_version_string(code)), code);
        }
    }
}
