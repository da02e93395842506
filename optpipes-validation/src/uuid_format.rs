// Textual UUID grammar

use crate::UuidVersion;
use once_cell::sync::Lazy;
use regex::Regex;

// 8-4-4-4-12 hex groups. The first digit of the third group is the version;
// v4 and v5 additionally pin the variant digit to 8, 9, a or b.
static UUID_ANY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

static UUID_V3_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-3[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

static UUID_V4_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .unwrap()
});

static UUID_V5_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-5[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .unwrap()
});

/// Check `text` against the UUID grammar for `version` (any of 1-5 if `None`).
pub fn is_uuid(text: &str, version: Option<UuidVersion>) -> bool {
    let pattern = match version {
        None => &*UUID_ANY_REGEX,
        Some(UuidVersion::V3) => &*UUID_V3_REGEX,
        Some(UuidVersion::V4) => &*UUID_V4_REGEX,
        Some(UuidVersion::V5) => &*UUID_V5_REGEX,
    };
    pattern.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const V1: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
    const V3: &str = "a3bb189e-8bf9-3888-9912-ace4e6543002";
    const V4: &str = "550e8400-e29b-41d4-a716-446655440000";
    const V5: &str = "74738ff5-5367-5958-9aee-98fffdcd1876";

    #[test]
    fn test_any_version() {
        for uuid in [V1, V3, V4, V5] {
            assert!(is_uuid(uuid, None), "{} should be accepted", uuid);
        }
        assert!(!is_uuid("00000000-0000-0000-0000-000000000000", None));
        assert!(!is_uuid("550e8400-e29b-61d4-a716-446655440000", None));
    }

    #[test]
    fn test_specific_versions() {
        assert!(is_uuid(V3, Some(UuidVersion::V3)));
        assert!(!is_uuid(V4, Some(UuidVersion::V3)));

        assert!(is_uuid(V4, Some(UuidVersion::V4)));
        assert!(!is_uuid(V5, Some(UuidVersion::V4)));

        assert!(is_uuid(V5, Some(UuidVersion::V5)));
        assert!(!is_uuid(V1, Some(UuidVersion::V5)));
    }

    #[test]
    fn test_variant_digit() {
        // variant digit `c` is outside the RFC 4122 variant
        let v4_bad_variant = "550e8400-e29b-41d4-c716-446655440000";
        assert!(!is_uuid(v4_bad_variant, Some(UuidVersion::V4)));
        assert!(is_uuid(v4_bad_variant, None));

        let v3_any_variant = "a3bb189e-8bf9-3888-c912-ace4e6543002";
        assert!(is_uuid(v3_any_variant, Some(UuidVersion::V3)));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_uuid(&V4.to_uppercase(), Some(UuidVersion::V4)));
    }

    #[test]
    fn test_malformed() {
        for text in [
            "",
            "not-a-uuid",
            "550e8400e29b41d4a716446655440000",
            "{550e8400-e29b-41d4-a716-446655440000}",
            " 550e8400-e29b-41d4-a716-446655440000",
            "550e8400-e29b-41d4-a716-44665544000g",
            "550e8400-e29b-41d4-a716-4466554400000",
        ] {
            assert!(!is_uuid(text, None), "{:?} should be rejected", text);
        }
    }
}
