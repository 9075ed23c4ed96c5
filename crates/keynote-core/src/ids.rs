//! ID prefix constants.
//!
//! IDs are generated in SQL as `{prefix}-{8 hex chars}`, e.g. `spk-a3f8b2c1`.

pub const PREFIX_SPEAKER: &str = "spk";
pub const PREFIX_TESTIMONIAL: &str = "tst";
pub const PREFIX_QUALIFICATION: &str = "qlr";
pub const PREFIX_PROJECT: &str = "prj";
pub const PREFIX_WISHLIST: &str = "wsh";
pub const PREFIX_ACCOUNT: &str = "acc";

/// Every prefix in use, for exhaustive ID-format tests.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_SPEAKER,
    PREFIX_TESTIMONIAL,
    PREFIX_QUALIFICATION,
    PREFIX_PROJECT,
    PREFIX_WISHLIST,
    PREFIX_ACCOUNT,
];

/// Return the prefix portion of an ID (`"spk-a3f8b2c1"` -> `Some("spk")`).
#[must_use]
pub fn prefix_of(id: &str) -> Option<&str> {
    let (prefix, rest) = id.split_once('-')?;
    if rest.is_empty() { None } else { Some(prefix) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for prefix in ALL_PREFIXES {
            assert!(seen.insert(prefix), "duplicate prefix {prefix}");
        }
    }

    #[test]
    fn prefix_of_splits_on_first_dash() {
        assert_eq!(prefix_of("spk-a3f8b2c1"), Some("spk"));
        assert_eq!(prefix_of("spk-"), None);
        assert_eq!(prefix_of("nodash"), None);
    }
}
