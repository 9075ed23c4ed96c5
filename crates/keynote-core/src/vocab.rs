//! Fixed tag vocabularies and money constants.

/// Minimum speaker fee and minimum event budget, in whole US dollars.
pub const MIN_FEE: i64 = 10_000;

/// Minimum speaker biography length, in characters.
pub const MIN_BIO_CHARS: usize = 100;

/// Topic areas offered by the qualification wizard.
pub const TOPIC_OPTIONS: &[&str] = &[
    "Technology",
    "AI & Machine Learning",
    "Leadership",
    "Innovation",
    "Digital Transformation",
    "Wellness",
    "Sustainability",
    "Finance",
    "Marketing",
    "Sales",
    "HR & People",
    "Entrepreneurship",
];

/// Expertise tags a speaker may claim. Superset of [`TOPIC_OPTIONS`].
pub const EXPERTISE_OPTIONS: &[&str] = &[
    "Technology",
    "AI & Machine Learning",
    "Leadership",
    "Innovation",
    "Digital Transformation",
    "Wellness",
    "Sustainability",
    "Finance",
    "Marketing",
    "Sales",
    "HR & People",
    "Entrepreneurship",
    "Healthcare",
    "Education",
    "Science",
    "Politics",
    "Sports",
    "Entertainment",
];

/// Resolve `raw` against `vocabulary`, ignoring case and surrounding space.
///
/// Returns the canonical spelling so stored tags stay consistent.
#[must_use]
pub fn canonical<'a>(vocabulary: &[&'a str], raw: &str) -> Option<&'a str> {
    let needle = raw.trim();
    vocabulary
        .iter()
        .copied()
        .find(|tag| tag.eq_ignore_ascii_case(needle))
}

/// Split a comma-separated input into trimmed, non-empty items.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn expertise_contains_every_topic() {
        for topic in TOPIC_OPTIONS {
            assert!(EXPERTISE_OPTIONS.contains(topic), "missing {topic}");
        }
    }

    #[test]
    fn canonical_is_case_insensitive() {
        assert_eq!(canonical(TOPIC_OPTIONS, " leadership "), Some("Leadership"));
        assert_eq!(canonical(TOPIC_OPTIONS, "hr & people"), Some("HR & People"));
        assert_eq!(canonical(TOPIC_OPTIONS, "Cooking"), None);
    }

    #[test]
    fn split_list_drops_empty_pieces() {
        assert_eq!(
            split_list(" English, Spanish ,,  ,French"),
            vec!["English", "Spanish", "French"]
        );
        assert!(split_list("  ").is_empty());
    }
}
