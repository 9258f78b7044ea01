use crate::errors::internal::TagError;

/// Canonical form of a tag name: lower-cased with every whitespace run removed.
///
/// `normalize("  Gold Tier ")` and `normalize("goldtier")` both yield `"goldtier"`.
///
/// Lower-casing is per character with no word-final rules: `Σ` always
/// becomes `σ`, wherever whitespace falls.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .flat_map(|word| word.chars().flat_map(char::to_lowercase))
        .collect()
}

/// A tag name that has already been normalized and is known to be non-empty
///
/// Every path that writes a tag name to the database goes through this type,
/// so stored names are always canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(String);

impl TagName {
    /// Normalize `raw` and reject names that are blank after normalization
    pub fn parse(raw: &str) -> Result<Self, TagError> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Err(TagError::EmptyName);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TagName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_lowercases_and_strips_whitespace() {
        assert_eq!(normalize("New Customer"), "newcustomer");
        assert_eq!(normalize("  Gold Tier "), "goldtier");
        assert_eq!(normalize("VIP"), "vip");
    }

    #[test]
    fn test_normalize_collapses_mixed_whitespace() {
        assert_eq!(normalize("a\tb\n c\r\nD"), "abcd");
    }

    #[test]
    fn test_normalize_equivalent_inputs_match() {
        assert_eq!(normalize("  Gold Tier "), normalize("goldtier"));
        assert_eq!(normalize("GOLD tier"), normalize("gold TIER"));
    }

    #[test]
    fn test_normalize_sigma_ignores_word_boundaries() {
        assert_eq!(normalize("ΟΔΟΣ Α"), normalize("ΟΔΟΣΑ"));
        assert_eq!(normalize("ΟΔΟΣ Α"), "οδοσα");
    }

    #[test]
    fn test_normalize_sigma_ignores_case() {
        assert_eq!(normalize("ΟΔΟΣ"), normalize("οδοσ"));
        assert_eq!(normalize("ΟΔΟΣ"), "οδοσ");
    }

    #[test]
    fn test_normalize_blank_input_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t "), "");
    }

    #[test]
    fn test_tag_name_parse_normalizes() {
        let name = TagName::parse(" Summer Sale ").expect("valid name");
        assert_eq!(name.as_str(), "summersale");
        assert_eq!(name.to_string(), "summersale");
    }

    #[test]
    fn test_tag_name_parse_rejects_blank() {
        let result = TagName::parse("  \n ");
        assert!(matches!(result, Err(TagError::EmptyName)));
    }

    /// Characters whose upper-case form lower-cases back to their own
    /// lower-case form. Excludes `ß` (upper-cases to `SS`) and `ς` (to `Σ`).
    fn case_round_trips(s: &str) -> bool {
        s.chars().all(|c| {
            let via_upper: String = c.to_uppercase().flat_map(char::to_lowercase).collect();
            let direct: String = c.to_lowercase().collect();
            via_upper == direct
        })
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(s in "\\PC{0,40}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn prop_normalize_output_has_no_whitespace(s in "[\\PC\\t\\n\\r]{0,40}") {
            prop_assert!(!normalize(&s).chars().any(char::is_whitespace));
        }

        #[test]
        fn prop_normalize_ignores_whitespace_placement(s in "[\\PC\\t\\n]{0,40}") {
            let joined: String = s.split_whitespace().collect();
            prop_assert_eq!(normalize(&s), normalize(&joined));
        }

        #[test]
        fn prop_normalize_ignores_case(s in "\\PC{0,40}") {
            prop_assume!(case_round_trips(&s));
            let upper: String = s.chars().flat_map(char::to_uppercase).collect();
            let lower: String = s.chars().flat_map(char::to_lowercase).collect();
            prop_assert_eq!(normalize(&upper), normalize(&lower));
        }

        #[test]
        fn prop_normalize_matches_per_char_lowercase(s in any::<String>()) {
            let lowered: String = s.chars().flat_map(char::to_lowercase).collect();
            prop_assert_eq!(normalize(&s), normalize(&lowered));
        }
    }
}
