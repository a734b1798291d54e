//! URL slug generation.
//!
//! Slugs are lowercase and limited to `[a-z0-9-]` with no leading or trailing
//! hyphen. There is no transliteration: characters outside ASCII are dropped,
//! not approximated, and no length cap or uniqueness is applied.

use lazy_regex::regex;

/// Generate a URL-safe slug from arbitrary text.
///
/// The text is lowercased, spaces become hyphens, every character outside
/// `[a-z0-9-]` is removed, and hyphens are trimmed from both ends. Interior
/// runs of hyphens are kept as-is.
///
/// # Example
/// ```
/// use catalog_backend::utils::slug::generate_slug;
///
/// assert_eq!(generate_slug("Hello World!"), "hello-world");
/// assert_eq!(generate_slug("  --Foo_Bar--  "), "foobar");
/// assert_eq!(generate_slug(""), "");
/// ```
pub fn generate_slug(input: &str) -> String {
    let hyphenated = input.to_lowercase().replace(' ', "-");
    let cleaned = regex!(r"[^a-z0-9-]").replace_all(&hyphenated, "");
    cleaned.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::generate_slug;

    #[test]
    fn test_basic_phrase() {
        assert_eq!(generate_slug("Hello World!"), "hello-world");
    }

    #[test]
    fn test_underscores_and_edge_hyphens_removed() {
        assert_eq!(generate_slug("  --Foo_Bar--  "), "foobar");
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("!!! ??? ..."), "");
        assert_eq!(generate_slug("   "), "");
    }

    #[test]
    fn test_interior_hyphen_runs_preserved() {
        assert_eq!(generate_slug("a  b"), "a--b");
        assert_eq!(generate_slug("Red - Blue"), "red---blue");
    }

    #[test]
    fn test_non_ascii_dropped() {
        assert_eq!(generate_slug("Crème Brûlée"), "crme-brle");
        assert_eq!(generate_slug("日本語"), "");
        assert_eq!(generate_slug("ÉCOLE 42"), "cole-42");
    }

    #[test]
    fn test_only_space_is_hyphenated() {
        // Tabs and newlines are stripped rather than turned into hyphens.
        assert_eq!(generate_slug("foo\tbar\nbaz qux"), "foobarbaz-qux");
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(generate_slug("SKU 00123-B"), "sku-00123-b");
    }
}
