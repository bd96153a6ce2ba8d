//! Slug generation for project detail URLs.

use unicode_normalization::UnicodeNormalization;

/// Generate a URL-safe slug from a project title.
///
/// Lowercases the title, decomposes accented characters and drops their
/// combining marks (so "Thợ" becomes "tho"), maps the Vietnamese "đ" to
/// "d", strips everything outside `[a-z0-9]`, whitespace, and hyphens,
/// turns whitespace runs into single hyphens, collapses consecutive
/// hyphens, and trims leading/trailing hyphens. Deterministic: the same
/// title always yields the same slug.
pub fn slugify(title: &str) -> String {
    // NFD pulls diacritics out as combining marks (U+0300..U+036F),
    // which are then filtered away. "đ" does not decompose, so it is
    // mapped by hand.
    let decomposed: String = title
        .to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .map(|c| if c == 'đ' { 'd' } else { c })
        .collect();

    let mut slug = String::with_capacity(decomposed.len());
    let mut prev_hyphen = false;
    for c in decomposed.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            prev_hyphen = false;
        } else if c.is_whitespace() || c == '-' {
            if !prev_hyphen {
                slug.push('-');
            }
            prev_hyphen = true;
        }
        // Anything else is dropped without producing a hyphen.
    }

    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_title() {
        assert_eq!(slugify("Trello Clone"), "trello-clone");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(slugify("Vua Thợ Website"), "vua-tho-website");
    }

    #[test]
    fn maps_d_with_stroke() {
        assert_eq!(slugify("Đà Nẵng Travel"), "da-nang-travel");
    }

    #[test]
    fn deterministic() {
        let first = slugify("Vua Thợ Website");
        let second = slugify("Vua Thợ Website");
        assert_eq!(first, second);
    }

    #[test]
    fn drops_punctuation_without_extra_hyphens() {
        assert_eq!(slugify("Shop T-Shirt 3D!"), "shop-t-shirt-3d");
        assert_eq!(slugify("Rock & Roll"), "rock-roll");
    }

    #[test]
    fn collapses_whitespace_and_hyphen_runs() {
        assert_eq!(slugify("My   Project -- Two"), "my-project-two");
    }

    #[test]
    fn trims_leading_and_trailing_hyphens() {
        assert_eq!(slugify("  spaced out  "), "spaced-out");
        assert_eq!(slugify("-edgy-"), "edgy");
    }

    #[test]
    fn all_symbols_yields_empty() {
        assert_eq!(slugify("!!!"), "");
    }
}
