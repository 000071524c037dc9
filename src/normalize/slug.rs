//! Filename-safe identifiers derived from card names.

use regex::Regex;
use std::sync::OnceLock;

struct SlugPatterns {
    disallowed: Regex,
    ampersand: Regex,
    hyphen: Regex,
    whitespace: Regex,
}

fn patterns() -> &'static SlugPatterns {
    static PATTERNS: OnceLock<SlugPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| SlugPatterns {
        disallowed: Regex::new(r"[^a-z0-9 &\-]+").expect("valid slug pattern"),
        ampersand: Regex::new(r"\s*&\s*").expect("valid slug pattern"),
        hyphen: Regex::new(r"\s*-\s*").expect("valid slug pattern"),
        whitespace: Regex::new(r"\s+").expect("valid slug pattern"),
    })
}

/// Derive the slug used as a card's `id` and image file stem.
///
/// Lowercases, folds en/em dashes to `-`, drops apostrophes, turns anything
/// other than `a-z`, `0-9`, space, `&` and `-` into a space, then tidies the
/// spacing: `" & "` around ampersands, none around hyphens, single spaces
/// elsewhere.
///
/// ```
/// use nommsters_catalog::normalize::slugify;
///
/// assert_eq!(slugify("Day's End"), "days end");
/// assert_eq!(slugify("Red \u{2014} Handed"), "red-handed");
/// assert_eq!(slugify("Salt&Pepper"), "salt & pepper");
/// ```
pub fn slugify(name: &str) -> String {
    let p = patterns();

    let s = name
        .trim()
        .to_lowercase()
        .replace(['\u{2013}', '\u{2014}'], "-")
        .replace(['\'', '\u{2019}'], "");

    let s = p.disallowed.replace_all(&s, " ");
    let s = p.ampersand.replace_all(&s, " & ");
    let s = p.hyphen.replace_all(&s, "-");
    let s = p.whitespace.replace_all(&s, " ");

    s.trim().to_string()
}
