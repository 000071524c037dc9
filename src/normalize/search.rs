//! The `searchText` blob the gallery's client-side search matches against.

use crate::config::EMOJI_SYNONYMS;
use crate::models::CardRecord;
use regex::Regex;
use std::sync::OnceLock;

fn strip_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let glyph_chars: String = EMOJI_SYNONYMS
            .iter()
            .flat_map(|(glyph, _)| glyph.chars())
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        Regex::new(&format!(r"[^\w\s&{}]", glyph_chars)).expect("valid search pattern")
    })
}

fn whitespace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("valid search pattern"))
}

/// Append the synonyms of every known glyph that occurs in `text`.
///
/// Each glyph contributes its words once, however often it appears.
pub fn expand_emojis(text: &str) -> String {
    let extras: Vec<&str> = EMOJI_SYNONYMS
        .iter()
        .filter(|(glyph, _)| text.contains(glyph))
        .flat_map(|(_, words)| words.iter().copied())
        .collect();

    if extras.is_empty() {
        text.to_string()
    } else {
        format!("{} {}", text, extras.join(" "))
    }
}

/// Lowercase, replace punctuation with spaces (keeping word characters,
/// `&` and the known glyphs), and collapse whitespace.
pub fn normalize_for_search(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = strip_pattern().replace_all(&lowered, " ");
    whitespace_pattern()
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Build the search text for a card whose other fields are final.
///
/// Joins name, guild, type, rarity label, `rarity<N>`, traits, rules text and
/// combat text, expands glyph synonyms, then normalizes. The card's current
/// `search_text` is ignored.
pub fn build_search_text(card: &CardRecord) -> String {
    let rarity_token = card.rarity.map(|r| format!("rarity{}", r)).unwrap_or_default();
    let traits = card.traits.join(" ");

    let parts = [
        card.name.as_str(),
        card.guild.as_str(),
        card.type_field.as_str(),
        card.rarity_label.as_deref().unwrap_or(""),
        rarity_token.as_str(),
        traits.as_str(),
        card.text.as_str(),
        card.combat_raw.as_deref().unwrap_or(""),
    ];

    let joined = parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    normalize_for_search(&expand_emojis(&joined))
}
