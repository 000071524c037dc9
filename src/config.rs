/// Root folder the gallery serves card images from.
pub const IMAGES_ROOT: &str = "cards";

/// Columns every source sheet must carry, by normalized header name.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "GUILD", "RARITY", "TYPE", "NAME", "TEXTBOX", "TRAITS", "COMBAT",
];

pub const POWER_COLUMN: &str = "POWER";
pub const TRUE_DAMAGE_COLUMN: &str = "DEALS TRUE DAMAGE";

/// Numeric cell values that mean "no value" rather than a malformed number.
pub const NUMERIC_PLACEHOLDERS: [&str; 3] = ["", "-", "\u{2014}"];

/// Literal separator between entries of the TRAITS cell.
pub const TRAIT_SEPARATOR: &str = " - ";

pub const LARGE_SUFFIX: &str = "_large.jpg";
pub const THUMB_SUFFIX: &str = "_thumb.jpg";

/// Emoji glyphs found in card text, paired with the words a search for
/// the glyph's meaning should match. Order is the order synonyms are
/// appended in.
pub const EMOJI_SYNONYMS: &[(&str, &[&str])] = &[
    ("\u{1F3F9}", &["ranged"]),
    (
        "\u{1F6E1}\u{FE0F}",
        &["durable", "durability", "armor", "defense", "defensive"],
    ),
    ("\u{1F32B}\u{FE0F}", &["swift"]),
    ("\u{1F525}", &["aggression", "aggressive"]),
    ("\u{1F338}", &["gentle"]),
    ("\u{1F36C}", &["treat", "candy", "treats"]),
    ("\u{1F9CA}", &["sugarcoated"]),
    ("\u{1F4A5}", &["damage", "damaged"]),
];

/// Display label for a rarity number; other numbers have none.
pub fn rarity_label(rarity: i64) -> Option<&'static str> {
    match rarity {
        1 => Some("Rare"),
        2 => Some("Uncommon"),
        3 => Some("Common"),
        _ => None,
    }
}
