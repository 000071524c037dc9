//! Row-to-card normalization with per-run collision tracking.

use crate::config;
use crate::error::{CatalogError, Result};
use crate::loader::SourceRow;
use crate::models::{CardFlags, CardRecord};
use crate::normalize::search::build_search_text;
use crate::normalize::slug::slugify;
use std::collections::HashMap;
use tracing::debug;

/// Parse an integer cell.
///
/// Blank cells, the placeholder dashes and anything that is not an integer
/// all come back as `None`.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if config::NUMERIC_PLACEHOLDERS.contains(&s) {
        return None;
    }
    s.parse().ok()
}

/// Split a TRAITS cell on `" - "`, trimming entries and dropping empty ones.
///
/// A separator dangling at either end of the cell counts even when the cell
/// has already been trimmed (`"Fast - Loyal -"` gives `Fast`, `Loyal`).
pub fn split_traits(raw: &str) -> Vec<String> {
    let padded = format!(" {} ", raw.trim());
    padded
        .split(config::TRAIT_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds [`CardRecord`]s for a single run.
///
/// Remembers which name claimed each image path and each id, so a second
/// row resolving to the same file or slug is rejected. Create one per run.
pub struct Normalizer {
    images_root: String,
    seen_paths: HashMap<String, String>,
    seen_ids: HashMap<String, String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(config::IMAGES_ROOT)
    }
}

impl Normalizer {
    pub fn new(images_root: impl Into<String>) -> Self {
        Self {
            images_root: images_root.into(),
            seen_paths: HashMap::new(),
            seen_ids: HashMap::new(),
        }
    }

    /// Number of cards accepted so far.
    pub fn len(&self) -> usize {
        self.seen_paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen_paths.is_empty()
    }

    /// Normalize one row.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Collision`] when the row's image path was already
    /// produced by an earlier row of this run,
    /// [`CatalogError::DuplicateId`] when an earlier row in another guild
    /// produced the same slug, and
    /// [`CatalogError::InvalidArgument`] when the row has a blank NAME.
    pub fn normalize(&mut self, row: &SourceRow) -> Result<CardRecord> {
        let name = row.text("NAME");
        if name.is_empty() {
            return Err(CatalogError::InvalidArgument(
                "Row has a blank NAME".to_string(),
            ));
        }

        let guild = row.text("GUILD");
        let guild_folder = guild.to_lowercase();
        let slug = slugify(name);

        let image = format!(
            "{}/{}/{}{}",
            self.images_root,
            guild_folder,
            slug,
            config::LARGE_SUFFIX
        );
        let thumb = format!(
            "{}/{}/{}{}",
            self.images_root,
            guild_folder,
            slug,
            config::THUMB_SUFFIX
        );

        if let Some(first) = self.seen_paths.get(&image) {
            return Err(CatalogError::Collision {
                path: image,
                first: first.clone(),
                second: name.to_string(),
            });
        }
        if let Some(first) = self.seen_ids.get(&slug) {
            return Err(CatalogError::DuplicateId {
                id: slug,
                first: first.clone(),
                second: name.to_string(),
            });
        }

        let rarity = parse_int(row.text("RARITY"));
        let combat = row.text("COMBAT");

        let mut card = CardRecord {
            id: slug,
            name: name.to_string(),
            guild: guild.to_string(),
            type_field: row.text("TYPE").to_string(),
            rarity,
            rarity_label: rarity.and_then(config::rarity_label).map(str::to_string),
            power: row.get(config::POWER_COLUMN).and_then(parse_int),
            combat_raw: (!combat.is_empty()).then(|| combat.to_string()),
            traits: split_traits(row.text("TRAITS")),
            text: row.text("TEXTBOX").to_string(),
            flags: CardFlags {
                true_damage: row
                    .text(config::TRUE_DAMAGE_COLUMN)
                    .eq_ignore_ascii_case("true"),
            },
            image,
            thumb,
            search_text: String::new(),
        };
        card.search_text = build_search_text(&card);

        self.seen_paths.insert(card.image.clone(), card.name.clone());
        self.seen_ids.insert(card.id.clone(), card.name.clone());
        debug!(id = %card.id, image = %card.image, "normalized card");
        Ok(card)
    }

    /// Normalize every row in order, stopping at the first error.
    pub fn normalize_all(&mut self, rows: &[SourceRow]) -> Result<Vec<CardRecord>> {
        rows.iter().map(|row| self.normalize(row)).collect()
    }
}
