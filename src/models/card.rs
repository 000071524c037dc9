use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CardRecord — one normalized gallery card
// ---------------------------------------------------------------------------

/// A card as the gallery consumes it.
///
/// Field order here is the key order in the written catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: String,
    pub name: String,
    pub guild: String,
    #[serde(rename = "type")]
    pub type_field: String,
    pub rarity: Option<i64>,
    pub rarity_label: Option<String>,
    pub power: Option<i64>,
    pub combat_raw: Option<String>,
    #[serde(default)]
    pub traits: Vec<String>,
    pub text: String,
    #[serde(default)]
    pub flags: CardFlags,
    pub image: String,
    pub thumb: String,
    pub search_text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFlags {
    pub true_damage: bool,
}
