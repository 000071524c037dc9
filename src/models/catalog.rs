use serde::{Deserialize, Serialize};

use super::card::CardRecord;

/// The document the gallery loads: a version label and the ordered cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub version: String,
    pub cards: Vec<CardRecord>,
}

impl Catalog {
    pub fn new(version: impl Into<String>, cards: Vec<CardRecord>) -> Self {
        Self {
            version: version.into(),
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
