//! Nommsters card catalog generator.
//!
//! Reads the card spreadsheet, normalizes every row into a gallery card
//! (slug id, image paths, rarity label, traits, flags, search text) and
//! writes the `{ "version", "cards" }` JSON document the card gallery loads.
//!
//! # Quick start
//!
//! ```no_run
//! use nommsters_catalog::CatalogGenerator;
//!
//! let generator = CatalogGenerator::builder().build().unwrap();
//! let catalog = generator.generate("cards.csv", "v16").unwrap();
//! generator.write(&catalog, "cards_v16.json").unwrap();
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod loader;
pub mod migrate;
pub mod models;
pub mod normalize;
pub mod operator;
pub mod session;
pub mod writer;

pub use connection::Connection;
pub use error::{CatalogError, Result};
pub use loader::SourceRow;
pub use models::{CardFlags, CardRecord, Catalog};
pub use normalize::Normalizer;
pub use operator::{ConsoleOperator, Operator};
pub use session::RunOutcome;

use std::fmt;
use std::path::Path;
use tracing::info;

// ---------------------------------------------------------------------------
// CatalogGeneratorBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CatalogGenerator`].
pub struct CatalogGeneratorBuilder {
    images_root: String,
}

impl Default for CatalogGeneratorBuilder {
    fn default() -> Self {
        Self {
            images_root: config::IMAGES_ROOT.to_string(),
        }
    }
}

impl CatalogGeneratorBuilder {
    /// Set the folder image paths are rooted at.
    ///
    /// Defaults to `cards`, giving `cards/<guild>/<slug>_large.jpg`.
    pub fn images_root(mut self, root: impl Into<String>) -> Self {
        let root: String = root.into();
        self.images_root = root.trim_end_matches('/').to_string();
        self
    }

    /// Build the generator, opening the in-memory DuckDB used to read sheets.
    pub fn build(self) -> Result<CatalogGenerator> {
        let conn = Connection::open_in_memory()?;
        Ok(CatalogGenerator {
            conn,
            images_root: self.images_root,
        })
    }
}

// ---------------------------------------------------------------------------
// CatalogGenerator
// ---------------------------------------------------------------------------

/// Loads card sheets and turns them into catalogs.
///
/// Every call to [`normalize`](Self::normalize) or
/// [`generate`](Self::generate) is an independent run with its own collision
/// tracking.
pub struct CatalogGenerator {
    conn: Connection,
    images_root: String,
}

impl CatalogGenerator {
    pub fn builder() -> CatalogGeneratorBuilder {
        CatalogGeneratorBuilder::default()
    }

    pub fn images_root(&self) -> &str {
        &self.images_root
    }

    /// Read the non-blank rows of a card sheet.
    pub fn load<P: AsRef<Path>>(&self, source: P) -> Result<Vec<SourceRow>> {
        loader::load_rows(&self.conn, source.as_ref())
    }

    /// Normalize rows into cards, failing on the first collision.
    pub fn normalize(&self, rows: &[SourceRow]) -> Result<Vec<CardRecord>> {
        Normalizer::new(self.images_root.as_str()).normalize_all(rows)
    }

    /// Load and normalize a sheet into a catalog labelled `version`.
    ///
    /// Nothing is written; pair with [`write`](Self::write).
    pub fn generate<P: AsRef<Path>>(&self, source: P, version: &str) -> Result<Catalog> {
        let rows = self.load(source)?;
        let cards = self.normalize(&rows)?;
        info!(version, cards = cards.len(), "generated catalog");
        Ok(Catalog::new(version, cards))
    }

    /// Write a catalog to `dest`, replacing any existing file atomically.
    pub fn write<P: AsRef<Path>>(&self, catalog: &Catalog, dest: P) -> Result<()> {
        writer::write_catalog(catalog, dest.as_ref())
    }
}

impl fmt::Display for CatalogGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CatalogGenerator(images_root={})", self.images_root)
    }
}
