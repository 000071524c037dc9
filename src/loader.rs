//! Reads a card sheet into ordered [`SourceRow`]s.
//!
//! Header names are matched case-insensitively after trimming. Every column in
//! [`REQUIRED_COLUMNS`](crate::config::REQUIRED_COLUMNS) must be present before
//! any row is looked at; rows whose NAME is blank are dropped.

use crate::config;
use crate::connection::Connection;
use crate::error::{CatalogError, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Normalize a header name for lookup: trimmed and uppercased.
pub fn normalize_header(header: &str) -> String {
    header.trim().to_uppercase()
}

/// One sheet row, keyed by normalized column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRow {
    cells: HashMap<String, String>,
}

impl SourceRow {
    /// Build a row from raw `(header, value)` pairs.
    ///
    /// Headers are normalized; a later header that normalizes to the same
    /// name replaces an earlier one.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let cells = pairs
            .into_iter()
            .map(|(k, v)| (normalize_header(k.as_ref()), v.into()))
            .collect();
        Self { cells }
    }

    /// Trimmed cell text, or `None` when the column is absent.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(&normalize_header(column)).map(|s| s.trim())
    }

    /// Trimmed cell text, empty when the column is absent.
    pub fn text(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.cells.contains_key(&normalize_header(column))
    }
}

/// Fail with [`CatalogError::MissingColumn`] on the first required column
/// absent from `headers`.
pub fn check_required_columns<S: AsRef<str>>(headers: &[S]) -> Result<()> {
    let present: Vec<String> = headers.iter().map(|h| normalize_header(h.as_ref())).collect();
    for col in config::REQUIRED_COLUMNS {
        if !present.iter().any(|h| h == col) {
            return Err(CatalogError::MissingColumn(col.to_string()));
        }
    }
    Ok(())
}

/// Load a delimited card sheet.
///
/// Returns the non-blank rows in file order. Fails before reading rows if a
/// required column is missing.
pub fn load_rows(conn: &Connection, path: &Path) -> Result<Vec<SourceRow>> {
    if !path.exists() {
        return Err(CatalogError::NotFound(format!(
            "Source sheet {} does not exist",
            path.display()
        )));
    }

    let headers = conn.csv_columns(path)?;
    check_required_columns(headers.as_slice())?;

    let raw = conn.read_csv(path)?;
    let total = raw.len();
    let rows: Vec<SourceRow> = raw
        .into_iter()
        .map(SourceRow::from_pairs)
        .filter(|row| !row.text("NAME").is_empty())
        .collect();

    if rows.len() < total {
        warn!(skipped = total - rows.len(), "skipped rows with a blank NAME");
    }
    info!(path = %path.display(), rows = rows.len(), "loaded card sheet");
    Ok(rows)
}
