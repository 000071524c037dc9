//! Catalog serialization and all-or-nothing file output.

use crate::error::{CatalogError, Result};
use crate::models::Catalog;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Render a catalog as pretty-printed JSON with a trailing newline.
///
/// Two-space indentation; non-ASCII text is written literally.
pub fn to_json_string(catalog: &Catalog) -> Result<String> {
    let mut out = serde_json::to_string_pretty(catalog)?;
    out.push('\n');
    Ok(out)
}

/// Write a catalog to `dest`.
///
/// The document goes to a temp file beside `dest` first and is renamed into
/// place only once fully written, so a failure never leaves a partial
/// catalog behind. Missing parent directories are created.
pub fn write_catalog(catalog: &Catalog, dest: &Path) -> Result<()> {
    let json = to_json_string(catalog)?;
    write_atomic(dest, &json)?;

    info!(
        path = %dest.display(),
        version = %catalog.version,
        cards = catalog.len(),
        "wrote catalog"
    );
    Ok(())
}

/// Replace `dest` with `contents` via a temp file in the same directory,
/// creating missing parent directories.
pub fn write_atomic(dest: &Path, contents: &str) -> Result<()> {
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    tmp.persist(dest).map_err(|e| CatalogError::Io(e.error))?;
    Ok(())
}

/// Read a catalog previously written by [`write_catalog`].
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(CatalogError::NotFound(format!(
            "Catalog {} does not exist",
            path.display()
        )));
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
