//! Upgrading catalogs written before image paths carried `_large.jpg`.

use crate::config::LARGE_SUFFIX;
use crate::error::{CatalogError, Result};
use crate::writer::write_atomic;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// Rewrite every card `image` ending in `.jpg` but not `_large.jpg` to the
/// `_large.jpg` form. Returns how many paths changed.
///
/// Works on the raw JSON so unknown keys survive untouched.
pub fn fix_large_suffix(doc: &mut Value) -> Result<usize> {
    let cards = doc
        .get_mut("cards")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| {
            CatalogError::InvalidArgument("Catalog has no \"cards\" array".to_string())
        })?;

    let mut fixed = 0;
    for card in cards.iter_mut() {
        let Some(Value::String(image)) = card.get_mut("image") else {
            continue;
        };
        if image.ends_with(LARGE_SUFFIX) {
            continue;
        }
        if let Some(stem) = image.strip_suffix(".jpg") {
            let upgraded = format!("{}{}", stem, LARGE_SUFFIX);
            *image = upgraded;
            fixed += 1;
        }
    }

    Ok(fixed)
}

/// Apply [`fix_large_suffix`] to the catalog at `input`, writing to `output`.
///
/// `output` is replaced atomically and may equal `input`.
pub fn fix_large_suffix_file(input: &Path, output: &Path) -> Result<usize> {
    if !input.exists() {
        return Err(CatalogError::NotFound(format!(
            "Catalog {} does not exist",
            input.display()
        )));
    }

    let mut doc: Value = serde_json::from_str(&fs::read_to_string(input)?)?;
    let fixed = fix_large_suffix(&mut doc)?;

    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    write_atomic(output, &out)?;

    info!(fixed, output = %output.display(), "updated image paths");
    Ok(fixed)
}
