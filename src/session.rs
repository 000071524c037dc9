//! The interactive generate-and-confirm run.

use crate::error::{CatalogError, Result};
use crate::operator::{clean_path_input, Operator};
use crate::CatalogGenerator;
use std::path::PathBuf;
use tracing::info;

/// How an interactive run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The catalog was written to `path`.
    Written { path: PathBuf, cards: usize },
    /// The operator declined; nothing was written.
    Declined { cards: usize },
}

/// Prompt for a sheet, version label and destination, build the catalog,
/// and write it once the operator confirms.
///
/// Any error (missing file, missing column, collision) ends the run before
/// anything is written.
pub fn run<O: Operator>(generator: &CatalogGenerator, operator: &mut O) -> Result<RunOutcome> {
    operator.say("Hey! This tool generates a JSON file for your card gallery.");

    let source = clean_path_input(&operator.ask("Paste the path to your CSV file")?);
    if !source.exists() {
        return Err(CatalogError::NotFound(format!(
            "Source sheet {} does not exist",
            source.display()
        )));
    }

    let version = operator.ask("What version label should go in the JSON? (e.g. v15, v16)")?;
    if version.is_empty() {
        return Err(CatalogError::InvalidArgument(
            "Version label must not be blank".to_string(),
        ));
    }

    let dest_raw = operator.ask("Where should the JSON be saved? (full path, including filename)")?;
    if dest_raw.is_empty() {
        return Err(CatalogError::InvalidArgument(
            "Destination path must not be blank".to_string(),
        ));
    }
    let dest = clean_path_input(&dest_raw);

    operator.say("Reading spreadsheet\u{2026}");
    let catalog = generator.generate(&source, &version)?;
    let cards = catalog.len();

    operator.say(&format!("I found {} cards.", cards));
    operator.say(&format!(
        "Images are expected under: {}/<guild>/",
        generator.images_root()
    ));
    operator.say(&format!("JSON will be written to:\n{}", dest.display()));

    if !operator.confirm("Does this all look correct?")? {
        operator.say("Okay, nothing written. Exiting.");
        info!(cards, "operator declined; nothing written");
        return Ok(RunOutcome::Declined { cards });
    }

    generator.write(&catalog, &dest)?;
    operator.say("Done. JSON generated successfully.");

    Ok(RunOutcome::Written { path: dest, cards })
}
