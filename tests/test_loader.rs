//! Sheet loading through DuckDB: header matching, required columns, blank rows.

mod common;

use nommsters_catalog::loader::{check_required_columns, load_rows, normalize_header};
use nommsters_catalog::{CatalogError, CatalogGenerator, Connection};
use std::io;
use std::sync::{Arc, Mutex};

/// Two headers that both normalize to NAME.
const DUPLICATE_NAME_SHEET: &str = "\
GUILD,RARITY,TYPE,NAME,TEXTBOX,TRAITS,COMBAT,name
Axalon,1,Character,Ember,,,,Other
";

// ---------------------------------------------------------------------------
// Header handling
// ---------------------------------------------------------------------------

#[test]
fn normalize_header_trims_and_uppercases() {
    assert_eq!(normalize_header("  Deals True Damage "), "DEALS TRUE DAMAGE");
}

#[test]
fn required_columns_match_case_insensitively() {
    let headers = [
        "guild", " Rarity", "TYPE", "Name ", "textbox", "Traits", "combat", "extra",
    ];
    assert!(check_required_columns(headers.as_slice()).is_ok());
}

#[test]
fn missing_required_column_is_reported_by_name() {
    let headers = ["GUILD", "RARITY", "TYPE", "NAME", "TEXTBOX", "TRAITS"];
    match check_required_columns(headers.as_slice()) {
        Err(CatalogError::MissingColumn(col)) => assert_eq!(col, "COMBAT"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// load_rows
// ---------------------------------------------------------------------------

#[test]
fn load_rows_skips_blank_names_and_keeps_order() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_sheet(tmp.path(), "cards.csv", common::SAMPLE_SHEET);
    let conn = Connection::open_in_memory().unwrap();

    let rows = load_rows(&conn, &path).unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.text("NAME")).collect();
    assert_eq!(names, vec!["Day's End", "Red \u{2013} Handed", "Salt&Pepper"]);
}

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn skipped_blank_rows_are_logged_as_a_warning() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_sheet(tmp.path(), "cards.csv", common::SAMPLE_SHEET);
    let conn = Connection::open_in_memory().unwrap();

    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || load_rows(&conn, &path).unwrap());

    let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("WARN"), "log was {:?}", output);
    assert!(output.contains("skipped rows with a blank NAME"));
    assert!(output.contains("skipped=1"));
}

#[test]
fn load_rows_exposes_cells_by_normalized_header() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_sheet(tmp.path(), "cards.csv", common::SAMPLE_SHEET);
    let conn = Connection::open_in_memory().unwrap();

    let rows = load_rows(&conn, &path).unwrap();
    let first = &rows[0];
    assert_eq!(first.text("guild"), "Axalon");
    assert_eq!(first.text("TEXTBOX"), "Deal \u{1F525} damage, then \u{1F525} again.");
    assert_eq!(first.text("Deals True Damage"), "TRUE");
    assert_eq!(first.text("NOTES"), "art pending");
    assert!(first.has_column("POWER"));
}

#[test]
fn load_rows_maps_empty_cells_to_empty_text() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_sheet(tmp.path(), "cards.csv", common::SAMPLE_SHEET);
    let conn = Connection::open_in_memory().unwrap();

    let rows = load_rows(&conn, &path).unwrap();
    let second = &rows[1];
    assert_eq!(second.text("TRAITS"), "");
    assert_eq!(second.text("COMBAT"), "");
    assert_eq!(second.get("POWER"), Some(""));
    assert_eq!(second.get("NOT A COLUMN"), None);
}

#[test]
fn load_rows_fails_fast_on_missing_column() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_sheet(tmp.path(), "cards.csv", common::INCOMPLETE_SHEET);
    let conn = Connection::open_in_memory().unwrap();

    let err = load_rows(&conn, &path).unwrap_err();
    assert!(matches!(err, CatalogError::MissingColumn(ref c) if c == "COMBAT"));
    assert_eq!(err.to_string(), "Missing required column: COMBAT");
}

#[test]
fn load_rows_reports_missing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let conn = Connection::open_in_memory().unwrap();

    let err = load_rows(&conn, &tmp.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[test]
fn load_rows_tolerates_absent_optional_columns() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_sheet(tmp.path(), "cards.csv", common::COLLIDING_SHEET);
    let conn = Connection::open_in_memory().unwrap();

    let rows = load_rows(&conn, &path).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(!rows[0].has_column("POWER"));
    assert_eq!(rows[0].get("POWER"), None);
}

#[test]
fn header_only_sheet_loads_no_rows() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_sheet(
        tmp.path(),
        "cards.csv",
        "GUILD,RARITY,TYPE,NAME,TEXTBOX,TRAITS,COMBAT\n",
    );
    let conn = Connection::open_in_memory().unwrap();

    let rows = load_rows(&conn, &path).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn header_only_sheet_still_checks_required_columns() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_sheet(
        tmp.path(),
        "cards.csv",
        "GUILD,RARITY,TYPE,NAME,TEXTBOX,TRAITS\n",
    );
    let conn = Connection::open_in_memory().unwrap();

    let err = load_rows(&conn, &path).unwrap_err();
    assert!(matches!(err, CatalogError::MissingColumn(ref c) if c == "COMBAT"));
}

#[test]
fn sheet_headers_are_read_as_written() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_sheet(tmp.path(), "cards.csv", DUPLICATE_NAME_SHEET);
    let conn = Connection::open_in_memory().unwrap();

    let columns = conn.csv_columns(&path).unwrap();
    assert_eq!(
        columns,
        vec!["GUILD", "RARITY", "TYPE", "NAME", "TEXTBOX", "TRAITS", "COMBAT", "name"]
    );
}

#[test]
fn later_duplicate_sheet_column_wins() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_sheet(tmp.path(), "cards.csv", DUPLICATE_NAME_SHEET);
    let conn = Connection::open_in_memory().unwrap();

    let rows = load_rows(&conn, &path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text("NAME"), "Other");
    assert_eq!(rows[0].text("GUILD"), "Axalon");
}

#[test]
fn generated_catalog_uses_later_duplicate_column() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_sheet(tmp.path(), "cards.csv", DUPLICATE_NAME_SHEET);
    let generator = CatalogGenerator::builder().build().unwrap();

    let catalog = generator.generate(&path, "v16").unwrap();
    let names: Vec<&str> = catalog.cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Other"]);
}

// ---------------------------------------------------------------------------
// SourceRow
// ---------------------------------------------------------------------------

#[test]
fn later_duplicate_header_wins() {
    let row = common::row(&[("Name", "First"), (" NAME ", "Second")]);
    assert_eq!(row.text("name"), "Second");
}
