//! DuckDB connection wrapper used to read tabular card sheets.
//!
//! Sheets are read through DuckDB's CSV sniffer with every column forced to
//! VARCHAR, so cells reach the normalizer exactly as they were typed. The
//! header line is read as an ordinary record, so header names arrive exactly
//! as written and are never renamed or de-duplicated.

use crate::error::Result;
use duckdb::{types::ValueRef, Connection as DuckDbConnection};
use std::path::Path;
use tracing::debug;

/// Wraps an in-memory DuckDB connection.
pub struct Connection {
    conn: DuckDbConnection,
}

impl Connection {
    /// Open an in-memory DuckDB database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Return the header names of a delimited file, in file order.
    ///
    /// Only the first record is read, so a header-only file still reports its
    /// columns. Repeated names are returned as written.
    pub fn csv_columns(&self, path: &Path) -> Result<Vec<String>> {
        let columns = self
            .read_records(path, Some(1))?
            .into_iter()
            .next()
            .unwrap_or_default();

        debug!(path = %path.display(), ?columns, "read sheet header");
        Ok(columns)
    }

    /// Read every data row of a delimited file as raw text cells.
    ///
    /// Rows come back in file order, each as `(header, cell)` pairs in header
    /// order as reported by [`csv_columns`](Self::csv_columns). NULL cells
    /// become empty strings.
    pub fn read_csv(&self, path: &Path) -> Result<Vec<Vec<(String, String)>>> {
        let mut records = self.read_records(path, None)?.into_iter();
        let header = records.next().unwrap_or_default();

        let out: Vec<Vec<(String, String)>> = records
            .map(|cells| header.iter().cloned().zip(cells).collect())
            .collect();

        debug!(path = %path.display(), rows = out.len(), "read sheet rows");
        Ok(out)
    }

    /// Read the records of a delimited file positionally, header line
    /// included, optionally stopping after `limit` records.
    fn read_records(&self, path: &Path, limit: Option<usize>) -> Result<Vec<Vec<String>>> {
        let expr = read_csv_expr(path);
        let width: usize = self.conn.query_row(
            &format!("SELECT count(*) FROM (DESCRIBE SELECT * FROM {})", expr),
            [],
            |row| row.get::<_, i64>(0),
        )? as usize;

        let sql = match limit {
            Some(n) => format!("SELECT * FROM {} LIMIT {}", expr, n),
            None => format!("SELECT * FROM {}", expr),
        };
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;

        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(width);
            for i in 0..width {
                cells.push(cell_text(row.get_ref(i)?));
            }
            out.push(cells);
        }
        Ok(out)
    }
}

/// Build the `read_csv(...)` table expression for a file path.
///
/// The delimiter is sniffed; quoting is pinned to `"` so apostrophes in card
/// names are never taken for quote characters. The header line comes back as
/// the first record.
fn read_csv_expr(path: &Path) -> String {
    // Use forward slashes for DuckDB compatibility
    let path_str = path.to_string_lossy().replace('\\', "/").replace('\'', "''");
    format!(
        "read_csv('{}', header = false, all_varchar = true, null_padding = true, \
         quote = '\"', escape = '\"')",
        path_str
    )
}

/// Render a DuckDB cell as the text it was read from.
fn cell_text(val: ValueRef<'_>) -> String {
    match val {
        ValueRef::Null => String::new(),
        ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        ValueRef::Boolean(b) => b.to_string(),
        ValueRef::TinyInt(n) => n.to_string(),
        ValueRef::SmallInt(n) => n.to_string(),
        ValueRef::Int(n) => n.to_string(),
        ValueRef::BigInt(n) => n.to_string(),
        ValueRef::HugeInt(n) => n.to_string(),
        ValueRef::Float(f) => f.to_string(),
        ValueRef::Double(f) => f.to_string(),
        // all_varchar keeps every column as text; anything else is unexpected
        _ => String::new(),
    }
}
