// Semicolon-delimited catalog loading.
//
// The first record is the header. Rows with more cells than the header are
// either dropped and counted (`BadLines::Skip`) or fatal (`BadLines::Error`).
// Short rows are padded. Invalid UTF-8 anywhere in the file is fatal.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::table::Table;
use super::{CATALOG_DELIMITER, UTF8_BOM};

/// What to do with a row that has more cells than the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadLines {
    /// Drop the row and keep going
    Skip,
    /// Abort the load
    Error,
}

/// A loaded table plus where it came from and how many rows were dropped.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: Table,
    /// Name used in diagnostics (usually the file path)
    pub source: String,
    pub skipped: usize,
}

impl LoadedTable {
    /// Wrap an in-memory table; nothing was skipped.
    pub fn in_memory(table: Table, source: &str) -> Self {
        Self {
            table,
            source: source.to_string(),
            skipped: 0,
        }
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.table.require_column(name, &self.source)
    }
}

/// Load a table from a file path; the path becomes the diagnostic source.
pub fn load_table(path: &Path, policy: BadLines) -> Result<LoadedTable> {
    let source = path.display().to_string();
    let file = File::open(path).with_context(|| format!("Failed to open {source}"))?;
    let loaded = read_table(file, policy, &source)?;
    info!(
        file = %source,
        rows = loaded.table.len(),
        skipped = loaded.skipped,
        columns = ?loaded.table.headers(),
        "Loaded catalog table"
    );
    Ok(loaded)
}

/// Read a table from any reader. `source` names the input in errors.
pub fn read_table<R: Read>(reader: R, policy: BadLines, source: &str) -> Result<LoadedTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(CATALOG_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("Failed to read header of {source}"))?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches(UTF8_BOM).to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    let width = headers.len();
    let mut table = Table::new(headers);
    let mut skipped = 0;

    for result in reader.records() {
        let record = result.with_context(|| format!("Failed to parse {source}"))?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            match policy {
                BadLines::Skip => {
                    debug!(file = %source, line, cells = record.len(), "Skipping malformed row");
                    skipped += 1;
                    continue;
                }
                BadLines::Error => anyhow::bail!(
                    "Error tokenizing {source}: expected {width} fields on line {line}, saw {}",
                    record.len()
                ),
            }
        }
        table.push_row(record.iter().map(str::to_string).collect());
    }

    if skipped > 0 {
        warn!(file = %source, skipped, "Dropped malformed rows");
    }

    Ok(LoadedTable {
        table,
        source: source.to_string(),
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_semicolon_table() {
        let data = "a;b\n1;2\n3;4\n";
        let loaded = read_table(data.as_bytes(), BadLines::Error, "t.csv").unwrap();
        assert_eq!(loaded.table.headers(), &["a", "b"]);
        assert_eq!(loaded.table.len(), 2);
        assert_eq!(loaded.skipped, 0);
    }

    #[test]
    fn test_bom_stripped_from_header() {
        let data = "\u{feff}name;id\nx;1\n";
        let loaded = read_table(data.as_bytes(), BadLines::Error, "t.csv").unwrap();
        assert_eq!(loaded.table.column_index("name"), Some(0));
    }

    #[test]
    fn test_skip_policy_drops_long_rows() {
        let data = "a;b\n1;2\n1;2;3\n4\n";
        let loaded = read_table(data.as_bytes(), BadLines::Skip, "t.csv").unwrap();
        assert_eq!(loaded.skipped, 1);
        assert_eq!(loaded.table.len(), 2);
        assert_eq!(loaded.table.cell(1, 0), Some("4"));
        assert_eq!(loaded.table.cell(1, 1), Some(""));
    }

    #[test]
    fn test_error_policy_rejects_long_rows() {
        let data = "a;b\n1;2\n1;2;3\n";
        let err = read_table(data.as_bytes(), BadLines::Error, "t.csv").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("t.csv"), "{msg}");
        assert!(msg.contains("line 3"), "{msg}");
    }

    #[test]
    fn test_quoted_delimiter_kept() {
        let data = "a;b\n\"x;y\";2\n";
        let loaded = read_table(data.as_bytes(), BadLines::Error, "t.csv").unwrap();
        assert_eq!(loaded.table.cell(0, 0), Some("x;y"));
    }

    #[test]
    fn test_invalid_utf8_is_fatal() {
        let data: &[u8] = b"a;b\n\xff\xfe;2\n";
        assert!(read_table(data, BadLines::Skip, "t.csv").is_err());
    }
}
