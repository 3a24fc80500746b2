// Enriched table output.
//
// Output is UTF-8 with a leading byte-order mark so spreadsheet tools pick
// the right encoding. The file is written next to its destination first and
// renamed into place once complete.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::table::Table;
use super::{CATALOG_DELIMITER, UTF8_BOM};

/// Serialize a table (BOM, header, rows) to any writer.
pub fn write_table<W: Write>(mut writer: W, table: &Table) -> Result<()> {
    write!(writer, "{UTF8_BOM}")?;
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(CATALOG_DELIMITER)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(table.headers())?;
    for row in table.rows() {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a table to `path`, replacing any existing file only on success.
pub fn save_table(path: &Path, table: &Table) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    let result = File::create(&temp_path)
        .with_context(|| format!("Failed to create {}", temp_path.display()))
        .and_then(|file| write_table(BufWriter::new(file), table))
        .and_then(|()| {
            fs::rename(&temp_path, path)
                .with_context(|| format!("Failed to move output into {}", path.display()))
        });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result?;

    info!(file = %path.display(), rows = table.len(), "Wrote enriched table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut t = Table::new(vec!["Наименование".to_string(), "Описание".to_string()]);
        t.push_row(vec!["Диван".to_string(), "мягкий; серый".to_string()]);
        t
    }

    #[test]
    fn test_output_starts_with_bom() {
        let mut buf = Vec::new();
        write_table(&mut buf, &sample()).unwrap();
        assert_eq!(&buf[..3], b"\xEF\xBB\xBF");
    }

    #[test]
    fn test_output_layout() {
        let mut buf = Vec::new();
        write_table(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "\u{feff}Наименование;Описание\nДиван;\"мягкий; серый\"\n"
        );
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        save_table(&path, &sample()).unwrap();
        assert!(path.exists());
        assert!(!dir.path().join("out.tmp").exists());
    }
}
