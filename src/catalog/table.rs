// In-memory table of string cells with named columns.
//
// Every row holds exactly one cell per header; `push_row` pads or truncates
// to keep that true, so column lookups never go out of bounds.

use anyhow::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, padding missing trailing cells with empty strings.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Position of the first column with this exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Like `column_index`, but a missing column is an error naming both
    /// the column and the table it was expected in.
    pub fn require_column(&self, name: &str, source: &str) -> Result<usize> {
        match self.column_index(name) {
            Some(index) => Ok(index),
            None => anyhow::bail!(
                "Column \"{name}\" not found in {source} (columns: {})",
                self.headers.join(", ")
            ),
        }
    }

    /// All cells of one column, in row order.
    pub fn column(&self, index: usize) -> Vec<&str> {
        self.rows.iter().map(|row| row[index].as_str()).collect()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Every row with its cells joined by `separator`, in header order.
    pub fn joined_rows(&self, separator: &str) -> Vec<String> {
        self.rows.iter().map(|row| row.join(separator)).collect()
    }

    /// Replace a header name in place.
    pub fn rename_column(&mut self, index: usize, name: &str) {
        self.headers[index] = name.to_string();
    }

    /// Apply `f` to every cell of one column.
    pub fn map_column<F>(&mut self, index: usize, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        for row in &mut self.rows {
            row[index] = f(&row[index]);
        }
    }

    /// Write `values` into the named column, one per row.
    ///
    /// An existing column is overwritten in place; otherwise the column is
    /// appended after the last one.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            anyhow::bail!(
                "Column \"{name}\" has {} values for {} rows",
                values.len(),
                self.rows.len()
            );
        }
        let index = match self.column_index(name) {
            Some(index) => index,
            None => {
                self.headers.push(name.to_string());
                for row in &mut self.rows {
                    row.push(String::new());
                }
                self.headers.len() - 1
            }
        };
        for (row, value) in self.rows.iter_mut().zip(values) {
            row[index] = value;
        }
        Ok(())
    }
}
