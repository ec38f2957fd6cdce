//! Delimited-table input shared by the prototype, case, and metadata readers.
//!
//! Tables are comma- or semicolon-separated text files with a header row.
//! The delimiter is auto-detected from the first line of each file: a
//! semicolon anywhere in that line selects `;`, otherwise `,`.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use crate::error::{HamnetError, Result};

/// Detect the delimiter used by a delimited text file's contents.
pub fn detect_delimiter(contents: &str) -> Result<u8> {
    let first_line = contents
        .lines()
        .next()
        .ok_or_else(|| HamnetError::table("file is empty"))?;
    Ok(if first_line.contains(';') { b';' } else { b',' })
}

/// An in-memory delimited table: trimmed headers plus data rows.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
}

/// One data row with its 1-based line number in the source file.
#[derive(Debug, Clone)]
pub struct Row {
    line: u64,
    cells: Vec<String>,
}

impl Table {
    /// Read a whole table from a file, auto-detecting the delimiter.
    ///
    /// Rows may be shorter or longer than the header; missing cells read as
    /// absent and extra cells are ignored by name-based access.
    pub fn open(path: &Path) -> Result<Table> {
        let contents = fs::read_to_string(path)
            .map_err(|e| HamnetError::table(format!("cannot read '{}': {e}", path.display())))?;
        let delimiter = detect_delimiter(&contents)
            .map_err(|_| HamnetError::table(format!("'{}' is empty", path.display())))?;
        debug!(
            "detected delimiter '{}' for '{}'",
            delimiter as char,
            path.display()
        );
        Table::parse(&contents, delimiter)
    }

    /// Parse table contents with an explicit delimiter.
    pub fn parse(contents: &str, delimiter: u8) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(contents.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| HamnetError::table(format!("failed to read header row: {e}")))?
            .iter()
            .map(|h| h.to_string())
            .collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(HamnetError::table("header row is empty"));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record =
                record.map_err(|e| HamnetError::table(format!("failed to read record: {e}")))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            rows.push(Row {
                line,
                cells: record.iter().map(|c| c.to_string()).collect(),
            });
        }

        Ok(Table { headers, rows })
    }

    /// Trimmed header names, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, in file order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Index of an exactly-matching column name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of a case-insensitively matching column name.
    pub fn find_column_ci(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.to_lowercase() == name.to_lowercase())
    }
}

impl Row {
    /// 1-based line number of this row in the source file.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Cell value by column index; `None` when the row is short.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Whether every cell is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.trim().is_empty())
    }
}
