// src/csv.rs
use std::io::{self, Write};

/* ---------------- Parsing ---------------- */

/// Rows of string cells as read from a CSV file. Row 0 is the header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CsvDocument {
    pub rows: Vec<Vec<String>>,
}

impl CsvDocument {
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(|r| r.as_slice())
    }

    /// Header cells, or an empty vec for an empty document.
    pub fn header_owned(&self) -> Vec<String> {
        self.header().map(|h| h.to_vec()).unwrap_or_default()
    }

    /// Everything after the header.
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Split on '\n' then on ','. Cells are trimmed and a trailing '\r' is
/// dropped with them.
///
/// No quoting: a comma inside a value splits it. Empty input gives an
/// empty document; nothing here can fail.
pub fn parse(text: &str) -> CsvDocument {
    if text.is_empty() {
        return CsvDocument::default();
    }

    let rows = text
        .split('\n')
        .map(|line| line.split(',').map(|cell| s!(cell.trim())).collect())
        .collect();

    CsvDocument { rows }
}

/// Data rows with at least `min_cells` cells and a non-empty first cell.
/// The header is never part of the result.
pub fn filter_valid_rows(doc: &CsvDocument, min_cells: usize) -> Vec<Vec<String>> {
    let mut dropped = 0usize;
    let rows: Vec<Vec<String>> = doc
        .data_rows()
        .iter()
        .filter(|row| {
            let keep = row.len() >= min_cells
                && row.first().map(|c| !c.is_empty()).unwrap_or(false);
            if !keep { dropped += 1; }
            keep
        })
        .cloned()
        .collect();

    if dropped > 0 {
        logd!("CSV: dropped {} malformed row(s) (min_cells={})", dropped, min_cells);
    }
    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { write!(w, "{}", sep)?; }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}
